/// Viewer page route
use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// GET / - Browser view of the user table
pub async fn home() -> Html<&'static str> {
    Html(INDEX_HTML)
}
