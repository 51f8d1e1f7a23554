/// API route modules
pub mod home;
pub mod info;
pub mod users;
pub mod verify;

use crate::state::AppState;
use axum::{routing::get, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
pub fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/verify", get(verify::verify_user).post(verify::verify_user))
        .route("/users", get(users::list_users).post(users::add_user))
        .route("/info", get(info::api_info));

    Router::new()
        .route("/", get(home::home))
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
