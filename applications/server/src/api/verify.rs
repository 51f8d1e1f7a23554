/// Username verification API route
use crate::{
    error::{ApiError, Result},
    extract::UsernameHeader,
    state::AppState,
};
use axum::{extract::State, Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub message: String,
    pub username: String,
}

/// GET|POST /api/verify - Check that the user named in the
/// `X-Username` (or `Username`) header exists
pub async fn verify_user(
    State(app_state): State<AppState>,
    UsernameHeader(username): UsernameHeader,
) -> Result<Json<VerifyResponse>> {
    if !app_state.store.exists(username.as_str()).await? {
        tracing::debug!(username = %username, "Verification failed");
        return Err(ApiError::NotFound(username.into_inner()));
    }

    Ok(Json(VerifyResponse {
        success: true,
        message: format!("User {} exists", username),
        username: username.into_inner(),
    }))
}
