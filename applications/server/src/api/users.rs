/// User listing and registration API routes
use crate::{
    error::{ApiError, Result},
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use registry_core::{InsertOutcome, User, Username};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub success: bool,
    pub count: usize,
    pub users: Vec<User>,
}

#[derive(Debug, Deserialize)]
pub struct AddUserRequest {
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AddUserResponse {
    pub success: bool,
    pub message: String,
    pub username: String,
}

/// GET /api/users - List all users
pub async fn list_users(State(app_state): State<AppState>) -> Result<Json<UsersResponse>> {
    let users = app_state.store.list().await?;

    Ok(Json(UsersResponse {
        success: true,
        count: users.len(),
        users,
    }))
}

/// POST /api/users - Register a new user
///
/// Any body that does not deserialize to an object with a non-blank string
/// `username` is treated as a missing parameter.
pub async fn add_user(
    State(app_state): State<AppState>,
    body: std::result::Result<Json<AddUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AddUserResponse>)> {
    let username = body
        .ok()
        .and_then(|Json(req)| req.username)
        .and_then(|raw| Username::parse(raw).ok())
        .ok_or_else(ApiError::missing_username_field)?;

    match app_state.store.insert(&username).await? {
        InsertOutcome::Inserted(user) => {
            tracing::info!(id = user.id, username = %user.username, "User added");
            Ok((
                StatusCode::CREATED,
                Json(AddUserResponse {
                    success: true,
                    message: format!("User {} added successfully", user.username),
                    username: user.username,
                }),
            ))
        }
        InsertOutcome::Conflict => Err(ApiError::DuplicateKey(username.into_inner())),
    }
}
