/// API information route
use axum::Json;
use serde_json::{json, Value};

/// GET /api/info - Describe the available endpoints
pub async fn api_info() -> Json<Value> {
    Json(json!({
        "message": "User Verification API",
        "endpoints": {
            "/": "Visual database viewer",
            "/api/verify": "Verify user exists (requires X-Username header)",
            "/api/users": "GET: List all users, POST: Add new user",
            "/api/info": "This API information",
        },
        "usage": "Send GET request to /api/verify with X-Username header",
    }))
}
