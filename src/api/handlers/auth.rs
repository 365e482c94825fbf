use axum::Json;

use crate::api::dto::MessageResponse;

/// Login placeholder. No credential checking or token issuance yet.
pub async fn login() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Login endpoint - not implemented".to_string(),
    })
}

/// Logout placeholder.
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Logout endpoint - not implemented".to_string(),
    })
}
