use axum::Json;

use crate::response::MessageResponse;

/// GET /
pub async fn welcome() -> Json<MessageResponse> {
    Json(MessageResponse::new("Welcome - Patient Management Info"))
}

/// GET /about
pub async fn about() -> Json<MessageResponse> {
    Json(MessageResponse::new(
        "This is a patient record retrieval and management platform.",
    ))
}
