//! Root greeting. Carries no business meaning; useful as a smoke check.

use axum::{Json, Router, routing::get};
use domain_items::MessageResponse;

pub const GREETING: &str = "Hello World!";

pub fn router() -> Router {
    Router::new().route("/", get(greeting))
}

/// Static greeting
#[utoipa::path(
    get,
    path = "/",
    tag = "Root",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    )
)]
pub async fn greeting() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: GREETING.to_string(),
    })
}
