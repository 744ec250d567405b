//! Welcome endpoint.

use axum::Json;
use serde::Serialize;

/// Constant greeting returned by `GET /`.
#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    #[serde(rename = "Message")]
    pub message: &'static str,
}

/// `GET /` → `{"Message": "Welcome"}`.
pub async fn home() -> Json<WelcomeResponse> {
    Json(WelcomeResponse { message: "Welcome" })
}
