//! Root informational route.

use axum::Json;

use super::MessageResponse;

const WELCOME: &str =
    "Bienvenido a la API de la Notaría. Use los endpoints disponibles para interactuar.";

/// `GET /` - static welcome message.
pub async fn home() -> Json<MessageResponse> {
    Json(MessageResponse::new(WELCOME))
}
