//! Integration tests for the Notaria API.
//!
//! # Running Tests
//!
//! ```bash
//! # Start PostgreSQL and the service
//! NOTARIA_DATABASE_URL=postgres://localhost/notaria cargo run -p notaria-api
//!
//! # Run integration tests against it
//! NOTARIA_BASE_URL=http://localhost:8000 cargo test -p notaria-integration-tests -- --ignored
//! ```
//!
//! The tests create customers with unique emails and delete them afterwards,
//! so they can run against a database that already holds data.

use chrono::NaiveDate;
use notaria_core::CustomerId;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

/// Base URL for the API (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("NOTARIA_BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}

/// Customer representation as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Cliente {
    pub cliente_id: CustomerId,
    pub nombre: String,
    pub apellido: String,
    pub email: String,
    pub telefono: Option<String>,
    pub fecha_registro: NaiveDate,
}

/// A unique email so tests never collide with existing rows.
#[must_use]
pub fn unique_email() -> String {
    format!("integration-test-{}@example.com", Uuid::new_v4())
}

/// Minimal valid create payload.
#[must_use]
pub fn create_payload(email: &str) -> Value {
    json!({"nombre": "Ana", "apellido": "Lopez", "email": email})
}

/// Create a customer and return it, asserting success.
///
/// # Panics
///
/// Panics if the request fails or the API does not return 200.
pub async fn create_customer(client: &Client, email: &str) -> Cliente {
    let resp = client
        .post(format!("{}/clientes", base_url()))
        .json(&create_payload(email))
        .send()
        .await
        .expect("Failed to create test customer");

    assert_eq!(resp.status(), StatusCode::OK);
    resp.json().await.expect("Failed to parse created customer")
}

/// Delete a customer, ignoring the outcome.
pub async fn delete_customer(client: &Client, id: CustomerId) {
    let _ = client
        .delete(format!("{}/clientes/{id}", base_url()))
        .send()
        .await;
}
