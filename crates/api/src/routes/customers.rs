//! Customer record route handlers.
//!
//! JSON field names follow the public API (`cliente_id`, `nombre`,
//! `apellido`, `email`, `telefono`, `fecha_registro`); the Rust side uses the
//! domain names.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use notaria_core::{CustomerId, Email, PersonName, Phone};

use super::MessageResponse;
use crate::db::CustomerRepository;
use crate::error::{AppError, CUSTOMER_NOT_FOUND, Result};
use crate::models::{Customer, NewCustomer};
use crate::state::AppState;

const CUSTOMER_DELETED: &str = "Cliente eliminado";

/// Request body for `POST /clientes`.
#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    #[serde(rename = "nombre")]
    pub first_name: PersonName,
    #[serde(rename = "apellido")]
    pub last_name: PersonName,
    pub email: Email,
    #[serde(rename = "telefono")]
    pub phone: Option<Phone>,
    /// `YYYY-MM-DD`; today's date when omitted.
    #[serde(rename = "fecha_registro")]
    pub registration_date: Option<NaiveDate>,
}

impl CreateCustomerRequest {
    /// Resolve the request into insertable fields, defaulting the
    /// registration date to `today`.
    #[must_use]
    pub fn into_new_customer(self, today: NaiveDate) -> NewCustomer {
        NewCustomer {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            phone: self.phone,
            registration_date: self.registration_date.unwrap_or(today),
        }
    }
}

/// Customer representation returned by every customer endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponse {
    #[serde(rename = "cliente_id")]
    pub id: CustomerId,
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido")]
    pub last_name: String,
    pub email: String,
    #[serde(rename = "telefono")]
    pub phone: Option<String>,
    #[serde(rename = "fecha_registro")]
    pub registration_date: NaiveDate,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            first_name: customer.first_name.into_inner(),
            last_name: customer.last_name.into_inner(),
            email: customer.email.into_inner(),
            phone: customer.phone.map(Phone::into_inner),
            registration_date: customer.registration_date,
        }
    }
}

/// Resolve a path id. Integers outside the key range can never name a
/// stored customer, so they are reported as not found.
fn customer_id(raw: i64) -> Result<CustomerId> {
    i32::try_from(raw)
        .map(CustomerId::new)
        .map_err(|_| AppError::NotFound(CUSTOMER_NOT_FOUND.to_string()))
}

/// `GET /clientes` - every stored customer.
pub async fn index(State(state): State<AppState>) -> Result<Json<Vec<CustomerResponse>>> {
    let customers = CustomerRepository::new(state.pool()).list_all().await?;
    tracing::debug!(count = customers.len(), "Listed customers");

    Ok(Json(
        customers.into_iter().map(CustomerResponse::from).collect(),
    ))
}

/// `GET /clientes/{id}` - a single customer.
pub async fn show(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<CustomerResponse>> {
    let Path(id) = id?;
    let id = customer_id(id)?;

    let customer = CustomerRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(CUSTOMER_NOT_FOUND.to_string()))?;

    Ok(Json(customer.into()))
}

/// `POST /clientes` - register a new customer.
pub async fn create(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateCustomerRequest>, JsonRejection>,
) -> Result<Json<CustomerResponse>> {
    let Json(payload) = payload?;
    let new_customer = payload.into_new_customer(Utc::now().date_naive());

    let customer = CustomerRepository::new(state.pool())
        .create(&new_customer)
        .await?;

    tracing::info!(customer_id = %customer.id, "Customer created");

    Ok(Json(customer.into()))
}

/// `DELETE /clientes/{id}` - permanently remove a customer.
pub async fn destroy(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>> {
    let Path(id) = id?;
    let id = customer_id(id)?;

    CustomerRepository::new(state.pool()).delete(id).await?;

    tracing::info!(customer_id = %id, "Customer deleted");

    Ok(Json(MessageResponse::new(CUSTOMER_DELETED)))
}
