//! Customer domain types.
//!
//! These types represent validated domain objects separate from database row
//! types and from the JSON shapes exposed over HTTP.

use chrono::NaiveDate;

use notaria_core::{CustomerId, Email, PersonName, Phone};

/// A stored customer record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    /// Storage-assigned ID, immutable once created.
    pub id: CustomerId,
    /// Customer's first name.
    pub first_name: PersonName,
    /// Customer's last name.
    pub last_name: PersonName,
    /// Email address, unique across all customers.
    pub email: Email,
    /// Optional contact phone.
    pub phone: Option<Phone>,
    /// Date the customer was registered.
    pub registration_date: NaiveDate,
}

/// Fields required to insert a new customer.
///
/// The ID is absent because the database assigns it. The registration date is
/// already resolved: callers that omit it get the current date before the
/// record reaches the repository.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub email: Email,
    pub phone: Option<Phone>,
    pub registration_date: NaiveDate,
}
