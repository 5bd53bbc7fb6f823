//! Domain models for the customer records service.

pub mod customer;

pub use customer::{Customer, NewCustomer};
