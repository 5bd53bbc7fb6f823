//! Core types for Notaria.
//!
//! This module provides type-safe wrappers for the customer record fields.

pub mod email;
pub mod id;
pub mod name;
pub mod phone;

pub use email::{Email, EmailError};
pub use id::CustomerId;
pub use name::{NameError, PersonName};
pub use phone::{Phone, PhoneError};
