//! Notaria Core - Shared types library.
//!
//! This crate provides the domain types used by the Notaria customer records
//! service (`notaria-api`) and its integration tests.
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, names, emails, and phones

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
