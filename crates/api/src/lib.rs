//! Notaria customer records service library.
//!
//! This crate provides the HTTP service as a library, allowing the router,
//! repository, and error mapping to be tested without a running binary.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
