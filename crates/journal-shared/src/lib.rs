//! # Journal Shared
//!
//! The wire contract between the journal API and its clients:
//! route paths and the non-entity response bodies.

pub mod response;
pub mod routes;

pub use response::{ErrorResponse, HealthResponse};
