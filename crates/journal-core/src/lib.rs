//! # Journal Core
//!
//! The domain layer of the journal backend.
//! This crate contains the post model, draft validation and the storage port,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod seed;

pub use error::{DomainError, RepoError};
