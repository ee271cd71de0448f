//! Logic module.

#![warn(clippy::all)]

pub mod diff;
pub mod errors;
pub mod operation_log;
pub mod use_cases;

pub use errors::{DomainError, Result};
