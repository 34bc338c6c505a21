//! Application constants module.
//!
//! Centralizes collection names, error codes and error messages so that
//! handlers, services and repositories agree on them.

pub mod collections;
pub mod error_codes;
pub mod errors;

pub use collections::*;
pub use error_codes::*;
pub use errors::*;
