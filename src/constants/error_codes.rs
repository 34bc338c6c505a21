//! Error code constants for API responses.
//!
//! These codes give API clients a machine-readable identifier for each error.

pub const CODE_NOT_FOUND: &str = "NOT_FOUND";
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";
