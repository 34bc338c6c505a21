//! Error message constants used throughout the application.

pub const ERR_RESOURCE_NOT_FOUND: &str = "Resource not found";
