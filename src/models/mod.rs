//! Data models organized by type.

pub mod responses;
pub mod user;

pub use responses::*;
pub use user::*;
