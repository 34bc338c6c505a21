//! User registration and listing API.
//!
//! Requests flow handler → [`services::UserService`] → [`repositories::UserRepository`].
//! `main` is the composition root that picks the repository backend.

pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod utils;
