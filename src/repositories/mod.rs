//! Repository layer for user persistence.
//!
//! Services depend on the [`UserRepository`] trait only. The backend is chosen
//! at startup: MongoDB in production, an in-memory store for tests and local runs.

pub mod memory_repository;
pub mod user_repository;

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::User;

pub use memory_repository::InMemoryUserRepository;
pub use user_repository::MongoUserRepository;

/// Lookup and save operations over stored users.
///
/// Lookups are exact-match; a missing user is `Ok(None)`, never an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Every stored user, in storage order.
    async fn find_all(&self) -> Result<Vec<User>, ApiError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, ApiError>;

    /// Insert the user, or replace the stored record with the same id.
    async fn save(&self, user: &User) -> Result<(), ApiError>;
}
