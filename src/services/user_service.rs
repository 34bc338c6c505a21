//! User service: a thin façade over the user repository.
//!
//! Every operation forwards to the repository unchanged. Repository errors
//! propagate to the caller as-is.

use std::sync::Arc;

use log::debug;

use crate::errors::ApiError;
use crate::models::User;
use crate::repositories::UserRepository;
use crate::utils::mask_email;

pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Look up a user by exact email and password. The password is not hashed.
    pub async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, ApiError> {
        debug!("Finding user by credentials: {}", mask_email(email));
        self.repository
            .find_by_email_and_password(email, password)
            .await
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, ApiError> {
        Ok(self.repository.find_by_email(email).await?.is_some())
    }

    /// Persist a user. No validation or duplicate-email check happens here.
    pub async fn save_user(&self, user: &User) -> Result<(), ApiError> {
        debug!("Saving user: {}", mask_email(&user.email));
        self.repository.save(user).await
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, ApiError> {
        let users = self.repository.find_all().await?;
        debug!("Fetched {} users", users.len());
        Ok(users)
    }
}
