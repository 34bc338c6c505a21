//! In-memory user repository.

use async_trait::async_trait;
use log::debug;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use crate::errors::ApiError;
use crate::models::User;
use crate::repositories::UserRepository;
use crate::utils::mask_email;

/// Keeps users in insertion order behind an async lock. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `users` as-is, ids included.
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        Ok(self.users.read().await.clone())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by email: {}", mask_email(email));
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, ApiError> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned())
    }

    async fn save(&self, user: &User) -> Result<(), ApiError> {
        let mut users = self.users.write().await;

        let Some(id) = user.id else {
            let id = ObjectId::new();
            debug!("Repository: Inserted user: {}", id);
            users.push(User {
                id: Some(id),
                ..user.clone()
            });
            return Ok(());
        };

        match users.iter_mut().find(|u| u.id == Some(id)) {
            Some(existing) => *existing = user.clone(),
            None => users.push(user.clone()),
        }
        Ok(())
    }
}
