//! MongoDB-backed user repository.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::doc;
use mongodb::{Collection, Database, IndexModel};

use crate::constants::COLLECTION_USERS;
use crate::errors::ApiError;
use crate::models::User;
use crate::repositories::UserRepository;
use crate::utils::mask_email;

/// Repository for the `users` collection.
#[derive(Clone)]
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(COLLECTION_USERS),
        }
    }

    /// Create indexes for commonly queried fields.
    ///
    /// Should be called once at startup. The `email` index is deliberately
    /// non-unique: duplicate emails are accepted by `save`.
    pub async fn create_indexes(&self) -> Result<(), ApiError> {
        info!("Creating database indexes for users collection...");

        let index = IndexModel::builder().keys(doc! { "email": 1 }).build();
        self.collection.create_index(index).await?;

        info!("Database indexes created successfully");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        debug!("Repository: Finding all users");
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        debug!("Repository: Finding user by email: {}", mask_email(email));
        Ok(self.collection.find_one(doc! { "email": email }).await?)
    }

    async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, ApiError> {
        debug!(
            "Repository: Finding user by email and password: {}",
            mask_email(email)
        );
        Ok(self
            .collection
            .find_one(doc! { "email": email, "password": password })
            .await?)
    }

    async fn save(&self, user: &User) -> Result<(), ApiError> {
        match user.id {
            Some(id) => {
                debug!("Repository: Replacing user: {}", id);
                self.collection
                    .replace_one(doc! { "_id": id }, user)
                    .upsert(true)
                    .await?;
            }
            None => {
                let result = self.collection.insert_one(user).await?;
                debug!("Repository: Inserted user: {}", result.inserted_id);
            }
        }
        Ok(())
    }
}
