//! User-related response models.

use serde::{Deserialize, Serialize};

use crate::models::User;

/// User data returned in API responses.
///
/// Carries every readable field of the stored user, the password included.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct UserResponse {
    /// Hex form of the store identifier, absent for unsaved users
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.map(|id| id.to_hex()),
            email: user.email,
            password: user.password,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}
