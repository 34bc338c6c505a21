//! User listing handler.

use actix_web::{web, HttpResponse};
use log::info;

use crate::errors::ApiError;
use crate::models::UserResponse;
use crate::services::UserService;

/// List every registered user.
///
/// No pagination or filtering: the response is the service's full result set
/// as a bare JSON array. Failures are rendered by [`ApiError`].
pub async fn get_users(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let users: Vec<UserResponse> = user_service
        .get_all_users()
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    info!("Listing {} users", users.len());
    Ok(HttpResponse::Ok().json(users))
}
