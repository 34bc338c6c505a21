use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;

use crate::constants::{CODE_INTERNAL_ERROR, CODE_NOT_FOUND, ERR_RESOURCE_NOT_FOUND};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: String,
    pub message: String,
}

#[derive(Debug)]
pub enum ApiError {
    NotFound { code: String, message: String },
    InternalServerError { code: String, message: String },
}

impl ApiError {
    /// Error returned for requests that match no registered route.
    pub fn route_not_found() -> Self {
        ApiError::NotFound {
            code: CODE_NOT_FOUND.to_string(),
            message: ERR_RESOURCE_NOT_FOUND.to_string(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::InternalServerError {
            code: CODE_INTERNAL_ERROR.to_string(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound { code, message } => {
                write!(f, "Not Found [{}]: {}", code, message)
            }
            ApiError::InternalServerError { code, message } => {
                write!(f, "Internal Server Error [{}]: {}", code, message)
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::InternalServerError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::NotFound { code, message } => HttpResponse::NotFound().json(ErrorResponse {
                success: false,
                code: code.clone(),
                message: message.clone(),
            }),
            ApiError::InternalServerError { code, message } => HttpResponse::InternalServerError()
                .json(ErrorResponse {
                    success: false,
                    code: code.clone(),
                    message: message.clone(),
                }),
        }
    }
}

impl From<mongodb::error::Error> for ApiError {
    fn from(err: mongodb::error::Error) -> Self {
        ApiError::internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_internal_error_response() {
        let err = ApiError::internal("connection refused");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], CODE_INTERNAL_ERROR);
        assert_eq!(json["message"], "connection refused");
    }

    #[actix_web::test]
    async fn test_not_found_response() {
        let err = ApiError::route_not_found();
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], CODE_NOT_FOUND);
        assert_eq!(json["message"], ERR_RESOURCE_NOT_FOUND);
    }

    #[test]
    fn test_display() {
        let err = ApiError::internal("boom");
        assert_eq!(err.to_string(), "Internal Server Error [INTERNAL_ERROR]: boom");
    }
}
