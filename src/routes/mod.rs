use actix_web::{web, HttpResponse};

use crate::errors::ApiError;
use crate::handlers;
use crate::models::HealthResponse;

/// Route table for the API.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Health check
            .route("/health", web::get().to(health_check))
            // List all registered users
            .route("/users", web::get().to(handlers::get_users)),
    );
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::ok())
}

/// Fallback for requests that match no route.
pub async fn not_found() -> Result<HttpResponse, ApiError> {
    Err(ApiError::route_not_found())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use serde_json::{json, Value};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_routes)).await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({ "status": "OK", "message": "Server is running" }));
    }

    #[actix_web::test]
    async fn test_unknown_route_is_json_not_found() {
        let app = test::init_service(
            App::new()
                .configure(configure_routes)
                .default_service(web::route().to(not_found)),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/unknown").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["success"], false);
    }
}
