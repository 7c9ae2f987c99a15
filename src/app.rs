use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use crate::database::DbPool;
use crate::logging::request_logger;
use crate::routes::api_router;
use crate::VERSION;

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

#[derive(Serialize)]
struct HealthcheckResponse {
    status: String,
    version: String,
}

async fn healthcheck() -> Json<HealthcheckResponse> {
    Json(HealthcheckResponse {
        status: "healthy".to_string(),
        version: VERSION.to_string(),
    })
}

pub fn create_app(pool: DbPool) -> Router {
    let state = AppState { pool };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/healthcheck", get(healthcheck))
        .merge(api_router());

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use crate::test_utils::create_test_app;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    #[tokio::test]
    async fn test_healthcheck() {
        let (app, _pool) = create_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/healthcheck").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: Value = response.json();
        assert_eq!(body, json!({ "status": "healthy", "version": "0.1.0" }));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (app, _pool) = create_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/spots/nowhere").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }
}
