//! API route definitions

use std::time::Instant;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, ApiInfoResponse, EndpointDescriptor, HealthResponse};
use crate::config::Config;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Jenkins CI/CD Demo App",
        version = "1.0.0",
        description = "Demo web service deployed via a Jenkins CI/CD pipeline"
    ),
    tags(
        (name = "pages", description = "HTML pages"),
        (name = "health", description = "Health checks"),
        (name = "info", description = "Service metadata")
    ),
    paths(
        handlers::home,
        handlers::health,
        handlers::api_info,
    ),
    components(schemas(
        HealthResponse,
        ApiInfoResponse,
        EndpointDescriptor,
    ))
)]
pub struct ApiDoc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            started_at: Instant::now(),
        }
    }
}

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let openapi = ApiDoc::openapi();

    Router::new()
        // Pages
        .route("/", get(handlers::home))

        // Health
        .route("/health", get(handlers::health))

        // Service metadata
        .route("/api/info", get(handlers::api_info))

        // OpenAPI spec and Swagger UI
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", openapi))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
