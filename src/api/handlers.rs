//! API request handlers

use axum::{extract::State, response::Html, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::routes::AppState;
use super::templates;

// Response types

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status, always "healthy" while the process is serving
    pub status: String,
    /// ISO 8601 timestamp of the check
    pub timestamp: String,
    /// Process uptime in seconds
    pub uptime: f64,
    /// Deployment environment label
    pub environment: String,
    /// Crate version
    pub version: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiInfoResponse {
    /// Service name
    pub name: String,
    /// Crate version
    pub version: String,
    /// Short service description
    pub description: String,
    /// Descriptors for every exposed endpoint
    pub endpoints: Vec<EndpointDescriptor>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointDescriptor {
    /// Route path
    pub path: String,
    /// HTTP method
    pub method: String,
    /// What the endpoint returns
    pub description: String,
}

impl EndpointDescriptor {
    fn new(path: &str, method: &str, description: &str) -> Self {
        Self {
            path: path.to_string(),
            method: method.to_string(),
            description: description.to_string(),
        }
    }
}

/// Current UTC time formatted like JS `Date.toISOString()`.
fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Landing page
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "CI/CD landing page", body = String, content_type = "text/html")
    ),
    tag = "pages"
)]
pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(templates::render_home(
        &now_iso(),
        &state.config.environment,
        state.config.port,
    ))
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        timestamp: now_iso(),
        uptime: state.started_at.elapsed().as_secs_f64(),
        environment: state.config.environment.clone(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}

/// Service descriptor
#[utoipa::path(
    get,
    path = "/api/info",
    responses(
        (status = 200, description = "Service and endpoint descriptors", body = ApiInfoResponse)
    ),
    tag = "info"
)]
pub async fn api_info() -> Json<ApiInfoResponse> {
    Json(ApiInfoResponse {
        name: "Jenkins CI/CD Demo App".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        description: "A Rust application deployed via Jenkins pipeline".into(),
        endpoints: vec![
            EndpointDescriptor::new("/", "GET", "Home page"),
            EndpointDescriptor::new("/health", "GET", "Health check"),
            EndpointDescriptor::new("/api/info", "GET", "API information"),
        ],
    })
}
