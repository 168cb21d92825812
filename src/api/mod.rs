//! HTTP API layer

mod routes;
mod handlers;
mod templates;

pub use routes::{create_router, AppState};
