//! pipeline-demo - Demo web service deployed via a Jenkins CI/CD pipeline

pub mod config;
pub mod error;

pub mod api;

pub use config::Config;
pub use error::{Error, Result};
