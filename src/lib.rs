//! CoBank backend health responder.
//!
//! Answers every HTTP request, whatever its method or path, with `200 OK` and
//! the body `CoBank Backend Service - Healthy`.

pub mod config;
pub mod http;
pub mod middleware;
pub mod routes;

pub use config::{AppConfig, ConfigError, HEALTHY_BODY};
pub use http::ServerError;
pub use routes::create_router;
