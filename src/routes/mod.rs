//! HTTP routing.
//!
//! There are no routes: the health handler is installed as the fallback for
//! every method, so every request lands on it.

pub mod health;

use axum::{middleware, routing::any, Router};

use crate::middleware::request_id_layer;

/// Creates the router answering every request with the health body.
pub fn create_router() -> Router {
    Router::new()
        .fallback(any(health::healthy))
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
