//! Health responder for container orchestration.
//!
//! Liveness only: answering at all means the process is up.

use crate::config::HEALTHY_BODY;

/// Health check handler.
///
/// Takes no extractors, so method, path, headers and body never influence
/// the reply.
pub async fn healthy() -> &'static str {
    HEALTHY_BODY
}
