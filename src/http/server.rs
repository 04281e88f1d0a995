//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;

use crate::config::{BIND_ADDR, BIND_ADDR_STR};

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Start the HTTP server on `0.0.0.0:5000`.
///
/// Only returns on failure.
pub async fn start_server(app: Router) -> Result<(), ServerError> {
    tracing::debug!(addr = BIND_ADDR_STR, "Binding listener");
    let listener = bind(BIND_ADDR).await?;
    serve(listener, app).await
}

/// Bind the listening socket. No retry: an address in use is fatal.
pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })
}

/// Serve `app` on an already bound listener.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    match listener.local_addr() {
        Ok(addr) => tracing::info!(%addr, "Starting HTTP server"),
        Err(e) => tracing::warn!(error = %e, "Starting HTTP server on unknown address"),
    }

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_second_bind_on_same_address_fails() {
        let first = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let taken = first.local_addr().unwrap();

        let err = bind(taken).await.unwrap_err();
        match err {
            ServerError::Bind { addr, source } => {
                assert_eq!(addr, taken);
                assert_eq!(source.kind(), std::io::ErrorKind::AddrInUse);
            }
            other => panic!("expected bind error, got {other:?}"),
        }
    }

    #[test]
    fn test_bind_error_names_the_address() {
        let err = ServerError::Bind {
            addr: BIND_ADDR,
            source: std::io::Error::from(std::io::ErrorKind::AddrInUse),
        };
        assert!(err.to_string().starts_with("Failed to bind 0.0.0.0:5000"));
    }
}
