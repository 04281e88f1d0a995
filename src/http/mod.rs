//! HTTP listener.
//!
//! Plain HTTP/1.1 on a single listening socket held for the process lifetime.
//! No TLS and no graceful shutdown: the process stops when it is killed.

mod server;

pub use server::{bind, serve, start_server, ServerError};
