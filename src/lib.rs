//! servedir — a small static file server.
//!
//! Serves files from a single configured root directory over HTTP/1.x,
//! logs GET requests, and disables client-side caching on every response.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
