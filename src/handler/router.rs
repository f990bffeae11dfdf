//! Request dispatch
//!
//! Entry point for HTTP request processing: GET logging, method checks,
//! static file dispatch, and cache-header injection.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::AppContext;
use crate::handler::static_files;
use crate::http;
use crate::logger;

/// Main entry point for HTTP request handling.
///
/// Generic over the request body type; bodies are never read, which also
/// lets tests drive this with empty bodies.
pub async fn handle_request<B>(
    req: Request<B>,
    ctx: Arc<AppContext>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    let path = req.uri().path();
    // Path plus query exactly as received, for the access log
    let target = req.uri().path_and_query().map_or(path, |pq| pq.as_str());

    // Only GET requests are logged; the cache header below applies to all
    if *method == Method::GET && ctx.config.logging.access_log {
        logger::log_get_request(target);
    }

    let response = match method {
        &Method::GET => static_files::serve(&ctx, path, false).await,
        &Method::HEAD => static_files::serve(&ctx, path, true).await,
        other => {
            logger::log_warning(&format!("Method not allowed: {other}"));
            http::build_405_response()
        }
    };

    // Every response passes through here before it is written
    Ok(http::disable_caching(response))
}
