//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! matching, and dispatch to the handler set.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use crate::config::Config;
use crate::handler::{api, static_files};
use crate::http;
use crate::logger;

/// Request context encapsulating what the handlers need from a request
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    config: Arc<Config>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method();
    logger::log_request(method, req.uri());

    if let Some(resp) = check_http_method(method) {
        return Ok(resp);
    }

    let ctx = RequestContext {
        path: req.uri().path(),
        is_head: *method == Method::HEAD,
        if_none_match: req
            .headers()
            .get("if-none-match")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
    };

    Ok(route_request(&ctx, &config).await)
}

/// Reject methods other than GET/HEAD
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Route a request by path: exact API routes first, then the static
/// prefix, then the index catch-all.
async fn route_request(ctx: &RequestContext<'_>, config: &Config) -> Response<Full<Bytes>> {
    if ctx.path == "/api/hello" {
        return api::hello(ctx);
    }

    if ctx.path == "/health" {
        return api::health(ctx);
    }

    if ctx.path.starts_with(static_files::ROUTE_PREFIX) {
        return static_files::serve(ctx).await;
    }

    // Everything else falls through to the index page, matching the
    // catch-all behavior of a root route.
    api::index(ctx, config)
}
