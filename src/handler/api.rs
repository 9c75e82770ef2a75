//! API and index page handlers.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};
use serde::Serialize;

use crate::config::Config;
use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;
use crate::template;

#[derive(Serialize)]
struct HelloResponse {
    message: &'static str,
    status: &'static str,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

/// `GET /api/hello`
pub fn hello(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let body = HelloResponse {
        message: "Hello, World!",
        status: "success",
    };
    http::build_json_response(StatusCode::OK, &body, ctx.is_head)
}

/// `GET /health`
pub fn health(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    let body = HealthResponse {
        status: "ok",
        // Fixed API contract, independent of the crate version
        version: "1.0.0",
    };
    http::build_json_response(StatusCode::OK, &body, ctx.is_head)
}

/// `GET /` and every unrouted path: the rendered index page.
///
/// A render failure is recovered locally into a 500 carrying the error text.
pub fn index(ctx: &RequestContext<'_>, config: &Config) -> Response<Full<Bytes>> {
    index_response(ctx, template::index_page(config))
}

/// Turn a render outcome into the index response.
fn index_response(
    ctx: &RequestContext<'_>,
    rendered: Result<String, template::RenderError>,
) -> Response<Full<Bytes>> {
    match rendered {
        Ok(html) => http::build_html_response(html, ctx.is_head),
        Err(e) => {
            logger::log_error(&format!("Failed to render index page: {e}"));
            http::build_500_response(&e.to_string(), ctx.is_head)
        }
    }
}
