//! Static file serving module
//!
//! Serves files under the `/static/` route from a local directory, with
//! MIME detection, an `ETag`/304 fast path, and a path traversal guard.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

use crate::handler::router::RequestContext;
use crate::http::{self, cache, mime};
use crate::logger;

pub const ROUTE_PREFIX: &str = "/static/";

const STATIC_DIR: &str = "web/static";

/// Serve a `/static/` request from the default static directory.
pub async fn serve(ctx: &RequestContext<'_>) -> Response<Full<Bytes>> {
    serve_directory(ctx, STATIC_DIR).await
}

/// Serve a `/static/` request from the given directory.
pub async fn serve_directory(ctx: &RequestContext<'_>, dir: &str) -> Response<Full<Bytes>> {
    match load_from_directory(dir, ctx.path).await {
        Some((content, content_type)) => build_static_file_response(
            &content,
            content_type,
            ctx.if_none_match.as_deref(),
            ctx.is_head,
        ),
        None => http::build_404_response(),
    }
}

/// Load a file from the static directory, with the route prefix stripped.
async fn load_from_directory(static_dir: &str, request_path: &str) -> Option<(Vec<u8>, &'static str)> {
    // Strip the route prefix and neutralize parent-directory components
    let relative = request_path
        .strip_prefix(ROUTE_PREFIX)
        .unwrap_or(request_path)
        .trim_start_matches('/')
        .replace("..", "");

    if relative.is_empty() {
        return None;
    }

    let file_path = Path::new(static_dir).join(&relative);

    let static_dir_canonical = match Path::new(static_dir).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Static directory not found or inaccessible '{static_dir}': {e}"
            ));
            return None;
        }
    };

    // File not found is a routine 404, not worth a warning
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&static_dir_canonical) {
        logger::log_warning(&format!("Path traversal attempt blocked: {request_path}"));
        return None;
    }

    let content = match fs::read(&file_path_canonical).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path_canonical.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(
        file_path_canonical.extension().and_then(|e| e.to_str()),
    );

    Some((content, content_type))
}

/// Build a static file response with `ETag` revalidation
fn build_static_file_response(
    data: &[u8],
    content_type: &str,
    if_none_match: Option<&str>,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    if cache::check_etag_match(if_none_match, &etag) {
        return http::build_304_response(&etag);
    }

    http::response::build_file_response(
        Bytes::from(data.to_owned()),
        content_type,
        &etag,
        is_head,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn ctx(path: &str) -> RequestContext<'_> {
        RequestContext {
            path,
            is_head: false,
            if_none_match: None,
        }
    }

    fn write_file(dir: &Path, name: &str, content: &[u8]) {
        let mut f = std::fs::File::create(dir.join(name)).unwrap();
        f.write_all(content).unwrap();
    }

    #[tokio::test]
    async fn serves_existing_file_with_mime_type() {
        use http_body_util::BodyExt;

        let tmp = tempfile::tempdir().unwrap();
        write_file(tmp.path(), "style.css", b"body { color: red; }");

        let dir = tmp.path().to_str().unwrap();
        let resp = serve_directory(&ctx("/static/style.css"), dir).await;

        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Type"], "text/css");
        assert!(resp.headers().contains_key("ETag"));

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"body { color: red; }");
    }

    #[tokio::test]
    async fn missing_file_is_404() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().to_str().unwrap();

        let resp = serve_directory(&ctx("/static/nope.txt"), dir).await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn parent_components_do_not_escape_the_directory() {
        let parent = tempfile::tempdir().unwrap();
        let static_dir = parent.path().join("public");
        std::fs::create_dir(&static_dir).unwrap();
        write_file(parent.path(), "secret.txt", b"top secret");

        let dir = static_dir.to_str().unwrap();
        let resp = serve_directory(&ctx("/static/../secret.txt"), dir).await;
        assert_eq!(resp.status(), 404);
    }

    #[tokio::test]
    async fn etag_revalidation_returns_304() {
        let tmp = tempfile::tempdir().unwrap();
        write_file(tmp.path(), "app.js", b"console.log('hi');");
        let dir = tmp.path().to_str().unwrap();

        let first = serve_directory(&ctx("/static/app.js"), dir).await;
        let etag = first.headers()["ETag"].to_str().unwrap().to_string();

        let revalidate = RequestContext {
            path: "/static/app.js",
            is_head: false,
            if_none_match: Some(etag.clone()),
        };
        let second = serve_directory(&revalidate, dir).await;
        assert_eq!(second.status(), 304);
        assert_eq!(second.headers()["ETag"].to_str().unwrap(), etag);
    }

    #[tokio::test]
    async fn head_request_omits_body() {
        use http_body_util::BodyExt;

        let tmp = tempfile::tempdir().unwrap();
        write_file(tmp.path(), "note.txt", b"hello");
        let dir = tmp.path().to_str().unwrap();

        let head = RequestContext {
            path: "/static/note.txt",
            is_head: true,
            if_none_match: None,
        };
        let resp = serve_directory(&head, dir).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(resp.headers()["Content-Length"], "5");

        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert!(body.is_empty());
    }
}
