//! Request handler module
//!
//! Routing dispatch plus the handlers behind each route: the JSON API,
//! the rendered index page, and static file serving.

pub mod api;
pub mod router;
pub mod static_files;

// Re-export main entry point
pub use router::handle_request;
