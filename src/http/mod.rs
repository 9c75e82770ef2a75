//! HTTP protocol layer module
//!
//! Protocol-level helpers decoupled from specific business logic:
//! response builders, MIME detection, and cache validation.

pub mod cache;
pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_304_response, build_404_response, build_405_response, build_500_response,
    build_html_response, build_json_response,
};
