//! HTTP protocol layer
//!
//! MIME detection and response building, independent of how request paths
//! are resolved against the filesystem.

pub mod mime;
pub mod response;

// Re-export commonly used items
pub use response::{
    build_403_response, build_404_response, build_405_response, build_file_response,
    build_html_response, build_redirect_response, disable_caching, CACHE_CONTROL_VALUE,
};
