//! HTTP protocol layer module
//!
//! Response bodies, CORS headers, query decoding and the response builders
//! shared by both routes. Decoupled from the filesystem.

pub mod body;
pub mod cors;
pub mod query;
pub mod response;

// Re-export commonly used types
pub use body::ResponseBody;
pub use query::extract_path_param;
pub use response::{
    build_404_response, build_405_response, build_download_response, build_json_response,
    build_preflight_response,
};
