//! Request handler module
//!
//! Dispatches requests by path prefix to the listing and download handlers.

pub mod download;
pub mod list;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
