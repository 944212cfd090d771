//! Directory listing handler (`/api/list`)

use hyper::Response;

use super::router::RequestContext;
use crate::config::AppState;
use crate::files::{self, FileError};
use crate::http::{self, ResponseBody};
use crate::logger;

/// List the directory named by the `path` parameter as a JSON array
pub async fn handle_list(ctx: &RequestContext<'_>, state: &AppState) -> Response<ResponseBody> {
    let _permit = state.pool.acquire().await;

    let dir = state.root.resolve(&ctx.sub_path);
    let entries = match files::list_directory(&dir).await {
        Ok(entries) => entries,
        Err(FileError::NotFound(_) | FileError::NotADirectory(_)) => {
            return http::build_404_response();
        }
        Err(e) => {
            logger::log_error(&format!("Listing failed: {e}"));
            return http::build_404_response();
        }
    };

    match serde_json::to_vec(&entries) {
        Ok(json) => http::build_json_response(json),
        Err(e) => {
            logger::log_error(&format!("Failed to serialize listing: {e}"));
            http::build_json_response(b"[]".to_vec())
        }
    }
}
