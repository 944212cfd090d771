//! File download handler (`/api/download`)

use futures::{StreamExt, TryStreamExt};
use hyper::body::Frame;
use hyper::Response;

use super::router::RequestContext;
use crate::config::AppState;
use crate::files::{self, FileError};
use crate::http::{self, body, ResponseBody};
use crate::logger;

/// Stream the file named by the `path` parameter
pub async fn handle_download(ctx: &RequestContext<'_>, state: &AppState) -> Response<ResponseBody> {
    let permit = state.pool.acquire().await;

    let path = state.root.resolve(&ctx.sub_path);
    let download = match files::open_download(&path).await {
        Ok(d) => d,
        Err(FileError::NotFound(_) | FileError::NotAFile(_)) => return http::build_404_response(),
        Err(e) => {
            logger::log_error(&format!("Download failed: {e}"));
            return http::build_404_response();
        }
    };

    let content_length = download.size();
    let stream = download
        .into_stream(state.download_buffer_size())
        .map_ok(Frame::data)
        .map(move |frame| {
            // The pool slot is released together with the file handle
            let _slot = &permit;
            frame
        });

    http::build_download_response(content_length, body::streaming(stream))
}
