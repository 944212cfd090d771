//! Request routing dispatch module
//!
//! Entry point for HTTP request processing, responsible for route matching,
//! method validation, dispatching and access logging.

use crate::config::AppState;
use crate::handler::{download, list};
use crate::http::{self, ResponseBody};
use crate::logger::{self, AccessLogEntry};
use hyper::header::{HeaderName, CONTENT_LENGTH, REFERER, USER_AGENT};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

pub const LIST_ROUTE: &str = "/api/list";
pub const DOWNLOAD_ROUTE: &str = "/api/download";

/// The two routes the server exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Download,
}

impl Route {
    /// Match a request path against the route prefixes.
    ///
    /// A prefix matches the path exactly or followed by `/`.
    pub fn from_path(path: &str) -> Option<Self> {
        if matches_prefix(path, LIST_ROUTE) {
            Some(Self::List)
        } else if matches_prefix(path, DOWNLOAD_ROUTE) {
            Some(Self::Download)
        } else {
            None
        }
    }
}

fn matches_prefix(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub method: &'a Method,
    /// Decoded `path` query parameter, empty when absent
    pub sub_path: String,
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<ResponseBody>, Infallible> {
    let started = Instant::now();
    let (parts, body) = req.into_parts();
    // Only GET and OPTIONS are served; request bodies are never read
    drop(body);

    let ctx = RequestContext {
        method: &parts.method,
        sub_path: http::extract_path_param(parts.uri.query()),
    };

    let response = match Route::from_path(parts.uri.path()) {
        Some(route) => dispatch(route, &ctx, &state).await,
        None => http::build_404_response(),
    };

    if state.access_log_enabled() {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            parts.method.to_string(),
            parts.uri.path().to_string(),
        );
        entry.query = parts.uri.query().map(ToString::to_string);
        entry.http_version = logger::format_version(parts.version);
        entry.status = response.status().as_u16();
        entry.body_bytes = response
            .headers()
            .get(CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        entry.referer = header_string(&parts.headers, &REFERER);
        entry.user_agent = header_string(&parts.headers, &USER_AGENT);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Check HTTP method and return the early response for anything but GET/HEAD
fn check_http_method(method: &Method) -> Option<Response<ResponseBody>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_preflight_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

async fn dispatch(
    route: Route,
    ctx: &RequestContext<'_>,
    state: &AppState,
) -> Response<ResponseBody> {
    if let Some(resp) = check_http_method(ctx.method) {
        return resp;
    }

    match route {
        Route::List => list::handle_list(ctx, state).await,
        Route::Download => download::handle_download(ctx, state).await,
    }
}

fn header_string(headers: &hyper::HeaderMap, name: &HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}
