//! HTTP response building module
//!
//! Every builder starts from [`cors::response_builder`], so each response the
//! server produces carries the cross-origin headers.

use hyper::header::{ALLOW, CONTENT_LENGTH, CONTENT_TYPE};
use hyper::{Response, StatusCode};

use super::body::{self, ResponseBody};
use super::cors;

/// Build 204 No Content response for a preflight request
pub fn build_preflight_response() -> Response<ResponseBody> {
    cors::response_builder()
        .status(StatusCode::NO_CONTENT)
        .body(body::empty())
        .unwrap_or_else(|e| {
            log_build_error("204", &e);
            Response::new(body::empty())
        })
}

/// Build 404 Not Found response with an empty body
pub fn build_404_response() -> Response<ResponseBody> {
    cors::response_builder()
        .status(StatusCode::NOT_FOUND)
        .body(body::empty())
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(body::empty())
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<ResponseBody> {
    cors::response_builder()
        .status(StatusCode::METHOD_NOT_ALLOWED)
        .header(ALLOW, cors::ALLOW_METHODS)
        .body(body::empty())
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(body::empty())
        })
}

/// Build 200 JSON response
pub fn build_json_response(json: Vec<u8>) -> Response<ResponseBody> {
    let content_length = json.len();

    cors::response_builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "application/json")
        .header(CONTENT_LENGTH, content_length)
        .body(body::full(json))
        .unwrap_or_else(|e| {
            log_build_error("JSON", &e);
            Response::new(body::empty())
        })
}

/// Build 200 download response around a streamed body
///
/// No `Content-Type` is set; clients fall back to octet-stream.
pub fn build_download_response(
    content_length: u64,
    file_body: ResponseBody,
) -> Response<ResponseBody> {
    cors::response_builder()
        .status(StatusCode::OK)
        .header(CONTENT_LENGTH, content_length)
        .body(file_body)
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(body::empty())
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use hyper::header::ACCESS_CONTROL_ALLOW_ORIGIN;

    async fn body_bytes(resp: Response<ResponseBody>) -> Vec<u8> {
        resp.into_body().collect().await.unwrap().to_bytes().to_vec()
    }

    #[tokio::test]
    async fn test_preflight_is_empty_without_content_type() {
        let resp = build_preflight_response();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
        assert!(resp.headers().get(CONTENT_TYPE).is_none());
        assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert!(body_bytes(resp).await.is_empty());
    }

    #[tokio::test]
    async fn test_404_is_empty() {
        let resp = build_404_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert!(resp.headers().get(CONTENT_TYPE).is_none());
        assert!(body_bytes(resp).await.is_empty());
    }

    #[test]
    fn test_405_advertises_allowed_methods() {
        let resp = build_405_response();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(resp.headers()[ALLOW], "GET, OPTIONS");
    }

    #[tokio::test]
    async fn test_json_response() {
        let resp = build_json_response(b"[]".to_vec());
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(resp.headers()[CONTENT_LENGTH], "2");
        assert_eq!(body_bytes(resp).await, b"[]");
    }
}
