//! HTTP response builders
//!
//! One builder per status code the server can produce. Every builder
//! finalizes through `headers::apply` so the fixed header set lands on
//! every response, whatever its status.

use crate::headers;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build 200 response carrying a file's bytes.
///
/// `is_head` keeps status and headers (including Content-Length) but drops
/// the body.
pub fn build_file_response(
    data: Vec<u8>,
    content_type: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(data)
    };

    headers::apply(
        Response::builder()
            .status(200)
            .header("Content-Type", content_type)
            .header("Content-Length", content_length),
    )
    .body(Full::new(body))
    .unwrap_or_else(|e| {
        log_build_error("200", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 200 HTML response (directory listings).
pub fn build_html_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    headers::apply(
        Response::builder()
            .status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .header("Content-Length", content_length),
    )
    .body(Full::new(body))
    .unwrap_or_else(|e| {
        log_build_error("HTML", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 301 redirect (directory requested without trailing slash).
pub fn build_redirect_response(target: &str) -> Response<Full<Bytes>> {
    headers::apply(
        Response::builder()
            .status(301)
            .header("Location", target)
            .header("Content-Type", "text/plain"),
    )
    .body(Full::new(Bytes::from("Moved Permanently")))
    .unwrap_or_else(|e| {
        log_build_error("301", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    headers::apply(
        Response::builder()
            .status(404)
            .header("Content-Type", "text/plain"),
    )
    .body(Full::new(Bytes::from("404 Not Found")))
    .unwrap_or_else(|e| {
        log_build_error("404", &e);
        Response::new(Full::new(Bytes::from("404 Not Found")))
    })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    headers::apply(
        Response::builder()
            .status(405)
            .header("Content-Type", "text/plain")
            .header("Allow", "GET, HEAD, OPTIONS"),
    )
    .body(Full::new(Bytes::from("405 Method Not Allowed")))
    .unwrap_or_else(|e| {
        log_build_error("405", &e);
        Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
    })
}

/// Build 204 response for OPTIONS preflight.
///
/// The CORS answer itself travels in the fixed header set.
pub fn build_options_response() -> Response<Full<Bytes>> {
    headers::apply(
        Response::builder()
            .status(204)
            .header("Allow", "GET, HEAD, OPTIONS"),
    )
    .body(Full::new(Bytes::new()))
    .unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::RESPONSE_HEADERS;

    fn assert_fixed_headers(response: &Response<Full<Bytes>>) {
        for (name, value) in &RESPONSE_HEADERS {
            assert_eq!(
                response.headers().get(*name).map(|v| v.to_str().unwrap()),
                Some(*value),
                "missing {name}"
            );
        }
        assert!(response.headers().get("X-Frame-Options").is_none());
    }

    #[test]
    fn test_file_response() {
        let response = build_file_response(b"hello".to_vec(), "text/plain; charset=utf-8", false);
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers().get("Content-Type").unwrap(),
            "text/plain; charset=utf-8"
        );
        assert_eq!(response.headers().get("Content-Length").unwrap(), "5");
        assert_fixed_headers(&response);
    }

    #[test]
    fn test_head_keeps_content_length() {
        let response = build_file_response(b"hello".to_vec(), "text/plain", true);
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers().get("Content-Length").unwrap(), "5");
        assert_fixed_headers(&response);
    }

    #[test]
    fn test_404_response() {
        let response = build_404_response();
        assert_eq!(response.status(), 404);
        assert_fixed_headers(&response);
    }

    #[test]
    fn test_405_response() {
        let response = build_405_response();
        assert_eq!(response.status(), 405);
        assert_eq!(response.headers().get("Allow").unwrap(), "GET, HEAD, OPTIONS");
        assert_fixed_headers(&response);
    }

    #[test]
    fn test_redirect_response() {
        let response = build_redirect_response("/docs/");
        assert_eq!(response.status(), 301);
        assert_eq!(response.headers().get("Location").unwrap(), "/docs/");
        assert_fixed_headers(&response);
    }

    #[test]
    fn test_options_response() {
        let response = build_options_response();
        assert_eq!(response.status(), 204);
        assert_fixed_headers(&response);
    }
}
