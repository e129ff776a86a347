//! Request handling
//!
//! Method gate first, then static file dispatch. Every path through here
//! ends in one of the `http::response` builders, so the fixed header set
//! is on the response whatever happens.

pub mod listing;
pub mod static_files;

use crate::config::AppState;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

/// Check HTTP method and return an early response if not GET/HEAD.
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let is_head = method == Method::HEAD;

    let response = match check_http_method(&method) {
        Some(resp) => resp,
        None => serve_path(&state, &path, is_head).await,
    };

    logger::log_access(&logger::AccessLogEntry {
        remote_addr: peer_addr.ip().to_string(),
        method: method.to_string(),
        path,
        status: response.status().as_u16(),
        body_bytes: content_length(&response),
    });

    Ok(response)
}

/// Serve a GET/HEAD request for `path` from the root directory.
async fn serve_path(state: &Arc<AppState>, path: &str, is_head: bool) -> Response<Full<Bytes>> {
    match static_files::resolve(&state.root, path) {
        static_files::Resolved::File(file_path) => serve_file(&file_path, is_head).await,
        static_files::Resolved::Directory(dir) => {
            // index.html wins over the auto-generated listing
            if let Some(index) = static_files::index_file(&dir) {
                serve_file(&index, is_head).await
            } else {
                match listing::render(&dir, path).await {
                    Ok(html) => http::build_html_response(html, is_head),
                    Err(e) => {
                        logger::log_error(&format!(
                            "Failed to list directory '{}': {e}",
                            dir.display()
                        ));
                        http::build_404_response()
                    }
                }
            }
        }
        static_files::Resolved::RedirectToSlash(target) => http::build_redirect_response(&target),
        static_files::Resolved::NotFound => http::build_404_response(),
    }
}

async fn serve_file(file_path: &std::path::Path, is_head: bool) -> Response<Full<Bytes>> {
    match static_files::load_file(file_path).await {
        Some(content) => {
            let content_type = crate::http::mime::content_type_for(file_path);
            http::build_file_response(content, content_type, is_head)
        }
        None => http::build_404_response(),
    }
}

fn content_length(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("Content-Length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}
