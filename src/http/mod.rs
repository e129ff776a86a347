//! HTTP protocol layer
//!
//! MIME inference and response builders, independent of the filesystem
//! resolution logic in the handler.

pub mod mime;
pub mod response;

pub use response::{
    build_404_response, build_405_response, build_file_response, build_html_response,
    build_options_response, build_redirect_response,
};
