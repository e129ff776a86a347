//! Filesystem resolution and file loading
//!
//! Maps a request path onto the root directory and loads file bytes.
//! Resolution canonicalizes and prefix-checks against the root, so no
//! request can read outside it.

use crate::logger;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Outcome of mapping a request path onto the root directory.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolved {
    /// A regular file, canonical path.
    File(PathBuf),
    /// A directory, requested with a trailing slash; canonical path.
    Directory(PathBuf),
    /// A directory requested without a trailing slash; redirect target.
    RedirectToSlash(String),
    /// Nothing under the root matches.
    NotFound,
}

/// Resolve a request path against the root directory.
///
/// The root must already be canonical. `..` segments are rejected outright,
/// and the resolved path is canonicalized and checked to still sit under
/// the root before anything is read.
pub fn resolve(root: &Path, request_path: &str) -> Resolved {
    if request_path.split('/').any(|segment| segment == "..") {
        logger::log_warning(&format!("Path traversal attempt blocked: {request_path}"));
        return Resolved::NotFound;
    }

    let relative = request_path.trim_start_matches('/');
    let candidate = root.join(relative);

    let Ok(canonical) = candidate.canonicalize() else {
        return Resolved::NotFound;
    };
    if !canonical.starts_with(root) {
        logger::log_warning(&format!(
            "Path escaped root, blocked: {request_path} -> {}",
            canonical.display()
        ));
        return Resolved::NotFound;
    }

    if canonical.is_dir() {
        if request_path.ends_with('/') {
            Resolved::Directory(canonical)
        } else {
            Resolved::RedirectToSlash(format!("{request_path}/"))
        }
    } else if canonical.is_file() {
        Resolved::File(canonical)
    } else {
        Resolved::NotFound
    }
}

/// Read a file's bytes; None maps to a 404 at the call site.
pub async fn load_file(path: &Path) -> Option<Vec<u8>> {
    match fs::read(path).await {
        Ok(content) => Some(content),
        Err(e) => {
            logger::log_error(&format!("Failed to read file '{}': {e}", path.display()));
            None
        }
    }
}

/// Index file served for a directory when present.
pub fn index_file(dir: &Path) -> Option<PathBuf> {
    let index = dir.join("index.html");
    index.is_file().then_some(index)
}
