//! MIME type inference
//!
//! Maps a file extension to the Content-Type sent with the file's bytes.

use std::path::Path;

/// Content-Type for a filesystem path, inferred from its extension.
pub fn content_type_for(path: &Path) -> &'static str {
    from_extension(path.extension().and_then(|e| e.to_str()))
}

/// Content-Type for an extension, `application/octet-stream` when unknown.
pub fn from_extension(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",
        Some("xml") => "application/xml",

        // JavaScript/WASM
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Media
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Documents
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",

        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(from_extension(Some("html")), "text/html; charset=utf-8");
        assert_eq!(from_extension(Some("css")), "text/css");
        assert_eq!(from_extension(Some("js")), "application/javascript");
        assert_eq!(from_extension(Some("png")), "image/png");
        assert_eq!(from_extension(Some("woff2")), "font/woff2");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(from_extension(Some("xyz")), "application/octet-stream");
        assert_eq!(from_extension(None), "application/octet-stream");
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            content_type_for(Path::new("assets/index.html")),
            "text/html; charset=utf-8"
        );
        assert_eq!(
            content_type_for(Path::new("noextension")),
            "application/octet-stream"
        );
    }
}
