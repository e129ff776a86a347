//! Auto-generated directory listing
//!
//! Rendered for directories without an index.html. Entries are sorted by
//! name, subdirectories carry a trailing slash.

use std::path::Path;
use tokio::fs;

/// Render an HTML listing for `dir`, titled with the request path.
pub async fn render(dir: &Path, display_path: &str) -> std::io::Result<String> {
    let mut entries = Vec::new();
    let mut read_dir = fs::read_dir(dir).await?;
    while let Some(entry) = read_dir.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await?.is_dir() {
            name.push('/');
        }
        entries.push(name);
    }
    entries.sort();

    let title = format!("Directory listing for {}", escape_html(display_path));
    let mut html = String::new();
    html.push_str("<!DOCTYPE HTML>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n</head>\n<body>\n"));
    html.push_str(&format!("<h1>{title}</h1>\n<hr>\n<ul>\n"));
    for name in &entries {
        let escaped = escape_html(name);
        html.push_str(&format!("<li><a href=\"{escaped}\">{escaped}</a></li>\n"));
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    Ok(html)
}

/// Escape characters with meaning in HTML text and attribute values.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

    fn setup() -> PathBuf {
        let seq = DIR_SEQ.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "hardserve-listing-{}-{seq}",
            std::process::id()
        ));
        std_fs::create_dir_all(dir.join("nested")).unwrap();
        std_fs::write(dir.join("b.txt"), b"b").unwrap();
        std_fs::write(dir.join("a.txt"), b"a").unwrap();
        dir
    }

    #[tokio::test]
    async fn test_listing_contains_sorted_entries() {
        let dir = setup();
        let html = render(&dir, "/files/").await.unwrap();
        assert!(html.contains("Directory listing for /files/"));
        assert!(html.contains("<a href=\"a.txt\">a.txt</a>"));
        assert!(html.contains("<a href=\"b.txt\">b.txt</a>"));
        assert!(html.contains("<a href=\"nested/\">nested/</a>"));
        assert!(html.find("a.txt").unwrap() < html.find("b.txt").unwrap());
    }

    #[tokio::test]
    async fn test_listing_missing_directory_errors() {
        let dir = setup().join("does-not-exist");
        assert!(render(&dir, "/x/").await.is_err());
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a<b>&\"c\""), "a&lt;b&gt;&amp;&quot;c&quot;");
    }
}
