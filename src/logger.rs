//! Logging helpers
//!
//! Lifecycle messages on stdout, warnings and errors on stderr, access
//! lines in Common Log Format. No files, no levels to configure.

use chrono::Local;
use std::net::SocketAddr;
use std::path::Path;

pub fn log_server_start(addr: &SocketAddr, url: &str, root: &Path) {
    println!("======================================");
    println!("Serving at {url}");
    println!("Bound to: {addr}");
    println!("Root directory: {}", root.display());
    println!("======================================");
}

pub fn log_shutdown() {
    println!("Server shutting down");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

/// One served request, printed as a Common Log Format line.
#[derive(Debug, Clone)]
pub struct AccessLogEntry {
    pub remote_addr: String,
    pub method: String,
    pub path: String,
    pub status: u16,
    pub body_bytes: usize,
}

impl AccessLogEntry {
    /// `$remote_addr - - [$time_local] "$method $path HTTP/1.1" $status $body_bytes`
    pub fn format_line(&self) -> String {
        format!(
            "{} - - [{}] \"{} {} HTTP/1.1\" {} {}",
            self.remote_addr,
            Local::now().format("%d/%b/%Y:%H:%M:%S %z"),
            self.method,
            self.path,
            self.status,
            self.body_bytes,
        )
    }
}

pub fn log_access(entry: &AccessLogEntry) {
    println!("{}", entry.format_line());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_line_common_format() {
        let entry = AccessLogEntry {
            remote_addr: "192.168.1.1".to_string(),
            method: "GET".to_string(),
            path: "/index.html".to_string(),
            status: 200,
            body_bytes: 1234,
        };
        let line = entry.format_line();
        assert!(line.starts_with("192.168.1.1 - - ["));
        assert!(line.contains("\"GET /index.html HTTP/1.1\""));
        assert!(line.ends_with("200 1234"));
    }
}
