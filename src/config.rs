//! Process configuration
//!
//! Everything is fixed at startup: listening address 0.0.0.0:8000 and a
//! root directory defaulting to the directory containing the executable.
//! There are no CLI flags; `HARDSERVE_*` environment variables are the only
//! override (e.g. `HARDSERVE_SERVER__ROOT=/srv/site`).

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub root: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::Environment::with_prefix("HARDSERVE").separator("__"))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("server.root", default_root()?)?
            .build()?;

        settings.try_deserialize()
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address '{}:{}': {e}", self.server.host, self.server.port))
    }

    /// Canonical root directory; fails if the directory does not exist.
    pub fn root_dir(&self) -> std::io::Result<PathBuf> {
        PathBuf::from(&self.server.root).canonicalize()
    }

    /// URL printed at startup. The wildcard address is reachable as localhost.
    pub fn display_url(&self) -> String {
        let host = if self.server.host == "0.0.0.0" || self.server.host == "::" {
            "localhost"
        } else {
            &self.server.host
        };
        format!("http://{host}:{}", self.server.port)
    }
}

/// Shared, immutable per-request state. Built once at startup.
pub struct AppState {
    /// Canonical root directory; all resolution happens under it.
    pub root: PathBuf,
}

impl AppState {
    pub fn new(config: &Config) -> std::io::Result<Self> {
        Ok(Self {
            root: config.root_dir()?,
        })
    }
}

/// Directory containing the server's own executable.
fn default_root() -> Result<String, config::ConfigError> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.to_string_lossy().into_owned()))
        .ok_or_else(|| {
            config::ConfigError::Message("cannot determine executable directory".to_string())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(host: &str, port: u16) -> Config {
        Config {
            server: ServerConfig {
                host: host.to_string(),
                port,
                root: ".".to_string(),
            },
        }
    }

    #[test]
    fn test_socket_addr() {
        let addr = test_config("0.0.0.0", 8000).socket_addr().unwrap();
        assert_eq!(addr.port(), 8000);
        assert!(addr.ip().is_unspecified());
    }

    #[test]
    fn test_invalid_host_rejected() {
        assert!(test_config("not a host", 8000).socket_addr().is_err());
    }

    #[test]
    fn test_display_url_maps_wildcard_to_localhost() {
        assert_eq!(test_config("0.0.0.0", 8000).display_url(), "http://localhost:8000");
        assert_eq!(test_config("127.0.0.1", 9000).display_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_defaults() {
        let cfg = Config::load().unwrap();
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert!(!cfg.server.root.is_empty());
    }
}
