//! Application configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `CALCD_*` environment variables. Command line flags are applied last by
//! the binary.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::Path;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Application configuration structure
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Address the HTTP server binds to
    pub host: String,
    pub port: u16,
    /// Explicit tracing filter; overrides the verbosity mapping
    pub log_level: Option<String>,
    /// Allow cross-origin requests
    pub cors: bool,
}

/// On-disk form of the configuration; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
    pub cors: Option<bool>,
}

impl AppConfig {
    /// Create a configuration with defaults and the given verbosity
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            ..Self::default()
        }
    }

    /// Load defaults, the optional config file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = path {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            let file: FileConfig = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file {}", path.display()))?;
            config.merge_file(file);
        }

        config.merge_env_vars()?;
        Ok(config)
    }

    pub fn merge_file(&mut self, file: FileConfig) {
        if let Some(host) = file.host {
            self.host = host;
        }
        if let Some(port) = file.port {
            self.port = port;
        }
        if file.log_level.is_some() {
            self.log_level = file.log_level;
        }
        if let Some(cors) = file.cors {
            self.cors = cors;
        }
    }

    /// Apply `CALCD_*` variables from the process environment
    pub fn merge_env_vars(&mut self) -> Result<()> {
        self.merge_env_from(|key| std::env::var(key).ok())
    }

    /// Apply `CALCD_*` variables from an arbitrary lookup
    pub fn merge_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("CALCD_HOST") {
            self.host = host;
        }

        if let Some(port) = lookup("CALCD_PORT") {
            self.port = port
                .parse()
                .map_err(|e| anyhow!("Invalid CALCD_PORT '{}': {}", port, e))?;
        }

        if let Some(log_level) = lookup("CALCD_LOG_LEVEL") {
            self.log_level = Some(log_level);
        }

        if let Some(cors) = lookup("CALCD_CORS") {
            self.cors = cors
                .parse()
                .map_err(|e| anyhow!("Invalid CALCD_CORS '{}': {}", cors, e))?;
        }

        Ok(())
    }

    pub fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Get the log filter, falling back to one derived from verbosity
    pub fn log_level(&self) -> &str {
        if let Some(level) = self.log_level.as_deref() {
            return level;
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            2 => "trace",
            _ => "trace,hyper=debug,tower=debug",
        }
    }

    /// Resolve the listen address
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| anyhow!("Invalid host '{}': {}", self.host, e))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            verbose: 0,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            log_level: None,
            cors: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert!(config.cors);
        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:5000");
    }

    #[test]
    fn test_log_level_from_verbosity() {
        assert_eq!(AppConfig::new(0).log_level(), "info");
        assert_eq!(AppConfig::new(1).log_level(), "debug");
        assert_eq!(AppConfig::new(2).log_level(), "trace");
        assert_eq!(AppConfig::new(5).log_level(), "trace,hyper=debug,tower=debug");
    }

    #[test]
    fn test_explicit_log_level_wins() {
        let config = AppConfig {
            log_level: Some("warn".to_string()),
            ..AppConfig::new(2)
        };
        assert_eq!(config.log_level(), "warn");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "host = \"0.0.0.0\"\nport = 8080\ncors = false").unwrap();

        let mut config = AppConfig::default();
        let content = std::fs::read_to_string(file.path()).unwrap();
        config.merge_file(toml::from_str(&content).unwrap());

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert!(!config.cors);
        assert_eq!(config.log_level, None);
    }

    #[test]
    fn test_load_reports_bad_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number\"").unwrap();

        let err = AppConfig::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/calcd.toml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_env_overrides() {
        let vars = env(&[
            ("CALCD_HOST", "::1"),
            ("CALCD_PORT", "9000"),
            ("CALCD_LOG_LEVEL", "calcd=trace"),
            ("CALCD_CORS", "false"),
        ]);
        let mut config = AppConfig::default();
        config.merge_env_from(|k| vars.get(k).cloned()).unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.log_level(), "calcd=trace");
        assert!(!config.cors);
        assert_eq!(config.socket_addr().unwrap().to_string(), "[::1]:9000");
    }

    #[test]
    fn test_env_rejects_bad_port() {
        let vars = env(&[("CALCD_PORT", "http")]);
        let mut config = AppConfig::default();
        let err = config.merge_env_from(|k| vars.get(k).cloned()).unwrap_err();
        assert!(err.to_string().contains("Invalid CALCD_PORT"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = AppConfig::default()
            .with_host("0.0.0.0")
            .with_port(0)
            .with_verbose(1);
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:0");
        assert_eq!(config.log_level(), "debug");
    }

    #[test]
    fn test_invalid_host() {
        let config = AppConfig::default().with_host("not a host");
        assert!(config.socket_addr().is_err());
    }
}
