//! Configuration management using Figment
//!
//! Configuration is loaded from multiple sources with the following precedence (highest to lowest):
//! 1. Environment variables (prefix: DATASTAR_BENCH_, sections separated by `__`)
//! 2. Current working directory: ./config.toml
//! 3. XDG config directory: ~/.config/datastar-bench/config.toml
//! 4. System directory: /etc/datastar-bench/config.toml
//! 5. Default values

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::sse::SseConfig;

const APP_NAME: &str = "datastar-bench";
const ENV_PREFIX: &str = "DATASTAR_BENCH_";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Service configuration
    #[serde(default)]
    pub service: ServiceConfig,

    /// Which routes the dispatcher registers
    #[serde(default)]
    pub routes: RoutesConfig,

    /// Where the served pages come from
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Patch stream configuration
    #[serde(default)]
    pub sse: SseConfig,
}

/// Service-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Service name
    #[serde(default = "default_name")]
    pub name: String,

    /// Interface to listen on
    #[serde(default = "default_interface")]
    pub interface: IpAddr,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log filter directive (trace, debug, info, warn, error, or an EnvFilter expression)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,

    /// Wrap the router in a request tracing layer
    #[serde(default)]
    pub trace_requests: bool,
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable single-line output
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Route registration
///
/// Every route is enabled by default; switching some off reproduces the
/// narrower benchmark variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutesConfig {
    /// `GET /` serves the index page
    #[serde(default = "default_true")]
    pub index: bool,

    /// `GET /log` serves the index page and logs its timing at INFO
    #[serde(default = "default_true")]
    pub logged: bool,

    /// `GET /sse` streams the patch page as a Datastar event
    #[serde(default = "default_true")]
    pub sse: bool,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            index: true,
            logged: true,
            sse: true,
        }
    }
}

/// Asset source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding `index.html` and `sse.html`.
    ///
    /// When unset the pages compiled into the binary are served.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl ServiceConfig {
    /// Address the listener binds to
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.interface, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            interface: default_interface(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            trace_requests: false,
        }
    }
}

fn default_name() -> String {
    APP_NAME.to_string()
}

fn default_interface() -> IpAddr {
    IpAddr::V4(Ipv4Addr::UNSPECIFIED)
}

fn default_port() -> u16 {
    8091
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from all sources
    ///
    /// Environment variables (DATASTAR_BENCH_ prefix) override all file-based configs.
    pub fn load() -> Result<Self> {
        let config_paths = Self::find_config_paths();

        let mut figment = Figment::new()
            // Start with defaults
            .merge(Serialized::defaults(Config::default()));

        // Merge config files in reverse order (lowest priority first)
        for path in config_paths.iter().rev() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        let config = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// This bypasses the search path and loads directly from the given path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()?;

        Ok(config)
    }

    /// Find all possible config file paths
    ///
    /// Returns paths in priority order (highest first).
    fn find_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_NAME);
        if let Some(path) = xdg_dirs.find_config_file("config.toml") {
            paths.push(path);
        }

        paths.push(PathBuf::from("/etc").join(APP_NAME).join("config.toml"));

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sse::ElementPatchMode;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.service.port, 8091);
        assert_eq!(config.service.log_level, "info");
        assert_eq!(config.service.log_format, LogFormat::Text);
        assert!(!config.service.trace_requests);
        assert!(config.routes.index && config.routes.logged && config.routes.sse);
        assert!(config.assets.dir.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServiceConfig::default();
        assert_eq!(config.socket_addr(), SocketAddr::from(([0, 0, 0, 0], 8091)));
    }

    #[test]
    fn test_find_config_paths_order() {
        let paths = Config::find_config_paths();
        assert_eq!(paths.first(), Some(&PathBuf::from("config.toml")));
        assert_eq!(
            paths.last(),
            Some(&PathBuf::from("/etc/datastar-bench/config.toml"))
        );
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r##"
[service]
port = 9100
interface = "127.0.0.1"
log_format = "json"

[routes]
logged = false

[sse]
selector = "#main"
mode = "inner"
"##
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(
            config.service.socket_addr(),
            SocketAddr::from(([127, 0, 0, 1], 9100))
        );
        assert_eq!(config.service.log_format, LogFormat::Json);
        assert_eq!(config.service.log_level, "info");
        assert!(config.routes.index);
        assert!(!config.routes.logged);
        assert!(config.routes.sse);
        assert_eq!(config.sse.selector, "#main");
        assert_eq!(config.sse.mode, ElementPatchMode::Inner);
        assert_eq!(config.sse.retry_ms, 1000);
    }

    #[test]
    fn test_load_from_rejects_bad_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[sse]\nmode = \"sideways\"").unwrap();

        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, crate::error::Error::Config(_)));
    }
}
