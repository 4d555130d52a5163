//! Transport configuration types.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[cfg(feature = "stdio")]
    Stdio,

    /// HTTP transport with JSON-RPC over POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
fn default_host() -> String {
    "127.0.0.1".to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            Self::Stdio
        }

        #[cfg(all(not(feature = "stdio"), feature = "http"))]
        {
            Self::Http(HttpConfig::default())
        }

        #[cfg(not(any(feature = "stdio", feature = "http")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio or http");
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    /// Read `MCP_HTTP_*` variables, falling back to defaults.
    fn from_env() -> Self {
        let defaults = Self::default();
        let port = match std::env::var("MCP_HTTP_PORT") {
            Ok(p) => parse_port(&p, defaults.port).unwrap_or_else(|msg| {
                warn!("{}", msg);
                defaults.port
            }),
            Err(_) => defaults.port,
        };
        let host = std::env::var("MCP_HTTP_HOST").unwrap_or(defaults.host);
        let mut rpc_path = std::env::var("MCP_HTTP_PATH").unwrap_or(defaults.rpc_path);
        if !rpc_path.starts_with('/') {
            rpc_path.insert(0, '/');
        }
        let enable_cors = std::env::var("MCP_HTTP_CORS")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off"))
            .unwrap_or(defaults.enable_cors);

        Self {
            port,
            host,
            rpc_path,
            enable_cors,
        }
    }
}

/// Parse `MCP_HTTP_PORT`. The error is the warning to log before using `default`.
#[cfg(feature = "http")]
fn parse_port(value: &str, default: u16) -> Result<u16, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("Invalid MCP_HTTP_PORT '{}', using {}", value, default))
}

impl TransportConfig {
    /// Create a STDIO transport config.
    #[cfg(feature = "stdio")]
    pub fn stdio() -> Self {
        Self::Stdio
    }

    /// Create an HTTP transport config.
    #[cfg(feature = "http")]
    pub fn http(port: u16, host: impl Into<String>) -> Self {
        Self::Http(HttpConfig {
            port,
            host: host.into(),
            ..Default::default()
        })
    }

    /// Load transport config from `MCP_TRANSPORT` and related variables.
    ///
    /// Unknown or uncompiled transports fall back to the default one.
    pub fn from_env() -> Self {
        let transport = std::env::var("MCP_TRANSPORT").unwrap_or_default();
        Self::from_name(&transport).unwrap_or_else(|msg| {
            warn!("{}", msg);
            Self::default()
        })
    }

    /// Select a transport by name; empty means the default.
    ///
    /// The error is the warning to log before falling back to the default.
    pub fn from_name(name: &str) -> Result<Self, String> {
        match name.trim().to_lowercase().as_str() {
            #[cfg(feature = "http")]
            "http" => Ok(Self::Http(HttpConfig::from_env())),
            #[cfg(feature = "stdio")]
            "stdio" => Ok(Self::Stdio),
            "" => Ok(Self::default()),
            other => Err(format!(
                "Transport '{}' is not available in this build, using {}",
                other,
                Self::default().description()
            )),
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }

    /// Check if this transport is the standard STDIO mode.
    pub fn is_stdio(&self) -> bool {
        #[cfg(feature = "stdio")]
        {
            matches!(self, Self::Stdio)
        }
        #[cfg(not(feature = "stdio"))]
        {
            false
        }
    }
}

#[cfg(all(test, feature = "stdio"))]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_stdio() {
        let config = TransportConfig::default();
        assert!(config.is_stdio());
        assert_eq!(config.description(), "STDIO (standard MCP mode)");
    }

    #[test]
    fn test_from_name() {
        assert!(TransportConfig::from_name(" STDIO ").unwrap().is_stdio());
        assert!(TransportConfig::from_name("").unwrap().is_stdio());
    }

    #[test]
    fn test_unknown_transport_is_reported() {
        let warning = TransportConfig::from_name("htp").unwrap_err();
        assert!(warning.contains("'htp'"));
        assert!(warning.contains("STDIO"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_invalid_port_is_reported() {
        assert_eq!(parse_port("9000", 8080), Ok(9000));
        let warning = parse_port("80a", 8080).unwrap_err();
        assert!(warning.contains("MCP_HTTP_PORT '80a'"));
        assert!(warning.contains("8080"));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_description() {
        let config = TransportConfig::http(9000, "0.0.0.0");
        assert!(!config.is_stdio());
        assert_eq!(config.description(), "HTTP on 0.0.0.0:9000/mcp");
    }
}
