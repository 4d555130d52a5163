//! Configuration management for the MCP server.
//!
//! Settings come from the process environment (optionally seeded from a
//! `.env` file). Grid connection settings use the `INFOBLOX_` prefix, server
//! settings the `MCP_` prefix.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default WAPI version when `INFOBLOX_WAPI_VERSION` is unset.
pub const DEFAULT_WAPI_VERSION: &str = "2.12";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Infoblox grid connection settings.
    pub infoblox: InfobloxConfig,

    /// Prompts domain configuration.
    pub prompts: PromptsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Connection settings for the Infoblox grid master.
#[derive(Clone, Serialize, Deserialize)]
pub struct InfobloxConfig {
    /// Grid master host name or address, optionally with `:port`.
    pub host: String,

    /// WAPI user name.
    pub username: String,

    /// WAPI password.
    #[serde(default, skip_serializing)]
    pub password: String,

    /// WAPI version, e.g. "2.12".
    pub wapi_version: String,

    /// Whether TLS certificates are verified.
    pub verify_ssl: bool,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl InfobloxConfig {
    /// The templated WAPI base URL: `https://{host}/wapi/v{version}/`.
    pub fn base_url(&self) -> String {
        format!(
            "https://{}/wapi/v{}/",
            self.host.trim_end_matches('/'),
            self.wapi_version.trim_start_matches('v')
        )
    }

    /// Check that the required connection settings are present.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("INFOBLOX_HOST", &self.host),
            ("INFOBLOX_USERNAME", &self.username),
            ("INFOBLOX_PASSWORD", &self.password),
        ];

        let missing: Vec<&str> = required
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if !missing.is_empty() {
            return Err(Error::config(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        if self.timeout_secs == 0 {
            return Err(Error::config("INFOBLOX_TIMEOUT_SECS must be greater than 0"));
        }

        Ok(())
    }
}

/// Redacts the password from logs.
impl std::fmt::Debug for InfobloxConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InfobloxConfig")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("wapi_version", &self.wapi_version)
            .field("verify_ssl", &self.verify_ssl)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for InfobloxConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            username: String::new(),
            password: String::new(),
            wapi_version: DEFAULT_WAPI_VERSION.to_string(),
            verify_ssl: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Configuration for the prompts domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromptsConfig {
    /// DNS view substituted when a prompt is rendered without one.
    pub default_view: String,
}

impl Default for PromptsConfig {
    fn default() -> Self {
        Self {
            default_view: "default".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl LoggingConfig {
    /// Read `MCP_LOG_LEVEL` (after loading `.env`).
    ///
    /// Called on its own before logging starts, so the rest of the
    /// configuration can report bad values through the subscriber.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            level: std::env::var("MCP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "infoblox-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            infoblox: InfobloxConfig::default(),
            prompts: PromptsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Fails when `INFOBLOX_HOST`, `INFOBLOX_USERNAME` or `INFOBLOX_PASSWORD`
    /// is missing or empty.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        config.logging = LoggingConfig::from_env();

        config.transport = TransportConfig::from_env();

        let infoblox = &mut config.infoblox;
        infoblox.host = std::env::var("INFOBLOX_HOST").unwrap_or_default();
        infoblox.username = std::env::var("INFOBLOX_USERNAME").unwrap_or_default();
        infoblox.password = std::env::var("INFOBLOX_PASSWORD").unwrap_or_default();

        if let Ok(version) = std::env::var("INFOBLOX_WAPI_VERSION") {
            infoblox.wapi_version = version;
        }

        if let Ok(verify) = std::env::var("INFOBLOX_VERIFY_SSL") {
            infoblox.verify_ssl = parse_verify_ssl(&verify).unwrap_or_else(|msg| {
                warn!("{}", msg);
                true
            });
        }

        if let Ok(timeout) = std::env::var("INFOBLOX_TIMEOUT_SECS") {
            infoblox.timeout_secs = timeout
                .parse()
                .map_err(|_| Error::config(format!("Invalid INFOBLOX_TIMEOUT_SECS: {}", timeout)))?;
        }

        if let Ok(view) = std::env::var("MCP_DEFAULT_DNS_VIEW") {
            config.prompts.default_view = view;
        }

        config.infoblox.validate()?;
        info!(
            "Infoblox grid configured: {} (WAPI v{})",
            config.infoblox.host, config.infoblox.wapi_version
        );

        Ok(config)
    }
}

/// Parse `INFOBLOX_VERIFY_SSL`. The error is the warning to log before
/// falling back to verification on.
fn parse_verify_ssl(value: &str) -> std::result::Result<bool, String> {
    parse_bool(value).ok_or_else(|| {
        format!(
            "Invalid INFOBLOX_VERIFY_SSL value '{}', keeping verification on",
            value
        )
    })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Env var tests must not interleave
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    const VARS: [&str; 6] = [
        "INFOBLOX_HOST",
        "INFOBLOX_USERNAME",
        "INFOBLOX_PASSWORD",
        "INFOBLOX_WAPI_VERSION",
        "INFOBLOX_VERIFY_SSL",
        "INFOBLOX_TIMEOUT_SECS",
    ];

    fn clear_vars() {
        for var in VARS {
            unsafe {
                std::env::remove_var(var);
            }
        }
    }

    fn set_required() {
        unsafe {
            std::env::set_var("INFOBLOX_HOST", "gm.example.com");
            std::env::set_var("INFOBLOX_USERNAME", "admin");
            std::env::set_var("INFOBLOX_PASSWORD", "hunter2");
        }
    }

    #[test]
    fn test_from_env_with_required_vars() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        set_required();

        let config = Config::from_env().unwrap();
        assert_eq!(config.infoblox.host, "gm.example.com");
        assert_eq!(config.infoblox.wapi_version, DEFAULT_WAPI_VERSION);
        assert!(config.infoblox.verify_ssl);
        assert_eq!(config.infoblox.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(
            config.infoblox.base_url(),
            "https://gm.example.com/wapi/v2.12/"
        );

        clear_vars();
    }

    #[test]
    fn test_from_env_overrides() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        set_required();
        unsafe {
            std::env::set_var("INFOBLOX_WAPI_VERSION", "v2.10");
            std::env::set_var("INFOBLOX_VERIFY_SSL", "false");
            std::env::set_var("INFOBLOX_TIMEOUT_SECS", "5");
        }

        let config = Config::from_env().unwrap();
        assert!(!config.infoblox.verify_ssl);
        assert_eq!(config.infoblox.timeout_secs, 5);
        assert_eq!(
            config.infoblox.base_url(),
            "https://gm.example.com/wapi/v2.10/"
        );

        clear_vars();
    }

    #[test]
    fn test_from_env_missing_credentials() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        unsafe {
            std::env::set_var("INFOBLOX_HOST", "gm.example.com");
        }

        let err = Config::from_env().unwrap_err().to_string();
        assert!(err.contains("INFOBLOX_USERNAME"));
        assert!(err.contains("INFOBLOX_PASSWORD"));
        assert!(!err.contains("INFOBLOX_HOST"));

        clear_vars();
    }

    #[test]
    fn test_from_env_invalid_timeout() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_vars();
        set_required();
        unsafe {
            std::env::set_var("INFOBLOX_TIMEOUT_SECS", "soon");
        }

        assert!(Config::from_env().is_err());

        clear_vars();
    }

    #[test]
    fn test_password_redacted_in_debug() {
        let infoblox = InfobloxConfig {
            password: "super_secret_password".to_string(),
            ..Default::default()
        };
        let debug_str = format!("{:?}", infoblox);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_password"));
    }

    #[test]
    fn test_invalid_verify_ssl_is_reported() {
        assert_eq!(parse_verify_ssl("off"), Ok(false));
        let warning = parse_verify_ssl("flase").unwrap_err();
        assert!(warning.contains("INFOBLOX_VERIFY_SSL"));
        assert!(warning.contains("'flase'"));
    }

    #[test]
    fn test_logging_level_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "debug");
        }
        assert_eq!(LoggingConfig::from_env().level, "debug");
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
        }
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
