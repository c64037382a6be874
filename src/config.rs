use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub realtime: RealtimeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind (e.g., "0.0.0.0")
    pub host: String,
    /// HTTP + WebSocket port
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RealtimeConfig {
    /// Seconds between heartbeat broadcasts
    #[serde(default = "default_heartbeat_interval")]
    pub heartbeat_interval_secs: u64,
    /// Seconds to back off after a failed heartbeat
    #[serde(default = "default_error_cooldown")]
    pub error_cooldown_secs: u64,
    /// Outbound frames buffered per client before it is treated as dead
    #[serde(default = "default_client_buffer")]
    pub client_buffer: usize,
}

fn default_heartbeat_interval() -> u64 {
    30
}

fn default_error_cooldown() -> u64 {
    5
}

fn default_client_buffer() -> usize {
    64
}

impl RealtimeConfig {
    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_secs(self.heartbeat_interval_secs)
    }

    pub fn error_cooldown(&self) -> Duration {
        Duration::from_secs(self.error_cooldown_secs)
    }
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            heartbeat_interval_secs: default_heartbeat_interval(),
            error_cooldown_secs: default_error_cooldown(),
            client_buffer: default_client_buffer(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable JSON formatted logs
    #[serde(default)]
    pub json: bool,
    /// Directory for daily rolling log files (console only when unset)
    #[serde(default)]
    pub dir: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
            dir: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("realtime.heartbeat_interval_secs", 30)?
            .set_default("realtime.error_cooldown_secs", 5)?
            .set_default("realtime.client_buffer", 64)?
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("BUTCHER_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (BUTCHER_SERVER__PORT, etc.)
            .add_source(
                Environment::with_prefix("BUTCHER")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Configuration used when no files are present
    pub fn default_config() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            realtime: RealtimeConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.server.host.trim().is_empty() {
            errors.push("server.host must not be empty".to_string());
        }

        if self.realtime.heartbeat_interval_secs == 0 {
            errors.push("realtime.heartbeat_interval_secs must be positive".to_string());
        }

        if self.realtime.error_cooldown_secs == 0 {
            errors.push("realtime.error_cooldown_secs must be positive".to_string());
        }

        if self.realtime.client_buffer == 0 {
            errors.push("realtime.client_buffer must be positive".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
