//! Configuration management for the MCP servers.
//!
//! Defaults come from the server profile; a handful of values can be
//! overridden from the environment (or a `.env` file).

use serde::{Deserialize, Serialize};

use super::profile::ServerProfile;

/// Main configuration structure for an MCP server process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Which of the three servers this process runs.
    pub profile: ServerProfile,

    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_timestamps: true,
        }
    }
}

impl Config {
    /// Default configuration for the given profile.
    pub fn for_profile(profile: ServerProfile) -> Self {
        Self {
            server: ServerConfig {
                profile,
                name: profile.name().to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig::default(),
        }
    }

    /// Load configuration for the given profile from environment variables.
    ///
    /// Recognised variables: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`,
    /// `MCP_LOG_TIMESTAMPS`.
    pub fn from_env(profile: ServerProfile) -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::for_profile(profile);

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps =
                timestamps.to_lowercase() != "false" && timestamps != "0";
        }

        config
    }

    /// The profile this configuration was built for.
    pub fn profile(&self) -> ServerProfile {
        self.server.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_defaults_follow_profile() {
        let config = Config::for_profile(ServerProfile::LocalLlm);
        assert_eq!(config.server.name, "local-llm");
        assert_eq!(config.server.version, "1.0.0");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.profile(), ServerProfile::LocalLlm);
    }

    #[test]
    fn test_server_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_SERVER_NAME", "renamed-server");
        }
        let config = Config::from_env(ServerProfile::BigRewrite);
        assert_eq!(config.server.name, "renamed-server");
        assert_eq!(config.profile(), ServerProfile::BigRewrite);
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
    }

    #[test]
    fn test_log_level_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "debug");
            std::env::set_var("MCP_LOG_TIMESTAMPS", "false");
        }
        let config = Config::from_env(ServerProfile::UsageTracker);
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.with_timestamps);
        unsafe {
            std::env::remove_var("MCP_LOG_LEVEL");
            std::env::remove_var("MCP_LOG_TIMESTAMPS");
        }
    }

    #[test]
    fn test_env_absent_keeps_defaults() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("MCP_SERVER_NAME");
        }
        let config = Config::from_env(ServerProfile::UsageTracker);
        assert_eq!(config.server.name, "usage-tracker");
    }
}
