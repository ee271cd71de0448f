//! Config module.

mod errors;
mod settings;

use std::env;

pub use errors::{ConfigError, Result};
pub use settings::{Settings, DEFAULT_SETTINGS_PATH};

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
    /// Mount debug routes.
    pub debug_mode: bool,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Server options.
    pub server: ServerConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            api: ApiConfig {
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("LABELORD_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("LABELORD_API_GITHUB_ROOT_URL", "https://api.github.com"),
                },
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("LABELORD_LOGGING_USE_BUNYAN", false),
            },
            server: ServerConfig {
                bind_ip: env_to_str("LABELORD_SERVER_BIND_IP", "127.0.0.1"),
                bind_port: env_to_u16("LABELORD_SERVER_BIND_PORT", 5000),
                workers_count: env_to_optional_u16("LABELORD_SERVER_WORKERS_COUNT", None),
                debug_mode: false,
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name)
        .map(|e| match &e.trim().to_lowercase()[..] {
            "1" | "true" | "yes" | "on" => true,
            "" | "0" | "false" | "no" | "off" => false,
            _ => default,
        })
        .unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_e| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::from_env_no_version();
        assert_eq!(config.version, "0.0.0");
        assert!(!config.server.debug_mode);
    }

    #[test]
    fn test_env_parsing_falls_back_on_garbage() {
        env::set_var("LABELORD_TEST_GARBAGE_U16", "not-a-number");
        assert_eq!(env_to_u16("LABELORD_TEST_GARBAGE_U16", 42), 42);
        assert_eq!(
            env_to_optional_u16("LABELORD_TEST_GARBAGE_U16", Some(3)),
            Some(3)
        );
        assert_eq!(env_to_u64("LABELORD_TEST_MISSING_U64", 7), 7);
        assert!(!env_to_bool("LABELORD_TEST_MISSING_BOOL", false));
    }

    #[test]
    fn test_env_to_bool() {
        env::set_var("LABELORD_TEST_BOOL_FALSE", "false");
        assert!(!env_to_bool("LABELORD_TEST_BOOL_FALSE", true));

        env::set_var("LABELORD_TEST_BOOL_TRUE", "Yes");
        assert!(env_to_bool("LABELORD_TEST_BOOL_TRUE", false));

        env::set_var("LABELORD_TEST_BOOL_GARBAGE", "maybe");
        assert!(env_to_bool("LABELORD_TEST_BOOL_GARBAGE", true));
        assert!(!env_to_bool("LABELORD_TEST_BOOL_GARBAGE", false));
    }
}
