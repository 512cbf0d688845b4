// src/config/mod.rs
// Server configuration: CLI flags with environment fallbacks

use clap::Args;
use std::net::SocketAddr;
use tracing::{Level, debug};

use crate::error::{Result, TaskError};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://tasks.db";
pub const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";

/// Flags accepted by `task-manager serve`
///
/// Every flag can also be set through the environment (or a `.env` file,
/// loaded before parsing).
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "TASK_MANAGER_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "TASK_MANAGER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// SQLite connection string
    #[arg(long, env = "TASK_MANAGER_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// Maximum log level (trace, debug, info, warn, error)
    #[arg(long, env = "TASK_MANAGER_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Resolved configuration for the task manager service
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DATABASE_URL.to_string(),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Configuration for tests: private in-memory database, quiet logging
    pub fn testing() -> Self {
        Self {
            database_url: IN_MEMORY_DATABASE_URL.to_string(),
            log_level: Level::WARN,
            ..Self::default()
        }
    }

    pub fn from_args(args: &ServeArgs) -> Result<Self> {
        let log_level = args.log_level.parse::<Level>().map_err(|_| {
            TaskError::Config(format!("unknown log level '{}'", args.log_level))
        })?;

        if args.database_url.trim().is_empty() {
            return Err(TaskError::Config("database url must not be empty".to_string()));
        }

        let config = Self {
            host: args.host.clone(),
            port: args.port,
            database_url: args.database_url.clone(),
            log_level,
        };
        debug!(?config, "configuration resolved");
        Ok(config)
    }

    pub fn bind_address(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| TaskError::Config(format!("invalid bind address: {}", e)))
    }

    pub fn is_in_memory(&self) -> bool {
        crate::db::is_in_memory_url(&self.database_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ServeArgs {
        ServeArgs {
            host: "0.0.0.0".to_string(),
            port: 8080,
            database_url: "sqlite://data/tasks.db".to_string(),
            log_level: "debug".to_string(),
        }
    }

    #[test]
    fn test_from_args() {
        let config = Config::from_args(&args()).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.bind_address().unwrap().to_string(), "0.0.0.0:8080");
        assert!(!config.is_in_memory());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        let mut bad = args();
        bad.log_level = "chatty".to_string();
        let err = Config::from_args(&bad).unwrap_err();
        assert!(err.to_string().contains("chatty"));
    }

    #[test]
    fn test_rejects_empty_database_url() {
        let mut bad = args();
        bad.database_url = "  ".to_string();
        assert!(Config::from_args(&bad).is_err());
    }

    #[test]
    fn test_invalid_host_fails_bind_address() {
        let config = Config {
            host: "not a host".to_string(),
            ..Config::default()
        };
        assert!(config.bind_address().is_err());
    }

    #[test]
    fn test_testing_config_uses_memory_database() {
        let config = Config::testing();
        assert!(config.is_in_memory());
        assert_eq!(config.port, DEFAULT_PORT);
    }
}
