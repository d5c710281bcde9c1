//! Environment-driven configuration for the HTTP server and the registries.

use std::env;
use std::net::Ipv4Addr;
use thiserror::Error;

/// Configuration error type
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse environment variable '{key}': {details}")]
    ParseError { key: String, details: String },
}

/// Trait for configuration that can be loaded from environment variables
pub trait FromEnv: Sized {
    fn from_env() -> Result<Self, ConfigError>;
}

/// Helper to load an environment variable with a default value
pub fn env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_error(key: &str, details: impl ToString) -> ConfigError {
    ConfigError::ParseError {
        key: key.to_string(),
        details: details.to_string(),
    }
}

/// Server configuration for the HTTP API
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Get the server address as "host:port"
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl FromEnv for ServerConfig {
    /// - HOST: defaults to 0.0.0.0 (all interfaces)
    /// - PORT: defaults to 8080
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default("HOST", &Ipv4Addr::UNSPECIFIED.to_string());
        let port = env_or_default("PORT", "8080")
            .parse()
            .map_err(|e| parse_error("PORT", e))?;

        Ok(Self { host, port })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::UNSPECIFIED.to_string(),
            port: 8080,
        }
    }
}

/// Settings shared by the product and user registry actors.
#[derive(Clone, Debug)]
pub struct RegistryConfig {
    /// Capacity of each actor's request channel.
    pub buffer_size: usize,
    /// Preload the demo records at startup.
    pub seed: bool,
}

impl FromEnv for RegistryConfig {
    /// - REGISTRY_BUFFER_SIZE: defaults to 32, must be at least 1
    /// - REGISTRY_SEED: defaults to true
    fn from_env() -> Result<Self, ConfigError> {
        let key = "REGISTRY_BUFFER_SIZE";
        let buffer_size: usize = env_or_default(key, "32")
            .parse()
            .map_err(|e| parse_error(key, e))?;
        if buffer_size == 0 {
            return Err(parse_error(key, "must be greater than zero"));
        }

        let key = "REGISTRY_SEED";
        let seed = match env_or_default(key, "true").to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            other => return Err(parse_error(key, format!("not a boolean: {other}"))),
        };

        Ok(Self { buffer_size, seed })
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            seed: true,
        }
    }
}

/// Everything `main` needs to start the service.
#[derive(Clone, Debug, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub registry: RegistryConfig,
}

impl FromEnv for AppConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            registry: RegistryConfig::from_env()?,
        })
    }
}
