use std::{net::SocketAddr, time::Duration};

use crate::server::error::config::ConfigError;

static DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:3000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Behaviour switches for cascading author deletion
#[derive(Debug, Clone, PartialEq)]
pub struct CascadeConfig {
    /// Delete a prize outright when every attempt to detach it from the author failed.
    ///
    /// The delete may succeed while leaving a dangling author reference if the catalog does
    /// not enforce the constraint it appeared to enforce. Strict deployments turn this off.
    pub last_resort_prize_delete: bool,
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self {
            last_resort_prize_delete: true,
        }
    }
}

pub struct Config {
    pub catalog_api_url: String,
    pub bind_address: SocketAddr,
    pub request_timeout: Duration,
    pub cascade: CascadeConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_api_url = lookup("CATALOG_API_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("CATALOG_API_URL".to_string()))?
            .trim()
            .trim_end_matches('/')
            .to_string();

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let request_timeout_secs = match lookup("CATALOG_REQUEST_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                Ok(_) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "CATALOG_REQUEST_TIMEOUT_SECS".to_string(),
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "CATALOG_REQUEST_TIMEOUT_SECS".to_string(),
                        reason: e.to_string(),
                    })
                }
            },
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let last_resort_prize_delete = match lookup("CASCADE_LAST_RESORT_PRIZE_DELETE") {
            Some(value) => parse_bool("CASCADE_LAST_RESORT_PRIZE_DELETE", &value)?,
            None => CascadeConfig::default().last_resort_prize_delete,
        };

        Ok(Self {
            catalog_api_url,
            bind_address,
            request_timeout: Duration::from_secs(request_timeout_secs),
            cascade: CascadeConfig {
                last_resort_prize_delete,
            },
        })
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: format!("expected a boolean, got {:?}", other),
        }),
    }
}
