//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `EVALUATOR_*` environment variables.
//! The judge credential has no default: it must come from the environment unless
//! the mock judge is selected.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::time::Duration;

use crate::constants::{DEFAULT_JUDGE_MODEL, DEFAULT_JUDGE_TIMEOUT_SECS};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `EVALUATOR_*` overrides on top of defaults,
/// then [`Config::validate`] before constructing the judge.
#[derive(Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Judge model identifier passed to genai. Default: [`DEFAULT_JUDGE_MODEL`].
    pub judge_model: String,

    /// Credential for the judge provider.
    pub judge_api_key: Option<String>,

    /// Upper bound for a single judge call. Default: 30s.
    pub judge_timeout: Duration,

    /// Serve with the deterministic mock judge instead of a live model.
    pub mock_judge: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("bind_addr", &self.bind_addr)
            .field("judge_model", &self.judge_model)
            .field(
                "judge_api_key",
                &self.judge_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("judge_timeout", &self.judge_timeout)
            .field("mock_judge", &self.mock_judge)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            judge_model: DEFAULT_JUDGE_MODEL.to_string(),
            judge_api_key: None,
            judge_timeout: Duration::from_secs(DEFAULT_JUDGE_TIMEOUT_SECS),
            mock_judge: false,
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "EVALUATOR_PORT";
    const ENV_BIND_ADDR: &'static str = "EVALUATOR_BIND_ADDR";
    const ENV_JUDGE_MODEL: &'static str = "EVALUATOR_JUDGE_MODEL";
    const ENV_JUDGE_API_KEY: &'static str = "EVALUATOR_JUDGE_API_KEY";
    const ENV_GROQ_API_KEY: &'static str = "GROQ_API_KEY";
    const ENV_JUDGE_TIMEOUT_SECS: &'static str = "EVALUATOR_JUDGE_TIMEOUT_SECS";
    const ENV_MOCK_JUDGE: &'static str = "EVALUATOR_MOCK_JUDGE";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let judge_model = Self::parse_string_from_env(Self::ENV_JUDGE_MODEL, defaults.judge_model);
        let judge_api_key = Self::parse_optional_string_from_env(Self::ENV_JUDGE_API_KEY)
            .or_else(|| Self::parse_optional_string_from_env(Self::ENV_GROQ_API_KEY));
        let judge_timeout = Self::parse_timeout_from_env(defaults.judge_timeout)?;
        let mock_judge = Self::parse_flag_from_env(Self::ENV_MOCK_JUDGE);

        Ok(Self {
            port,
            bind_addr,
            judge_model,
            judge_api_key,
            judge_timeout,
            mock_judge,
        })
    }

    /// Validates the judge settings. A live judge needs a model and a credential.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.judge_model.trim().is_empty() {
            return Err(ConfigError::InvalidModel {
                value: self.judge_model.clone(),
            });
        }

        if self.judge_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                value: self.judge_timeout.as_secs().to_string(),
            });
        }

        if !self.mock_judge && self.judge_api_key.is_none() {
            return Err(ConfigError::MissingEnvVar {
                name: Self::ENV_JUDGE_API_KEY,
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_timeout_from_env(default: Duration) -> Result<Duration, ConfigError> {
        match env::var(Self::ENV_JUDGE_TIMEOUT_SECS) {
            Ok(value) => match value.trim().parse::<u64>() {
                Ok(0) | Err(_) => Err(ConfigError::InvalidTimeout { value }),
                Ok(secs) => Ok(Duration::from_secs(secs)),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_flag_from_env(var_name: &str) -> bool {
        env::var(var_name)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false)
    }
}
