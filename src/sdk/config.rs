use std::env::{self, VarError};
use std::fmt;
use std::time::Duration;
use thiserror::Error;

pub const BASE_URL_VAR: &str = "MAPBOX_API_BASE_URL";
pub const ACCESS_TOKEN_VAR: &str = "MAPBOX_API_ACCESS_TOKEN";
pub const TIMEOUT_VAR: &str = "MAPBOX_API_TIMEOUT_SECS";

/// Driving profile of the Mapbox Directions API.
pub const DEFAULT_BASE_URL: &str = "https://api.mapbox.com/directions/v5/mapbox/driving";

/// Applied to the whole request, connect through body read.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(String),

    #[error("{0} value is not valid unicode")]
    NotUnicode(String),

    #[error("{name} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { name: String, value: String },
}

/// Endpoint and credential for the routing provider, fixed for the lifetime of a lookup.
#[derive(Clone, PartialEq)]
pub struct MapboxConfig {
    pub base_url: String,
    pub access_token: String,
    pub timeout: Duration,
}

impl MapboxConfig {
    pub fn new(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            access_token: access_token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads the configuration from `MAPBOX_API_*` environment variables.
    ///
    /// Only the access token is required; the base URL and timeout fall back
    /// to [`DEFAULT_BASE_URL`] and [`DEFAULT_TIMEOUT`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let access_token = required(&lookup, ACCESS_TOKEN_VAR)?;
        let base_url =
            optional(&lookup, BASE_URL_VAR)?.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout = match optional(&lookup, TIMEOUT_VAR)? {
            Some(raw) => parse_timeout_secs(TIMEOUT_VAR, &raw)?,
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            base_url,
            access_token,
            timeout,
        })
    }
}

impl fmt::Debug for MapboxConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapboxConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn parse_timeout_secs(name: &str, raw: &str) -> Result<Duration, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidTimeout {
            name: name.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    optional(lookup, name)?.ok_or_else(|| ConfigError::Missing(name.to_string()))
}

// Blank values count as unset.
fn optional<F>(lookup: &F, name: &str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(name.to_string())),
    }
}
