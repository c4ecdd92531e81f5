//! Visualizer configuration
//!
//! Values are loaded from:
//! 1. `.env` file in the current directory or parent directories (if present)
//! 2. System environment variables
//!
//! Every key is optional; missing keys fall back to the defaults below.
//!
//! | Variable                | Default |
//! |-------------------------|---------|
//! | `SORTVIZ_DEFAULT_SIZE`  | 10      |
//! | `SORTVIZ_MIN_SIZE`      | 10      |
//! | `SORTVIZ_MAX_SIZE`      | 90      |
//! | `SORTVIZ_PACING_MS`     | 100     |
//! | `SORTVIZ_VALUE_MIN`     | 1       |
//! | `SORTVIZ_VALUE_MAX`     | 100     |

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};

pub const DEFAULT_ARRAY_SIZE: usize = 10;
pub const MIN_ARRAY_SIZE: usize = 10;
pub const MAX_ARRAY_SIZE: usize = 90;
pub const DEFAULT_PACING_MS: u64 = 100;
pub const VALUE_MIN: i64 = 1;
pub const VALUE_MAX: i64 = 100;

/// Tunables consumed by the coordinator and the engine's pacer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualizerConfig {
    pub default_size: usize,
    pub min_size: usize,
    pub max_size: usize,
    #[serde(with = "duration_millis")]
    pub pacing: Duration,
    pub value_min: i64,
    pub value_max: i64,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_ARRAY_SIZE,
            min_size: MIN_ARRAY_SIZE,
            max_size: MAX_ARRAY_SIZE,
            pacing: Duration::from_millis(DEFAULT_PACING_MS),
            value_min: VALUE_MIN,
            value_max: VALUE_MAX,
        }
    }
}

impl VisualizerConfig {
    /// Load from the process environment, reading `.env` first if one exists
    pub fn from_env() -> SharedResult<Self> {
        // Silently ignored when no .env file is found
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup, validating the result
    pub fn from_lookup<F>(lookup: F) -> SharedResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            default_size: parse_or(&lookup, "SORTVIZ_DEFAULT_SIZE", defaults.default_size)?,
            min_size: parse_or(&lookup, "SORTVIZ_MIN_SIZE", defaults.min_size)?,
            max_size: parse_or(&lookup, "SORTVIZ_MAX_SIZE", defaults.max_size)?,
            pacing: Duration::from_millis(parse_or(&lookup, "SORTVIZ_PACING_MS", DEFAULT_PACING_MS)?),
            value_min: parse_or(&lookup, "SORTVIZ_VALUE_MIN", defaults.value_min)?,
            value_max: parse_or(&lookup, "SORTVIZ_VALUE_MAX", defaults.value_max)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Override the pacing delay
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Check that ranges are non-empty and the default size lies inside the size range
    pub fn validate(&self) -> SharedResult<()> {
        if self.min_size > self.max_size {
            return Err(invalid("SORTVIZ_MIN_SIZE", self.min_size));
        }
        if !self.size_in_range(self.default_size) {
            return Err(invalid("SORTVIZ_DEFAULT_SIZE", self.default_size));
        }
        if self.value_min > self.value_max {
            return Err(invalid("SORTVIZ_VALUE_MIN", self.value_min));
        }
        Ok(())
    }

    pub fn size_in_range(&self, size: usize) -> bool {
        (self.min_size..=self.max_size).contains(&size)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> SharedResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| SharedError::InvalidConfig {
            field: key.to_string(),
            value: raw,
        }),
        None => Ok(default),
    }
}

fn invalid(field: &str, value: impl ToString) -> SharedError {
    SharedError::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
