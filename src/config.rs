//! Simulated latency and system configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::latency::Operation;

/// Environment variable holding a latency multiplier (`0` disables latency).
pub const LATENCY_SCALE_ENV: &str = "MEMIRROS_LATENCY_SCALE";

/// Upper bound for any single simulated delay.
const MAX_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("invalid environment variable {var}={value}: {reason}")]
    InvalidEnv {
        var: &'static str,
        value: String,
        reason: String,
    },
}

// =============================================================================
// Latency Configuration
// =============================================================================

/// Default delay for reads (list/get) in milliseconds.
fn default_read_ms() -> u64 {
    400
}

/// Default delay for creates and field updates in milliseconds.
fn default_write_ms() -> u64 {
    600
}

/// Default delay for deletes in milliseconds.
fn default_delete_ms() -> u64 {
    400
}

/// Default delay for appointment status changes in milliseconds.
fn default_status_ms() -> u64 {
    400
}

/// Default delay for login in milliseconds.
fn default_login_ms() -> u64 {
    400
}

/// Artificial per-operation delays emulating network round trips.
///
/// Every access-layer call waits the delay of its [`Operation`] class before
/// it touches the store. The defaults reproduce the latencies the storefront
/// was designed against, so loading states stay visible during UI testing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_read_ms")]
    pub read_ms: u64,
    #[serde(default = "default_write_ms")]
    pub write_ms: u64,
    #[serde(default = "default_delete_ms")]
    pub delete_ms: u64,
    #[serde(default = "default_status_ms")]
    pub status_ms: u64,
    #[serde(default = "default_login_ms")]
    pub login_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            read_ms: default_read_ms(),
            write_ms: default_write_ms(),
            delete_ms: default_delete_ms(),
            status_ms: default_status_ms(),
            login_ms: default_login_ms(),
        }
    }
}

impl LatencyConfig {
    /// No artificial delay at all.
    pub fn instant() -> Self {
        Self {
            read_ms: 0,
            write_ms: 0,
            delete_ms: 0,
            status_ms: 0,
            login_ms: 0,
        }
    }

    /// Multiplies every delay by `factor`, rounding to whole milliseconds.
    pub fn scaled(&self, factor: f64) -> Result<Self, ConfigError> {
        if !factor.is_finite() || factor < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "latency_scale",
                reason: format!("must be a finite, non-negative number, got {factor}"),
            });
        }
        let scale = |ms: u64| (ms as f64 * factor).round() as u64;
        let scaled = Self {
            read_ms: scale(self.read_ms),
            write_ms: scale(self.write_ms),
            delete_ms: scale(self.delete_ms),
            status_ms: scale(self.status_ms),
            login_ms: scale(self.login_ms),
        };
        scaled.validate()?;
        Ok(scaled)
    }

    pub fn duration_for(&self, operation: Operation) -> Duration {
        let ms = match operation {
            Operation::Read => self.read_ms,
            Operation::Write => self.write_ms,
            Operation::Delete => self.delete_ms,
            Operation::StatusChange => self.status_ms,
            Operation::Login => self.login_ms,
        };
        Duration::from_millis(ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("read_ms", self.read_ms),
            ("write_ms", self.write_ms),
            ("delete_ms", self.delete_ms),
            ("status_ms", self.status_ms),
            ("login_ms", self.login_ms),
        ];
        for (field, value) in fields {
            if value > MAX_DELAY_MS {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("{value} exceeds the {MAX_DELAY_MS} ms cap"),
                });
            }
        }
        Ok(())
    }
}

// =============================================================================
// System Configuration
// =============================================================================

fn default_buffer_size() -> usize {
    32
}

/// Configuration for the whole [`AtelierSystem`](crate::app_system::AtelierSystem).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Mailbox capacity of every resource actor. Must be > 0.
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
    #[serde(default)]
    pub latency: LatencyConfig,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: default_buffer_size(),
            latency: LatencyConfig::default(),
        }
    }
}

impl SystemConfig {
    /// Defaults with every delay disabled.
    pub fn instant() -> Self {
        Self {
            latency: LatencyConfig::instant(),
            ..Self::default()
        }
    }

    /// Defaults, with the latency scaled by `MEMIRROS_LATENCY_SCALE` when set.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(LATENCY_SCALE_ENV) {
            Ok(raw) => Self::with_latency_scale(&raw),
            Err(_) => Ok(Self::default()),
        }
    }

    fn with_latency_scale(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidEnv {
            var: LATENCY_SCALE_ENV,
            value: raw.to_string(),
            reason,
        };
        let factor: f64 = raw.trim().parse().map_err(|e| invalid(format!("{e}")))?;
        let latency = LatencyConfig::default()
            .scaled(factor)
            .map_err(|e| invalid(e.to_string()))?;
        Ok(Self {
            latency,
            ..Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.buffer_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "buffer_size",
                reason: "must be > 0".to_string(),
            });
        }
        self.latency.validate()
    }
}
