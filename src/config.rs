//! Tool configuration.
//!
//! Values the command builder and executor need but that do not belong to a
//! single request. A `Config` is passed explicitly to every build call.

use std::time::Duration;

use crate::error::{Error, Result};

/// Configuration shared by all requests of a [`Client`](crate::Client).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// GETBULK max-repetitions for `snmptable` (`-Cr`).
    pub max_repetitions: u32,
    /// Column separator for `snmptable` output (`-Cf`).
    pub field_delimiter: String,
    /// Wall-clock limit for one tool invocation.
    #[cfg_attr(feature = "serde", serde(rename = "timeout_ms", with = "duration_ms"))]
    pub timeout: Duration,
    /// Shell used to run the command line.
    pub shell: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_repetitions: 10,
            field_delimiter: "|".to_string(),
            timeout: Duration::from_secs(5),
            shell: "sh".to_string(),
        }
    }
}

impl Config {
    /// Set the `snmptable` max-repetitions.
    pub fn max_repetitions(mut self, max: u32) -> Self {
        self.max_repetitions = max;
        self
    }

    /// Set the `snmptable` field delimiter.
    pub fn field_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.field_delimiter = delimiter.into();
        self
    }

    /// Set the per-invocation timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the shell interpreter.
    pub fn shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    /// Check values that would produce a broken command line.
    pub fn validate(&self) -> Result<()> {
        if self.max_repetitions == 0 {
            return Err(Error::InvalidConfig {
                reason: "max_repetitions must be positive",
            });
        }
        if self.field_delimiter.is_empty() {
            return Err(Error::InvalidConfig {
                reason: "field_delimiter must not be empty",
            });
        }
        // The delimiter is single-quoted on the command line and split per line
        if self.field_delimiter.contains(['\'', '\n', '\r']) {
            return Err(Error::InvalidConfig {
                reason: "field_delimiter must not contain quotes or line breaks",
            });
        }
        if self.timeout.is_zero() {
            return Err(Error::InvalidConfig {
                reason: "timeout must be non-zero",
            });
        }
        if self.shell.trim().is_empty() {
            return Err(Error::InvalidConfig {
                reason: "shell must not be empty",
            });
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis().try_into().unwrap_or(u64::MAX))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
