//! Queue configuration structures.

use serde::{Deserialize, Serialize};

const fn default_timeout_ms() -> u64 {
    5000
}

/// Construction-time configuration for a
/// [`CommandQueue`](crate::core::CommandQueue). Both knobs are fixed for the
/// queue's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueConfig {
    /// Discard the remaining backlog when a command fails. The failing
    /// command itself is still routed to its handler.
    #[serde(default)]
    pub fail_fast: bool,
    /// Watchdog duration in milliseconds for commands without their own
    /// override.
    #[serde(default = "default_timeout_ms")]
    pub default_timeout_ms: u64,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            default_timeout_ms: default_timeout_ms(),
        }
    }
}

impl QueueConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_timeout_ms == 0 {
            return Err("default_timeout_ms must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns a description of the parse or validation failure.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from the process environment, honoring a `.env`
    /// file when present. Unset variables keep their defaults.
    ///
    /// Recognized variables: `SERIAL_DISPATCH_FAIL_FAST` (`1`/`true`/`yes`)
    /// and `SERIAL_DISPATCH_DEFAULT_TIMEOUT_MS`.
    ///
    /// # Errors
    ///
    /// Returns a description of the first unparsable or invalid value.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        let mut cfg = Self::default();
        if let Ok(raw) = std::env::var("SERIAL_DISPATCH_FAIL_FAST") {
            cfg.fail_fast = matches!(raw.as_str(), "1" | "true" | "yes");
        }
        if let Ok(raw) = std::env::var("SERIAL_DISPATCH_DEFAULT_TIMEOUT_MS") {
            cfg.default_timeout_ms = raw
                .parse()
                .map_err(|e| format!("SERIAL_DISPATCH_DEFAULT_TIMEOUT_MS invalid: {e}"))?;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}
