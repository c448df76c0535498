//! Build mode resolution.
//!
//! The mode is read once from the environment at startup and passed by value
//! into every downstream builder. Nothing else in the crate consults the
//! environment.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`Mode::from_env`].
pub const MODE_ENV_VAR: &str = "BALER_MODE";

/// Build mode selecting between fast-iteration and optimized output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Unminified output, source maps, hot reload.
    Development,
    /// Minified, content-hashed output. The default when no mode is set.
    #[default]
    Production,
}

impl Mode {
    /// Resolve the mode from `BALER_MODE`.
    ///
    /// Only the exact value `"development"` selects development; absence or
    /// any other value resolves to production.
    pub fn from_env() -> Self {
        match std::env::var(MODE_ENV_VAR) {
            Ok(value) => Self::from_str_lossy(&value),
            Err(_) => Mode::Production,
        }
    }

    /// Parse a mode string, treating anything that is not exactly
    /// `"development"` as production.
    pub fn from_str_lossy(value: &str) -> Self {
        if value == "development" {
            Mode::Development
        } else {
            Mode::Production
        }
    }

    pub fn is_development(self) -> bool {
        self == Mode::Development
    }

    pub fn is_production(self) -> bool {
        self == Mode::Production
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Development => write!(f, "development"),
            Mode::Production => write!(f, "production"),
        }
    }
}
