use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::ast::RestoreFlag;

/// Rendering modes as they appear in a proxy's configuration file.
///
/// - `compat_80` rewrites system variables removed in MySQL 8.0.
/// - `quote_identifiers` backtick-quotes every identifier.
/// - `extra_bits` passes through mode bits this crate does not interpret.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RestoreConfig {
    pub compat_80: bool,
    pub quote_identifiers: bool,
    pub extra_bits: u32,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "ConfigError: cannot read config: {}", err),
            ConfigError::Json(err) => write!(f, "ConfigError: invalid config: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Json(err) => Some(err),
        }
    }
}

impl RestoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience: configuration for backends running MySQL 8.0 or later.
    pub fn mysql80() -> Self {
        Self { compat_80: true, ..Self::default() }
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(ConfigError::Json)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_json(&text)
    }

    pub fn flag(&self) -> RestoreFlag {
        let mut flag = RestoreFlag::from_bits(self.extra_bits);
        if self.compat_80 {
            flag |= RestoreFlag::COMPAT_80;
        }
        if self.quote_identifiers {
            flag |= RestoreFlag::QUOTE_IDENTIFIERS;
        }
        flag
    }
}
