//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MEDIWRAP_CART_DIR` - Directory holding the persisted cart slot
//!   (default: `.mediwrap`)
//! - `MEDIWRAP_CART_KEY` - Namespaced key of the cart slot
//!   (default: `mediwrap-cart`)

use std::env;
use std::path::PathBuf;

use thiserror::Error;

/// Default slot key, matching the original browser storage key.
pub const DEFAULT_CART_KEY: &str = "mediwrap-cart";

/// Default directory for the file-backed store.
pub const DEFAULT_CART_DIR: &str = ".mediwrap";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Directory holding the persisted slot (file-backed stores only).
    pub cart_dir: PathBuf,
    /// Key under which the serialized line-item list is stored.
    pub cart_key: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            cart_dir: PathBuf::from(DEFAULT_CART_DIR),
            cart_key: DEFAULT_CART_KEY.to_string(),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set but empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(dir) = env::var("MEDIWRAP_CART_DIR") {
            if dir.trim().is_empty() {
                return Err(ConfigError::InvalidEnvVar(
                    "MEDIWRAP_CART_DIR".to_string(),
                    "must not be empty".to_string(),
                ));
            }
            config.cart_dir = PathBuf::from(dir);
        }

        if let Ok(key) = env::var("MEDIWRAP_CART_KEY") {
            if key.trim().is_empty() {
                return Err(ConfigError::InvalidEnvVar(
                    "MEDIWRAP_CART_KEY".to_string(),
                    "must not be empty".to_string(),
                ));
            }
            config.cart_key = key;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CartConfig::default();
        assert_eq!(config.cart_key, "mediwrap-cart");
        assert_eq!(config.cart_dir, PathBuf::from(".mediwrap"));
    }
}
