use crate::Error;

use serde::{Deserialize, Serialize};

/// Configuration shared by every request a [`Normalizer`](crate::Normalizer)
/// handles.
///
/// The configuration is fixed once the normalizer is created, so it
/// should be assembled during application startup:
///
/// ```
/// use bison_env::{Config, Normalizer};
///
/// let config = Config::from_toml(r#"base_path = "/app.php""#).unwrap();
/// let normalizer = Normalizer::new(config);
/// assert_eq!(normalizer.config().base_path, "/app.php");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// URI prefix (usually a front controller script) that is stripped
    /// from `REQUEST_URI` before the path is derived.
    pub base_path: String,
}

impl Config {
    pub const DEFAULT_BASE_PATH: &'static str = "/index.php";

    /// Parse a configuration from a TOML document.
    ///
    /// Missing keys fall back to their defaults.
    pub fn from_toml(s: &str) -> Result<Self, Error> {
        Ok(toml::from_str(s)?)
    }

    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_path: Self::DEFAULT_BASE_PATH.to_owned(),
        }
    }
}
