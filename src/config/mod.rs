//! Configuration loaded once at startup.
//!
//! The file lives at `$XDG_CONFIG_HOME/zcalc/config.toml` unless a path is
//! given on the command line. A missing file means defaults.

mod locale;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::calculator::{CalcError, NumberFormat};

pub use locale::locale_decimal_separator;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    InvalidSeparator(#[from] CalcError),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Glyph between integer and fractional digits. Falls back to the
    /// process locale when unset.
    pub decimal_separator: Option<char>,
    pub window: WindowConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 260.0,
            height: 320.0,
            resizable: false,
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zcalc").join("config.toml"))
    }

    /// Load from `path`, or from [`Config::default_path`] when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path.map(Path::to_path_buf).or_else(Self::default_path) {
            Some(path) => path,
            None => {
                debug!("no config directory available, using defaults");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse_at(&contents, &path)?;

        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse and validate config file contents.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        Self::parse_at(contents, Path::new("<inline>"))
    }

    fn parse_at(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.number_format()?;
        Ok(config)
    }

    /// The number format the calculator should use.
    pub fn number_format(&self) -> Result<NumberFormat, ConfigError> {
        let separator = self.decimal_separator.unwrap_or_else(locale_decimal_separator);
        Ok(NumberFormat::new(separator)?)
    }

    /// Default config rendered as TOML.
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        let config = Self {
            decimal_separator: Some(locale_decimal_separator()),
            ..Self::default()
        };
        toml::to_string_pretty(&config)
    }
}
