use std::path::Path;

use features2d_core::{AkazeOptions, BriskOptions, KazeOptions, OrbOptions};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::{Akaze, Brisk, Kaze, NativeDetector, Orb};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML config: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("failed to encode TOML config: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("unsupported config format '{0}' (expected .json or .toml)")]
    UnsupportedFormat(String),

    #[error("config rejected by engine: {0}")]
    Engine(#[from] EngineError),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Detector selection plus its options, as stored in a config file
///
/// ```toml
/// detector = "akaze"
/// nOctaves = 8
/// threshold = 0.01
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "detector", rename_all = "lowercase")]
pub enum DetectorConfig {
    Akaze(AkazeOptions),
    Kaze(KazeOptions),
    Orb(OrbOptions),
    Brisk(BriskOptions),
}

impl DetectorConfig {
    /// Detector family tag as written in the file
    pub fn detector(&self) -> &'static str {
        match self {
            DetectorConfig::Akaze(_) => "akaze",
            DetectorConfig::Kaze(_) => "kaze",
            DetectorConfig::Orb(_) => "orb",
            DetectorConfig::Brisk(_) => "brisk",
        }
    }

    /// Check the options by constructing the engine once
    pub fn validate(&self) -> Result<(), EngineError> {
        match self {
            DetectorConfig::Akaze(o) => Akaze::create(o).map(drop),
            DetectorConfig::Kaze(o) => Kaze::create(o).map(drop),
            DetectorConfig::Orb(o) => Orb::create(o).map(drop),
            DetectorConfig::Brisk(o) => Brisk::create(o).map(drop),
        }
    }

    /// Load a config file, picking the format from its extension
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::load_json(path),
            Some("toml") => Self::load_toml(path),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }

    /// Save configuration to JSON file
    pub fn save_json<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Load configuration from JSON file
    pub fn load_json<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Save configuration to TOML file
    pub fn save_toml<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Load configuration from TOML file
    pub fn load_toml<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn from_toml(toml_str: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}
