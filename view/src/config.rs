//! View configuration, read from TOML
//!
//! ```toml
//! isa = "rv32imc"
//! window_radius = 4
//!
//! [signals]
//! memory = "TOP.soc.rom.mem"
//! ```
//!
//! Every key is optional and falls back to the Gecko nano defaults.
use std::{fs, io, path::Path};

use riscv::{Target, TargetParseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    signals::SignalPaths,
    state::{DEFAULT_WINDOW_RADIUS, MAX_WINDOW_RADIUS},
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io { path: String, source: io::Error },

    #[error("Invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Target(#[from] TargetParseError),

    #[error("window_radius = {radius} exceeds the maximum of {max}")]
    WindowRadius { radius: u32, max: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// ISA string the instruction window is decoded against
    pub isa: String,
    pub window_radius: u32,
    pub signals: SignalPaths,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            isa: Target::rv32i().to_string(),
            window_radius: DEFAULT_WINDOW_RADIUS,
            signals: SignalPaths::default(),
        }
    }
}

impl ViewConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    pub fn target(&self) -> Result<Target, ConfigError> {
        Ok(self.isa.parse()?)
    }

    /// Check every setting, returning the target the ISA string names
    pub fn validate(&self) -> Result<Target, ConfigError> {
        if self.window_radius > MAX_WINDOW_RADIUS {
            return Err(ConfigError::WindowRadius {
                radius: self.window_radius,
                max: MAX_WINDOW_RADIUS,
            });
        }
        self.target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = ViewConfig::from_toml_str("").unwrap();
        assert_eq!(config, ViewConfig::default());
        assert_eq!(config.target().unwrap(), Target::rv32i());
        assert_eq!(config.window_radius, 3);
    }

    #[test]
    fn test_partial_override() {
        let text = r#"
            isa = "rv32imc"

            [signals]
            memory = "TOP.rom"
        "#;
        let config = ViewConfig::from_toml_str(text).unwrap();
        assert_eq!(config.target().unwrap(), Target::rv32imc());
        assert_eq!(config.signals.memory_word(2), "TOP.rom[2]");
        assert_eq!(config.signals.program_counter, SignalPaths::default().program_counter);
    }

    #[test]
    fn test_rejects_unknown_keys_and_bad_isa() {
        assert!(matches!(ViewConfig::from_toml_str("radius = 2"), Err(ConfigError::Toml(_))));
        let config = ViewConfig::from_toml_str("isa = \"arm64\"").unwrap();
        assert!(matches!(config.target(), Err(ConfigError::Target(_))));
    }

    #[test]
    fn test_window_radius_bound() {
        let config = ViewConfig::from_toml_str("window_radius = 4000000000").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::WindowRadius { radius: 4_000_000_000, max: MAX_WINDOW_RADIUS })
        ));
        let config = ViewConfig { window_radius: MAX_WINDOW_RADIUS, ..Default::default() };
        assert_eq!(config.validate().unwrap(), Target::rv32i());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = ViewConfig { window_radius: 5, ..Default::default() };
        let text = config.to_toml_string().unwrap();
        assert_eq!(ViewConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_missing_file() {
        let err = ViewConfig::load(Path::new("/nonexistent/gecko-view.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
