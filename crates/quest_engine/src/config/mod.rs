//! Configuration system

pub use serde::{Deserialize, Serialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;

        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Runtime options for the frame driver and scene scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Enable editor features (gizmo points).
    pub editor: bool,
    /// Drive a VR render target.
    pub vr: bool,
    /// Simulation delta used for single-step frames and as the debug-clock
    /// ceiling, in seconds.
    pub fixed_step_delta: f32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            editor: false,
            vr: false,
            fixed_step_delta: crate::foundation::time::FIXED_STEP_DELTA,
        }
    }
}

impl Config for RuntimeConfig {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_the_fixed_step() {
        let config = RuntimeConfig::default();
        assert!(!config.editor);
        assert!(!config.vr);
        assert_eq!(config.fixed_step_delta, 0.05);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = RuntimeConfig {
            editor: true,
            vr: false,
            fixed_step_delta: 0.05,
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: RuntimeConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed.editor, config.editor);
        assert_eq!(parsed.vr, config.vr);
        assert_eq!(parsed.fixed_step_delta, config.fixed_step_delta);
    }

    #[test]
    fn test_unsupported_format_is_rejected() {
        let err = RuntimeConfig::default()
            .save_to_file("settings.yaml")
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }
}
