use std::path::Path;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML. The game rules
/// have no tunables; everything here is presentation.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Input poll interval for the terminal event loop, in milliseconds.
    pub tick_rate_ms: u64,
    /// Highlight the legal destinations of the selected piece.
    pub highlight_moves: bool,
    /// Draw file letters and rank numbers around the board.
    pub show_coordinates: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            tick_rate_ms: 100,
            highlight_moves: true,
            show_coordinates: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate_ms == 0 {
            return Err(ConfigError::Validation(
                "tick_rate_ms must be > 0".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: AppConfig = toml::from_str("highlight_moves = false").unwrap();
        assert!(!config.highlight_moves);
        assert_eq!(config.tick_rate_ms, 100);
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let config: AppConfig = toml::from_str("tick_rate_ms = 0").unwrap();
        assert!(config.validate().is_err());
    }
}
