//! Controller configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::theme::{CLASSIC, DARK};

/// Tunables for a [`ThemeController`](crate::ThemeController).
///
/// Every field has a default matching the stock Swagger UI setup, so a
/// config file only needs the fields it changes.
///
/// # Example
///
/// ```rust
/// use swagger_theme::ThemeConfig;
///
/// let config = ThemeConfig::from_json(r#"{ "stylesheet_base": "/static/themes" }"#).unwrap();
/// assert_eq!(config.stylesheet_base, "/static/themes");
/// assert_eq!(config.storage_key, "swagger-theme");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Key the selection is persisted under.
    pub storage_key: String,
    /// Directory stylesheets are fetched from; `<base>/<id>.css`.
    pub stylesheet_base: String,
    /// Theme rendered by the page's built-in styles, needing no stylesheet.
    pub default_theme: String,
    /// Theme `auto` resolves to in light mode.
    pub light_theme: String,
    /// Theme `auto` resolves to in dark mode.
    pub dark_theme: String,
    /// CSS `transition` value applied to the body while switching.
    pub transition: String,
    pub transition_ms: u64,
    /// Default preview length.
    pub preview_ms: u64,
    /// Key that, with Ctrl/Cmd and Shift, cycles every theme.
    pub cycle_all_key: char,
    /// Key that, with Ctrl/Cmd and Shift, cycles dark themes.
    pub cycle_dark_key: char,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: "swagger-theme".to_string(),
            stylesheet_base: "./themes".to_string(),
            default_theme: CLASSIC.to_string(),
            light_theme: CLASSIC.to_string(),
            dark_theme: DARK.to_string(),
            transition: "background-color 0.3s ease, color 0.3s ease".to_string(),
            transition_ms: 300,
            preview_ms: 2000,
            cycle_all_key: 'T',
            cycle_dark_key: 'D',
        }
    }
}

impl ThemeConfig {
    /// Parses a config from JSON, filling missing fields with defaults.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON config file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }

    /// Checks the fields a controller cannot work without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("storage_key", &self.storage_key),
            ("default_theme", &self.default_theme),
            ("light_theme", &self.light_theme),
            ("dark_theme", &self.dark_theme),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must not be empty".to_string(),
                });
            }
        }
        if self.cycle_all_key.eq_ignore_ascii_case(&self.cycle_dark_key) {
            return Err(ConfigError::Invalid {
                field: "cycle_dark_key",
                reason: format!("collides with cycle_all_key '{}'", self.cycle_all_key),
            });
        }
        Ok(())
    }

    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn preview_duration(&self) -> Duration {
        Duration::from_millis(self.preview_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ThemeConfig::default();
        assert_eq!(config.storage_key, "swagger-theme");
        assert_eq!(config.stylesheet_base, "./themes");
        assert_eq!(config.transition_delay(), Duration::from_millis(300));
        assert_eq!(config.preview_duration(), Duration::from_millis(2000));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_empty_object_is_default() {
        let config = ThemeConfig::from_json("{}").unwrap();
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = ThemeConfig::from_json(r#"{"dark_theme": "dracula", "preview_ms": 500}"#)
            .unwrap();
        assert_eq!(config.dark_theme, "dracula");
        assert_eq!(config.preview_duration(), Duration::from_millis(500));
        assert_eq!(config.light_theme, "classic");
    }

    #[test]
    fn test_from_json_malformed() {
        let err = ThemeConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_json_rejects_empty_key() {
        let err = ThemeConfig::from_json(r#"{"storage_key": "  "}"#).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "storage_key",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_colliding_shortcuts() {
        let err = ThemeConfig::from_json(r#"{"cycle_dark_key": "t"}"#).unwrap_err();
        assert!(err.to_string().contains("cycle_all_key"));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"stylesheet_base": "/assets/themes"}}"#).unwrap();
        let config = ThemeConfig::from_path(file.path()).unwrap();
        assert_eq!(config.stylesheet_base, "/assets/themes");
    }

    #[test]
    fn test_from_path_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ThemeConfig::from_path(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
