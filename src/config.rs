use crate::pudelko::{Pudelko, UnitOfMeasure};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Box list read by the `sort` command.
///
/// ```toml
/// [display]
/// unit = "cm"
///
/// [[box]]
/// a = 1
/// b = 2
/// c = 3
///
/// [[box]]
/// a = 250
/// unit = "mm"
/// ```
///
/// A `box` entry may also be the text form: `box = ["1 m × 2 m × 3 m"]`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default, rename = "box")]
    pub boxes: Vec<Pudelko>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    // Unit boxes are printed in
    #[serde(default)]
    pub unit: UnitOfMeasure,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unit: UnitOfMeasure::Meter,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("loading box list from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        log::debug!("loaded {} boxes", config.boxes.len());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_mixed_definitions() {
        let config = Config::load_from_str(
            r#"
[display]
unit = "cm"

[[box]]
a = 1
b = 2
c = 3

[[box]]
a = 250
unit = "millimeter"

[[box]]
a = 5.43
b = 4.32
c = 1.43
unit = "m"
"#,
        )
        .unwrap();

        assert_eq!(config.display.unit, UnitOfMeasure::Centimeter);
        assert_eq!(config.boxes.len(), 3);
        assert_eq!(config.boxes[0].to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(config.boxes[1].to_array(), [0.25, 0.1, 0.1]);
        assert_eq!(config.boxes[1].unit(), UnitOfMeasure::Millimeter);
    }

    #[test]
    fn test_load_text_definitions() {
        let config = Config::load_from_str(r#"box = ["1 m × 2 m × 3 m", "10 cm × 10 cm × 10 cm"]"#)
            .unwrap();
        assert_eq!(config.display.unit, UnitOfMeasure::Meter);
        assert_eq!(config.boxes[0], Pudelko::new(3.0, 2.0, 1.0, UnitOfMeasure::Meter).unwrap());
        assert_eq!(config.boxes[1], Pudelko::default());
    }

    #[test]
    fn test_invalid_box_fails() {
        let result = Config::load_from_str(
            r#"
[[box]]
a = 12
"#,
        );
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_misspelled_edges_fail() {
        let result = Config::load_from_str(
            r#"
[[box]]
width = 3
"#,
        );
        assert!(matches!(result, Err(ConfigError::Toml(_))));

        let result = Config::load_from_str("[[box]]\nA = 5\nB = 4\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_invalid_unit_fails() {
        let result = Config::load_from_str(
            r#"
[display]
unit = "furlong"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty() {
        let config = Config::load_from_str("").unwrap();
        assert!(config.boxes.is_empty());
        assert_eq!(config.display.unit, UnitOfMeasure::Meter);
    }

    #[test]
    fn test_missing_file() {
        let result = Config::load_from_file("/nonexistent/boxes.toml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
