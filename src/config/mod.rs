//! Configuration file support for painter.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/painter/config.toml`. Settings include the startup shape type,
//! drawing style, canvas size for image export and where exported images go.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, DrawingConfig, OutputConfig};

use crate::draw::Color;
use crate::util;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_shape = "polygon"
/// stroke_color = "black"
/// fill_color = [255, 240, 200]
/// stroke_thickness = 2.0
///
/// [canvas]
/// width = 1024
/// height = 768
/// background_color = [1.0, 1.0, 1.0, 1.0]
///
/// [output]
/// save_directory = "~/Pictures/Painter"
/// filename_template = "painter_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Startup shape type and drawing style
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas size and background for image export
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Destination for exported images
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `stroke_thickness`: 1.0 - 20.0
    /// - `canvas.width` / `canvas.height`: 16 - 8192
    /// - `canvas.background_color` components: 0.0 - 1.0
    fn validate_and_clamp(&mut self) {
        // Thickness: 1.0 - 20.0
        if !(1.0..=20.0).contains(&self.drawing.stroke_thickness) {
            log::warn!(
                "Invalid stroke_thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.stroke_thickness
            );
            // NaN survives clamp(), so fall back to the default explicitly
            self.drawing.stroke_thickness = if self.drawing.stroke_thickness.is_nan() {
                1.0
            } else {
                self.drawing.stroke_thickness.clamp(1.0, 20.0)
            };
        }

        if !(16..=8192).contains(&self.canvas.width) {
            log::warn!(
                "Invalid canvas width {}, clamping to 16-8192 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(16, 8192);
        }

        if !(16..=8192).contains(&self.canvas.height) {
            log::warn!(
                "Invalid canvas height {}, clamping to 16-8192 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(16, 8192);
        }

        for (i, component) in self.canvas.background_color.iter_mut().enumerate() {
            if !(0.0..=1.0).contains(&*component) {
                log::warn!(
                    "Invalid background_color[{}] = {:.3}, clamping to 0.0-1.0",
                    i,
                    component
                );
                *component = if component.is_nan() {
                    1.0
                } else {
                    component.clamp(0.0, 1.0)
                };
            }
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/painter/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("painter");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(source)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Saves the current configuration to the default location.
    ///
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Serializes the config to TOML and writes it to `path`.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, config_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// JSON schema describing the config file, for editors and validators.
    pub fn schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Canvas background as a [`Color`].
    pub fn background(&self) -> Color {
        Color::from_rgba(self.canvas.background_color)
    }

    /// Builds a timestamped PNG path inside the configured output directory.
    pub fn default_output_path(&self) -> PathBuf {
        util::expand_tilde(&self.output.save_directory)
            .join(util::generate_filename(&self.output.filename_template, "png"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, ShapeType, WHITE};
    use tempfile::TempDir;

    #[test]
    fn empty_file_yields_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.drawing.default_shape, ShapeType::Line);
        assert_eq!(config.drawing.parameters().stroke, BLACK);
        assert_eq!(config.drawing.parameters().fill, WHITE);
        assert_eq!(config.drawing.stroke_thickness, 1.0);
        assert_eq!((config.canvas.width, config.canvas.height), (800, 600));
        assert_eq!(config.background(), WHITE);
    }

    #[test]
    fn parses_shapes_and_color_forms() {
        let config = Config::from_toml_str(
            r#"
            [drawing]
            default_shape = "pencil"
            stroke_color = "blue"
            fill_color = [255, 0, 0]
            stroke_thickness = 4.5
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.default_shape, ShapeType::Pencil);
        assert_eq!(config.drawing.stroke_color, ColorSpec::Name("blue".into()));
        assert_eq!(config.drawing.fill_color, ColorSpec::Rgb([255, 0, 0]));
        assert_eq!(config.drawing.parameters().stroke_thickness, 4.5);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config::from_toml_str(
            r#"
            [drawing]
            stroke_thickness = 99.0

            [canvas]
            width = 4
            height = 100000
            background_color = [1.5, -0.2, 0.5, 1.0]
            "#,
        )
        .unwrap();

        assert_eq!(config.drawing.stroke_thickness, 20.0);
        assert_eq!(config.canvas.width, 16);
        assert_eq!(config.canvas.height, 8192);
        assert_eq!(config.canvas.background_color, [1.0, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn unknown_shape_name_is_a_parse_error() {
        let err = Config::from_toml_str("[drawing]\ndefault_shape = \"star\"\n");
        assert!(err.is_err());
    }

    #[test]
    fn save_then_load_preserves_settings() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.drawing.default_shape = ShapeType::Ellipse;
        config.canvas.width = 320;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.drawing.default_shape, ShapeType::Ellipse);
        assert_eq!(loaded.canvas.width, 320);
    }

    #[test]
    fn load_from_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        assert!(Config::load_from(&temp.path().join("absent.toml")).is_err());
    }

    #[test]
    fn schema_mentions_every_section() {
        let schema = serde_json::to_string(&Config::schema()).unwrap();
        for section in ["drawing", "canvas", "output", "stroke_thickness"] {
            assert!(schema.contains(section), "schema lacks {section}");
        }
    }

    #[test]
    fn default_output_path_uses_template_and_png_extension() {
        let mut config = Config::default();
        config.output.save_directory = "/tmp/painter-out".into();
        config.output.filename_template = "shot".into();
        assert_eq!(
            config.default_output_path(),
            PathBuf::from("/tmp/painter-out/shot.png")
        );
    }
}
