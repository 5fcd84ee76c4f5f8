//! Configuration file support for densityshade.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/densityshade/config.toml`. Settings include shading colors,
//! curve appearance, plot labels and image output.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{LabelConfig, OutputConfig, ShadingConfig};

use crate::draw::{Color, PlotLabels, SurfaceError};
use crate::shade::ShadeOptions;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [shading]
/// shade_color = "skyblue"
/// line_width = 3.0
/// break_count = 1000
///
/// [labels]
/// y_label = "Density"
/// box_style = "l-shape"
///
/// [output]
/// width = 800
/// height = 600
/// directory = "~/Pictures/densityshade"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Curve and fill appearance
    #[serde(default)]
    pub shading: ShadingConfig,

    /// Axis titles, main title and frame
    #[serde(default)]
    pub labels: LabelConfig,

    /// Image size, background and file naming
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is
    /// logged. Colors that do not parse fall back to their defaults. Loading
    /// runs this already; call it again after changing fields in code, such as
    /// command-line overrides.
    ///
    /// Validated ranges:
    /// - `line_width`: 0.5 - 20.0
    /// - `break_count`: 1 - 100000
    /// - `curve_samples`: 1 - 100000
    /// - `width`, `height`: 100 - 8192
    pub fn validate_and_clamp(&mut self) {
        // Line width: 0.5 - 20.0
        if !(0.5..=20.0).contains(&self.shading.line_width) {
            log::warn!(
                "Invalid line_width {:.1}, clamping to 0.5-20.0 range",
                self.shading.line_width
            );
            self.shading.line_width = if self.shading.line_width.is_nan() {
                0.5
            } else {
                self.shading.line_width.clamp(0.5, 20.0)
            };
        }

        // Break count: 1 - 100000
        if !(1..=100_000).contains(&self.shading.break_count) {
            log::warn!(
                "Invalid break_count {}, clamping to 1-100000 range",
                self.shading.break_count
            );
            self.shading.break_count = self.shading.break_count.clamp(1, 100_000);
        }

        // Curve samples: 1 - 100000
        if !(1..=100_000).contains(&self.shading.curve_samples) {
            log::warn!(
                "Invalid curve_samples {}, clamping to 1-100000 range",
                self.shading.curve_samples
            );
            self.shading.curve_samples = self.shading.curve_samples.clamp(1, 100_000);
        }

        // Image size: 100 - 8192
        if !(100..=8192).contains(&self.output.width) {
            log::warn!(
                "Invalid output width {}, clamping to 100-8192 range",
                self.output.width
            );
            self.output.width = self.output.width.clamp(100, 8192);
        }
        if !(100..=8192).contains(&self.output.height) {
            log::warn!(
                "Invalid output height {}, clamping to 100-8192 range",
                self.output.height
            );
            self.output.height = self.output.height.clamp(100, 8192);
        }

        // Colors must parse
        fallback_color(
            "shade_color",
            &mut self.shading.shade_color,
            types::default_shade_color,
        );
        fallback_color(
            "line_color",
            &mut self.shading.line_color,
            types::default_line_color,
        );
        fallback_color(
            "background",
            &mut self.output.background,
            types::default_background,
        );
        if let Some(spec) = &self.shading.erase_color
            && spec.to_color().is_err()
        {
            log::warn!("Invalid erase_color {:?}, using the background color", spec);
            self.shading.erase_color = None;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/densityshade/config.toml`
    /// (`$XDG_CONFIG_HOME` is honored).
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("densityshade");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at `~/.config/densityshade/config.toml`.
    /// If the file doesn't exist, returns a Config with default values. All loaded values
    /// are validated and clamped to acceptable ranges.
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

    /// Loads configuration from an explicit path, which must exist.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::parse(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    fn parse(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// JSON schema of the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Resolved background color of the output image.
    pub fn background(&self) -> Result<Color, SurfaceError> {
        self.output.background.to_color()
    }

    /// Builds the options for one shading call from this configuration.
    ///
    /// The erase color defaults to the background so the erased middle of a
    /// two-tailed region blends in.
    pub fn shade_options(&self) -> Result<ShadeOptions, SurfaceError> {
        let background = self.background()?;
        let erase_color = match &self.shading.erase_color {
            Some(spec) => spec.to_color()?,
            None => background,
        };

        Ok(ShadeOptions {
            shade_color: self.shading.shade_color.to_color()?,
            line_color: self.shading.line_color.to_color()?,
            line_width: self.shading.line_width,
            break_count: self.shading.break_count,
            erase_color,
            curve_samples: self.shading.curve_samples,
            labels: PlotLabels {
                x_label: self.labels.x_label.clone(),
                y_label: self.labels.y_label.clone(),
                title: self.labels.title.clone(),
            },
            box_style: self.labels.box_style,
        })
    }
}

fn fallback_color(field: &str, spec: &mut ColorSpec, default: fn() -> ColorSpec) {
    if spec.to_color().is_err() {
        let replacement = default();
        log::warn!(
            "Invalid {} {:?}, falling back to {:?}",
            field,
            spec,
            replacement
        );
        *spec = replacement;
    }
}
