//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::BoxStyle;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shading and curve appearance.
///
/// Controls how the density curve is stroked and how the region under it is
/// filled. Command-line flags override these values for a single run.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ShadingConfig {
    /// Fill color of the shaded region - a named color (skyblue, salmon, gray, ...),
    /// a `#RRGGBB` hex string or an RGB array like `[135, 206, 235]`
    #[serde(default = "default_shade_color")]
    pub shade_color: ColorSpec,

    /// Color of the density curve
    #[serde(default = "default_line_color")]
    pub line_color: ColorSpec,

    /// Color painted over the middle of a two-tailed region.
    /// Leave unset to use the output background color.
    #[serde(default)]
    pub erase_color: Option<ColorSpec>,

    /// Curve width in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Intervals used to approximate each shaded polygon (valid range: 1 - 100000)
    /// Low values give a visibly faceted outline
    #[serde(default = "default_break_count")]
    pub break_count: usize,

    /// Intervals used to sample the curve itself (valid range: 1 - 100000)
    #[serde(default = "default_curve_samples")]
    pub curve_samples: usize,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            shade_color: default_shade_color(),
            line_color: default_line_color(),
            erase_color: None,
            line_width: default_line_width(),
            break_count: default_break_count(),
            curve_samples: default_curve_samples(),
        }
    }
}

/// Axis titles, main title and plot frame.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct LabelConfig {
    /// Title under the horizontal axis
    #[serde(default = "default_x_label")]
    pub x_label: String,

    /// Title beside the vertical axis
    #[serde(default = "default_y_label")]
    pub y_label: String,

    /// Main title above the plot; omitted when unset
    #[serde(default)]
    pub title: Option<String>,

    /// Frame around the plot region (outline, l-shape)
    #[serde(default)]
    pub box_style: BoxStyle,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            x_label: default_x_label(),
            y_label: default_y_label(),
            title: None,
            box_style: BoxStyle::default(),
        }
    }
}

/// Image output settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Image width in pixels (valid range: 100 - 8192)
    #[serde(default = "default_width")]
    pub width: i32,

    /// Image height in pixels (valid range: 100 - 8192)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Background color painted before the curve is drawn
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Directory images are written to when no explicit output path is given.
    /// Supports `~/` expansion.
    #[serde(default = "default_directory")]
    pub directory: String,

    /// Filename template (chrono format specifiers), without extension
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
            directory: default_directory(),
            filename_template: default_filename_template(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

pub(super) fn default_shade_color() -> ColorSpec {
    ColorSpec::named("skyblue")
}

pub(super) fn default_line_color() -> ColorSpec {
    ColorSpec::named("black")
}

fn default_line_width() -> f64 {
    3.0
}

fn default_break_count() -> usize {
    1000
}

fn default_curve_samples() -> usize {
    100
}

fn default_x_label() -> String {
    "x".to_string()
}

fn default_y_label() -> String {
    "Density".to_string()
}

fn default_width() -> i32 {
    800
}

fn default_height() -> i32 {
    600
}

pub(super) fn default_background() -> ColorSpec {
    ColorSpec::named("white")
}

fn default_directory() -> String {
    "~/Pictures/densityshade".to_string()
}

fn default_filename_template() -> String {
    "density_%Y-%m-%d_%H%M%S".to_string()
}
