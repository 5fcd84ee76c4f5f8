//! Configuration enum types.

use crate::draw::{Color, SurfaceError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - either a color name/hex string or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// shade_color = "skyblue"
///
/// # Hex color, optionally with alpha
/// shade_color = "#87ceeb80"
///
/// # Custom RGB color (0-255 per component)
/// shade_color = [255, 128, 0]  # Orange
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (skyblue, black, white, red, gray, ...) or `#RRGGBB[AA]`
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    pub fn named(name: &str) -> Self {
        ColorSpec::Name(name.to_string())
    }

    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Names and hex strings go through [`Color::parse`]. RGB arrays are
    /// converted from 0-255 range to 0.0-1.0 range with full opacity.
    ///
    /// # Errors
    /// [`SurfaceError::UnknownColor`] for a name or hex string that does not
    /// parse.
    pub fn to_color(&self) -> Result<Color, SurfaceError> {
        match self {
            ColorSpec::Name(name) => {
                Color::parse(name).ok_or_else(|| SurfaceError::UnknownColor(name.clone()))
            }
            ColorSpec::Rgb([r, g, b]) => Ok(Color::from_rgb8(*r, *g, *b)),
        }
    }
}
