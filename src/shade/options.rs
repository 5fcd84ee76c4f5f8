//! Appearance and fidelity settings passed explicitly into every shading call.

use crate::draw::{BoxStyle, Color, PlotLabels, Stroke, color};

/// Settings for one shading call.
///
/// `Default` gives the conventional figure: sky-blue shading, a black curve
/// three units wide, 1000 breaks and a white erase color.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadeOptions {
    /// Fill color of the shaded region
    pub shade_color: Color,
    /// Curve color
    pub line_color: Color,
    /// Curve width
    pub line_width: f64,
    /// Intervals used to approximate each shaded polygon
    pub break_count: usize,
    /// Color painted over the middle of a two-tailed region; should match the
    /// plot background
    pub erase_color: Color,
    /// Intervals used to sample the curve itself
    pub curve_samples: usize,
    pub labels: PlotLabels,
    pub box_style: BoxStyle,
}

impl Default for ShadeOptions {
    fn default() -> Self {
        Self {
            shade_color: color::SKYBLUE,
            line_color: color::BLACK,
            line_width: 3.0,
            break_count: 1000,
            erase_color: color::WHITE,
            curve_samples: 100,
            labels: PlotLabels::default(),
            box_style: BoxStyle::default(),
        }
    }
}

impl ShadeOptions {
    pub fn stroke(&self) -> Stroke {
        Stroke {
            color: self.line_color,
            width: self.line_width,
        }
    }
}
