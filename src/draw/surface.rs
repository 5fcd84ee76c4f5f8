//! The graphics surface seam and the small value types its primitives take.

use super::color::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors raised by a [`GraphicsSurface`] implementation.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("no plot window; draw a new-plot curve before overlays, fills or axes")]
    NoPlotWindow,

    #[error("unknown color '{0}'")]
    UnknownColor(String),

    #[error("surface is closed")]
    Closed,

    #[error("cairo error: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("failed to encode PNG: {0}")]
    Png(#[from] cairo::IoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Side of the plot region an axis is drawn on.
///
/// Sides are numbered clockwise from the bottom (`1` = below, `2` = left).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Bottom = 1,
    Left = 2,
}

impl AxisSide {
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, AxisSide::Bottom)
    }
}

/// Frame drawn around the plot region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum BoxStyle {
    /// All four sides
    #[default]
    Outline,
    /// Bottom and left sides only
    LShape,
}

impl fmt::Display for BoxStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoxStyle::Outline => write!(f, "o"),
            BoxStyle::LShape => write!(f, "l"),
        }
    }
}

/// Stroke settings for curve drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    /// Line width in device units
    pub width: f64,
}

/// Axis titles and main title drawn when a new plot is started.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotLabels {
    pub x_label: String,
    pub y_label: String,
    pub title: Option<String>,
}

impl Default for PlotLabels {
    fn default() -> Self {
        Self {
            x_label: "x".to_string(),
            y_label: "Density".to_string(),
            title: None,
        }
    }
}

/// How a curve relates to what is already on the surface.
#[derive(Debug, Clone, PartialEq)]
pub enum CurveMode {
    /// Start a fresh figure: clear, fit the plot window to the curve, draw the
    /// labels. Axes are not drawn.
    NewPlot(PlotLabels),
    /// Stroke on top of the current figure using the existing plot window.
    Overlay,
}

/// Drawing primitives the region shader needs from a rendering backend.
///
/// Coordinates are in data space; the surface owns the mapping to device space.
/// Calls arrive in layering order and must be drawn in that order.
pub trait GraphicsSurface {
    /// Stroke a sampled curve.
    fn draw_curve(
        &mut self,
        points: &[(f64, f64)],
        stroke: &Stroke,
        mode: &CurveMode,
    ) -> Result<(), SurfaceError>;

    /// Fill a closed polygon. `xs` and `ys` have equal length.
    fn fill_polygon(&mut self, xs: &[f64], ys: &[f64], color: Color) -> Result<(), SurfaceError>;

    /// Draw an axis line with ticks and tick labels.
    fn draw_axis(&mut self, side: AxisSide) -> Result<(), SurfaceError>;

    /// Draw the frame around the plot region.
    fn draw_box(&mut self, style: BoxStyle) -> Result<(), SurfaceError>;
}
