//! Drawing surfaces for shaded density figures.
//!
//! This module defines what the shader draws onto:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`GraphicsSurface`]: the four primitives a figure is made of
//! - [`CairoSurface`]: raster output via Cairo, exportable as PNG
//! - [`RecordingSurface`]: an in-memory log of calls, for inspection and tests

pub mod color;
pub mod raster;
pub mod recording;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use raster::{CairoSurface, PlotWindow};
pub use recording::{RecordingSurface, SurfaceCall};
pub use surface::{
    AxisSide, BoxStyle, CurveMode, GraphicsSurface, PlotLabels, Stroke, SurfaceError,
};

pub use color::{BLACK, SKYBLUE, WHITE};
