//! Shade lower, upper, middle and two-tailed regions under density curves.
//!
//! The core entry point is [`shade::shade_region`], which draws a density over
//! an interval onto any [`draw::GraphicsSurface`] and fills the requested
//! region. Configuration, density parsing and output naming are exposed so the
//! command-line binary and other tools share the same code.

pub mod config;
pub mod density;
pub mod draw;
pub mod output;
pub mod shade;
pub mod util;

pub use config::Config;
pub use shade::{Interval, RegionRequest, RegionType, ShadeError, ShadeOptions, shade_region};
