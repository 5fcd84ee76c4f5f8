//! Error taxonomy for region shading.

use crate::draw::SurfaceError;
use thiserror::Error;

/// Errors that abort a shading call.
///
/// Argument errors are raised before anything is drawn. Density and surface
/// errors stop the draw sequence at the failing step.
#[derive(Debug, Error)]
pub enum ShadeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("density {density} evaluated to {value} at x = {x}")]
    DensityEvaluation { density: String, x: f64, value: f64 },

    #[error("density {density} returned {actual} values for {expected} points")]
    DensityShape {
        density: String,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl ShadeError {
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, ShadeError::InvalidArgument(_))
    }
}
