//! Region shading under a density curve.
//!
//! The pipeline is:
//! - [`RegionRequest::normalize`]: turn `(a, b, type)` into a concrete region
//! - [`build_fills`]: approximate the area under the curve with polygons
//! - [`DrawPlan`]: order the curve, fills, re-stroke, axes and box
//!
//! [`shade_region`] runs all three against a [`GraphicsSurface`].

pub mod error;
pub mod options;
pub mod plan;
pub mod polygon;
pub mod region;

pub use error::ShadeError;
pub use options::ShadeOptions;
pub use plan::{DrawOp, DrawPlan};
pub use polygon::{Fill, Paint, Polygon, build_fills};
pub use region::{Interval, RegionRequest, RegionType, ShadeRegion};

use crate::density::DensityFunction;
use crate::draw::GraphicsSurface;

/// Draws `density` over `domain` on `surface` and shades the requested region.
///
/// # Errors
/// - [`ShadeError::InvalidArgument`] before anything is drawn
/// - [`ShadeError::DensityEvaluation`] if the density is not finite somewhere
///   it is sampled
/// - [`ShadeError::Surface`] from the first failing surface call
pub fn shade_region<D, S>(
    density: &D,
    request: &RegionRequest,
    domain: Interval,
    options: &ShadeOptions,
    surface: &mut S,
) -> Result<ShadeRegion, ShadeError>
where
    D: DensityFunction + ?Sized,
    S: GraphicsSurface + ?Sized,
{
    let plan = DrawPlan::build(density, request, domain, options)?;
    plan.execute(surface)?;
    Ok(*plan.region())
}
