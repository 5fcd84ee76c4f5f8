//! The draw plan: every surface call of a shaded figure, in layering order.

use super::error::ShadeError;
use super::options::ShadeOptions;
use super::polygon::{self, Paint, Polygon};
use super::region::{Interval, RegionRequest, ShadeRegion};
use crate::density::DensityFunction;
use crate::draw::{AxisSide, BoxStyle, Color, CurveMode, GraphicsSurface, Stroke};
use std::fmt;

/// One surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Curve {
        points: Vec<(f64, f64)>,
        stroke: Stroke,
        mode: CurveMode,
    },
    Fill {
        polygon: Polygon,
        color: Color,
        paint: Paint,
    },
    Axis(AxisSide),
    Box(BoxStyle),
}

impl fmt::Display for DrawOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawOp::Curve { points, mode, .. } => {
                let (from, to) = match (points.first(), points.last()) {
                    (Some(first), Some(last)) => (first.0, last.0),
                    _ => (f64::NAN, f64::NAN),
                };
                let verb = match mode {
                    CurveMode::NewPlot(_) => "curve",
                    CurveMode::Overlay => "restroke",
                };
                write!(f, "{verb} [{from}, {to}] ({} points)", points.len())
            }
            DrawOp::Fill { polygon, paint, .. } => {
                let (lo, hi) = polygon.bounds();
                let verb = match paint {
                    Paint::Shade => "fill",
                    Paint::Erase => "erase",
                };
                write!(f, "{verb} [{lo}, {hi}] ({} vertices)", polygon.len())
            }
            DrawOp::Axis(side) => write!(f, "axis {}", side.number()),
            DrawOp::Box(style) => write!(f, "box {style}"),
        }
    }
}

/// A fully computed figure, independent of any surface.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawPlan {
    region: ShadeRegion,
    ops: Vec<DrawOp>,
}

impl DrawPlan {
    /// Computes every draw call for the request.
    ///
    /// Boundaries are normalized before the density is touched, so argument
    /// errors surface before any evaluation or drawing.
    pub fn build<D>(
        density: &D,
        request: &RegionRequest,
        domain: Interval,
        options: &ShadeOptions,
    ) -> Result<Self, ShadeError>
    where
        D: DensityFunction + ?Sized,
    {
        let region = request.normalize(domain)?;

        if options.curve_samples == 0 {
            return Err(ShadeError::InvalidArgument(
                "curve sample count must be at least 1".to_string(),
            ));
        }
        let curve = polygon::sample(density, domain.from, domain.to, options.curve_samples)?;
        let fills = polygon::build_fills(density, &region, domain, options.break_count)?;
        let stroke = options.stroke();

        let mut ops = Vec::with_capacity(fills.len() + 5);
        ops.push(DrawOp::Curve {
            points: curve.clone(),
            stroke,
            mode: CurveMode::NewPlot(options.labels.clone()),
        });
        for fill in fills {
            let color = match fill.paint {
                Paint::Shade => options.shade_color,
                Paint::Erase => options.erase_color,
            };
            ops.push(DrawOp::Fill {
                polygon: fill.polygon,
                color,
                paint: fill.paint,
            });
        }
        ops.push(DrawOp::Curve {
            points: curve,
            stroke,
            mode: CurveMode::Overlay,
        });
        ops.push(DrawOp::Axis(AxisSide::Bottom));
        ops.push(DrawOp::Axis(AxisSide::Left));
        ops.push(DrawOp::Box(options.box_style));

        log::debug!(
            "Built draw plan for {} over [{}, {}]: {} ops",
            density.describe(),
            domain.from,
            domain.to,
            ops.len()
        );

        Ok(Self { region, ops })
    }

    pub fn region(&self) -> &ShadeRegion {
        &self.region
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// The polygons filled, in order, with their paint.
    pub fn fills(&self) -> impl Iterator<Item = (&Polygon, Paint)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Fill { polygon, paint, .. } => Some((polygon, *paint)),
            _ => None,
        })
    }

    /// Issues every op against `surface`, stopping at the first error.
    ///
    /// Whatever was drawn before a failure stays on the surface.
    pub fn execute<S>(&self, surface: &mut S) -> Result<(), ShadeError>
    where
        S: GraphicsSurface + ?Sized,
    {
        for op in &self.ops {
            log::trace!("Executing {}", op);
            match op {
                DrawOp::Curve {
                    points,
                    stroke,
                    mode,
                } => surface.draw_curve(points, stroke, mode)?,
                DrawOp::Fill { polygon, color, .. } => {
                    surface.fill_polygon(&polygon.xs, &polygon.ys, *color)?
                }
                DrawOp::Axis(side) => surface.draw_axis(*side)?,
                DrawOp::Box(style) => surface.draw_box(*style)?,
            }
        }
        Ok(())
    }
}
