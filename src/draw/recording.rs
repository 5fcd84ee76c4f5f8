//! A surface that records calls instead of drawing them.

use super::color::Color;
use super::surface::{AxisSide, BoxStyle, CurveMode, GraphicsSurface, Stroke, SurfaceError};

/// A call received by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Curve {
        points: Vec<(f64, f64)>,
        stroke: Stroke,
        overlay: bool,
    },
    Fill {
        xs: Vec<f64>,
        ys: Vec<f64>,
        color: Color,
    },
    Axis(AxisSide),
    Box(BoxStyle),
}

impl SurfaceCall {
    /// Short tag for order assertions: `curve`, `restroke`, `fill`, `axis1`,
    /// `axis2` or `box`.
    pub fn tag(&self) -> String {
        match self {
            SurfaceCall::Curve { overlay: false, .. } => "curve".to_string(),
            SurfaceCall::Curve { overlay: true, .. } => "restroke".to_string(),
            SurfaceCall::Fill { .. } => "fill".to_string(),
            SurfaceCall::Axis(side) => format!("axis{}", side.number()),
            SurfaceCall::Box(_) => "box".to_string(),
        }
    }
}

/// Records every call in order. Optionally refuses calls past a limit, which
/// behaves like a surface that was closed mid-figure.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<SurfaceCall>,
    limit: Option<usize>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts `limit` calls, then fails every later one with
    /// [`SurfaceError::Closed`].
    pub fn closing_after(limit: usize) -> Self {
        Self {
            calls: Vec::new(),
            limit: Some(limit),
        }
    }

    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn tags(&self) -> Vec<String> {
        self.calls.iter().map(SurfaceCall::tag).collect()
    }

    /// Fill calls with their x-range and color, in order.
    pub fn fills(&self) -> Vec<((f64, f64), Color)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                SurfaceCall::Fill { xs, color, .. } => {
                    let lo = xs.first().copied().unwrap_or(f64::NAN);
                    let hi = xs.last().copied().unwrap_or(f64::NAN);
                    Some(((lo, hi), *color))
                }
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, call: SurfaceCall) -> Result<(), SurfaceError> {
        if self.limit.is_some_and(|limit| self.calls.len() >= limit) {
            return Err(SurfaceError::Closed);
        }
        self.calls.push(call);
        Ok(())
    }
}

impl GraphicsSurface for RecordingSurface {
    fn draw_curve(
        &mut self,
        points: &[(f64, f64)],
        stroke: &Stroke,
        mode: &CurveMode,
    ) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::Curve {
            points: points.to_vec(),
            stroke: *stroke,
            overlay: matches!(mode, CurveMode::Overlay),
        })
    }

    fn fill_polygon(&mut self, xs: &[f64], ys: &[f64], color: Color) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::Fill {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            color,
        })
    }

    fn draw_axis(&mut self, side: AxisSide) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::Axis(side))
    }

    fn draw_box(&mut self, style: BoxStyle) -> Result<(), SurfaceError> {
        self.record(SurfaceCall::Box(style))
    }
}
