//! Polygon construction: piecewise-linear area under the density.

use super::error::ShadeError;
use super::region::{Interval, ShadeRegion};
use crate::density::DensityFunction;
use crate::util;

/// A closed polygon whose first and last vertices sit on the baseline `y = 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Polygon {
    /// Approximates the area under `density` between `lo` and `hi`.
    ///
    /// Samples `breaks + 1` evenly spaced points across `[lo, hi]` and wraps
    /// them with a baseline vertex at each end, giving `breaks + 3` vertices.
    /// Low break counts produce a visibly faceted outline.
    ///
    /// # Errors
    /// `InvalidArgument` for a zero break count, `DensityEvaluation` for any
    /// non-finite sample, `DensityShape` for a wrong-length result.
    pub fn under_curve<D>(density: &D, lo: f64, hi: f64, breaks: usize) -> Result<Self, ShadeError>
    where
        D: DensityFunction + ?Sized,
    {
        if breaks == 0 {
            return Err(ShadeError::InvalidArgument(
                "break count must be at least 1".to_string(),
            ));
        }

        let samples = sample(density, lo, hi, breaks)?;

        let mut xs = Vec::with_capacity(breaks + 3);
        let mut ys = Vec::with_capacity(breaks + 3);
        xs.push(lo);
        ys.push(0.0);
        for (x, y) in samples {
            xs.push(x);
            ys.push(y);
        }
        xs.push(hi);
        ys.push(0.0);

        Ok(Self { xs, ys })
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The `(lo, hi)` x-range the polygon was built over.
    pub fn bounds(&self) -> (f64, f64) {
        match (self.xs.first(), self.xs.last()) {
            (Some(&lo), Some(&hi)) => (lo, hi),
            _ => (f64::NAN, f64::NAN),
        }
    }

    /// True when the polygon spans no width and therefore encloses no area.
    pub fn is_degenerate(&self) -> bool {
        let (lo, hi) = self.bounds();
        lo == hi
    }
}

/// Evaluates `density` at `n + 1` evenly spaced points across `[lo, hi]`.
///
/// Shared by polygon construction and curve sampling so both reject the same
/// non-finite values.
pub(crate) fn sample<D>(density: &D, lo: f64, hi: f64, n: usize) -> Result<Vec<(f64, f64)>, ShadeError>
where
    D: DensityFunction + ?Sized,
{
    let xs = util::linspace(lo, hi, n);
    let ys = density.evaluate(&xs);

    if ys.len() != xs.len() {
        return Err(ShadeError::DensityShape {
            density: density.describe(),
            expected: xs.len(),
            actual: ys.len(),
        });
    }

    if let Some((&x, &value)) = xs.iter().zip(&ys).find(|(_, y)| !y.is_finite()) {
        return Err(ShadeError::DensityEvaluation {
            density: density.describe(),
            x,
            value,
        });
    }

    Ok(xs.into_iter().zip(ys).collect())
}

/// How a fill is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    /// The requested shade color
    Shade,
    /// The background color, painted over an earlier shade fill
    Erase,
}

/// A polygon and the paint it is filled with, in layering order.
#[derive(Debug, Clone, PartialEq)]
pub struct Fill {
    pub polygon: Polygon,
    pub paint: Paint,
}

/// Builds the fills that realize `region`, bottom layer first.
///
/// Two-tailed regions are drawn as the full domain in the shade color with the
/// middle painted over in the erase color, rather than as two disjoint tail
/// polygons. Every other region is a single shade fill.
pub fn build_fills<D>(
    density: &D,
    region: &ShadeRegion,
    domain: Interval,
    breaks: usize,
) -> Result<Vec<Fill>, ShadeError>
where
    D: DensityFunction + ?Sized,
{
    let middle_or_single = Polygon::under_curve(density, region.lo, region.hi, breaks)?;

    if !region.erase_middle {
        return Ok(vec![Fill {
            polygon: middle_or_single,
            paint: Paint::Shade,
        }]);
    }

    let full = Polygon::under_curve(density, domain.from, domain.to, breaks)?;
    Ok(vec![
        Fill {
            polygon: full,
            paint: Paint::Shade,
        },
        Fill {
            polygon: middle_or_single,
            paint: Paint::Erase,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::density::{Distribution, FnDensity};

    const NORMAL: Distribution = Distribution::Normal { mean: 0.0, sd: 1.0 };

    #[test]
    fn polygon_closes_on_the_baseline() {
        let polygon = Polygon::under_curve(&NORMAL, 0.0, 1.0, 10).unwrap();
        assert_eq!(polygon.len(), 13);
        assert_eq!(polygon.ys.len(), polygon.xs.len());
        assert_eq!(polygon.ys[0], 0.0);
        assert_eq!(polygon.ys[12], 0.0);
        assert_eq!(polygon.bounds(), (0.0, 1.0));
        // First sample sits directly above the leading baseline vertex
        assert_eq!(polygon.xs[1], 0.0);
        assert!((polygon.ys[1] - NORMAL.pdf(0.0)).abs() < 1e-15);
    }

    #[test]
    fn single_break_is_a_trapezoid() {
        let polygon = Polygon::under_curve(&NORMAL, -1.0, 1.0, 1).unwrap();
        assert_eq!(polygon.xs, vec![-1.0, -1.0, 1.0, 1.0]);
    }

    #[test]
    fn zero_breaks_are_rejected() {
        let err = Polygon::under_curve(&NORMAL, 0.0, 1.0, 0).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn non_finite_density_reports_the_sample() {
        let broken = FnDensity::new("spike", |x: f64| if x > 0.5 { f64::NAN } else { 1.0 });
        let err = Polygon::under_curve(&broken, 0.0, 1.0, 4).unwrap_err();
        match err {
            ShadeError::DensityEvaluation { density, x, value } => {
                assert_eq!(density, "spike");
                assert_eq!(x, 0.75);
                assert!(value.is_nan());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_length_density_is_rejected() {
        struct Truncating;
        impl DensityFunction for Truncating {
            fn evaluate(&self, xs: &[f64]) -> Vec<f64> {
                vec![0.0; xs.len() - 1]
            }
        }
        let err = Polygon::under_curve(&Truncating, 0.0, 1.0, 3).unwrap_err();
        assert!(matches!(
            err,
            ShadeError::DensityShape {
                expected: 4,
                actual: 3,
                ..
            }
        ));
    }

    #[test]
    fn two_tailed_fills_shade_then_erase() {
        let region = ShadeRegion {
            lo: 0.0,
            hi: 1.0,
            erase_middle: true,
        };
        let fills = build_fills(&NORMAL, &region, Interval::new(-3.0, 3.0), 20).unwrap();
        assert_eq!(fills.len(), 2);
        assert_eq!(fills[0].paint, Paint::Shade);
        assert_eq!(fills[0].polygon.bounds(), (-3.0, 3.0));
        assert_eq!(fills[1].paint, Paint::Erase);
        assert_eq!(fills[1].polygon.bounds(), (0.0, 1.0));
    }

    #[test]
    fn degenerate_region_has_zero_width() {
        let polygon = Polygon::under_curve(&NORMAL, -3.0, -3.0, 5).unwrap();
        assert!(polygon.is_degenerate());
        assert_eq!(polygon.len(), 8);
    }
}
