//! Boundary normalization: from `(a, b, type)` to the concrete region to fill.

use super::error::ShadeError;
use std::fmt;
use std::str::FromStr;

/// The domain the full curve is drawn over.
///
/// `from < to` is the caller's responsibility; the shader relies on it but
/// does not check it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub from: f64,
    pub to: f64,
}

impl Interval {
    pub fn new(from: f64, to: f64) -> Self {
        Self { from, to }
    }
}

/// Which part of the area under the curve gets shaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionType {
    /// Everything left of the cut point
    Lower,
    /// Everything right of the cut point
    Upper,
    /// Between the two cut points
    Middle,
    /// Both tails outside the two cut points
    Two,
}

impl RegionType {
    /// Middle and two-tailed regions need two distinct cut points.
    pub fn needs_both_bounds(self) -> bool {
        matches!(self, RegionType::Middle | RegionType::Two)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RegionType::Lower => "lower",
            RegionType::Upper => "upper",
            RegionType::Middle => "middle",
            RegionType::Two => "two",
        }
    }
}

impl fmt::Display for RegionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionType {
    type Err = ShadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lower" => Ok(RegionType::Lower),
            "upper" => Ok(RegionType::Upper),
            "middle" => Ok(RegionType::Middle),
            "two" => Ok(RegionType::Two),
            other => Err(ShadeError::InvalidArgument(format!(
                "unknown region type `{other}` (expected lower, upper, middle or two)"
            ))),
        }
    }
}

/// The caller's description of the region to shade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionRequest {
    pub a: Option<f64>,
    pub b: Option<f64>,
    pub kind: RegionType,
}

/// A normalized region, ready for polygon construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadeRegion {
    pub lo: f64,
    pub hi: f64,
    /// Two-tailed: the whole domain is shaded and `[lo, hi]` is painted over
    /// in the erase color.
    pub erase_middle: bool,
}

impl ShadeRegion {
    pub fn bounds(&self) -> (f64, f64) {
        (self.lo, self.hi)
    }
}

impl RegionRequest {
    pub fn new(a: Option<f64>, b: Option<f64>, kind: RegionType) -> Self {
        Self { a, b, kind }
    }

    pub fn lower(a: f64) -> Self {
        Self::new(Some(a), None, RegionType::Lower)
    }

    pub fn upper(b: f64) -> Self {
        Self::new(None, Some(b), RegionType::Upper)
    }

    pub fn middle(a: f64, b: f64) -> Self {
        Self::new(Some(a), Some(b), RegionType::Middle)
    }

    pub fn two_tailed(a: f64, b: f64) -> Self {
        Self::new(Some(a), Some(b), RegionType::Two)
    }

    /// Resolves the request against the curve's domain.
    ///
    /// Order of operations matters for which error fires: boundaries are
    /// ordered and `a` defaulted from `b` first, then the two-boundary check
    /// runs, then the type-specific expansion.
    ///
    /// # Errors
    /// `InvalidArgument` when no boundary is given, when a boundary is not
    /// finite, or when a middle/two-tailed region lacks two distinct
    /// boundaries.
    pub fn normalize(&self, domain: Interval) -> Result<ShadeRegion, ShadeError> {
        if [self.a, self.b].iter().flatten().any(|v| !v.is_finite()) {
            return Err(ShadeError::InvalidArgument(
                "boundaries `a` and `b` must be finite".to_string(),
            ));
        }

        let (a, b) = match (self.a, self.b) {
            (None, None) => {
                return Err(ShadeError::InvalidArgument(
                    "at least one of `a` or `b` must be supplied".to_string(),
                ));
            }
            (Some(a), Some(b)) => (a.min(b), Some(a.max(b))),
            (None, Some(b)) => (b, Some(b)),
            (Some(a), None) => (a, None),
        };

        if self.kind.needs_both_bounds() && b.is_none_or(|b| b == a) {
            return Err(ShadeError::InvalidArgument(format!(
                "region type `{}` requires two distinct boundaries `a` and `b`",
                self.kind
            )));
        }
        let b = b.unwrap_or(a);

        let region = match self.kind {
            RegionType::Lower => ShadeRegion {
                lo: domain.from,
                hi: a,
                erase_middle: false,
            },
            RegionType::Upper => ShadeRegion {
                lo: b,
                hi: domain.to,
                erase_middle: false,
            },
            RegionType::Middle => ShadeRegion {
                lo: a,
                hi: b,
                erase_middle: false,
            },
            RegionType::Two => ShadeRegion {
                lo: a,
                hi: b,
                erase_middle: true,
            },
        };

        if region.lo > region.hi {
            log::warn!(
                "Cut point lies outside [{}, {}]; the {} region is empty",
                domain.from,
                domain.to,
                self.kind
            );
        }
        log::debug!(
            "Normalized {} region (a={:?}, b={:?}) to [{}, {}]",
            self.kind,
            self.a,
            self.b,
            region.lo,
            region.hi
        );

        Ok(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: Interval = Interval {
        from: -3.0,
        to: 3.0,
    };

    #[test]
    fn parses_region_types() {
        assert_eq!("lower".parse::<RegionType>().unwrap(), RegionType::Lower);
        assert_eq!(" Two ".parse::<RegionType>().unwrap(), RegionType::Two);
        let err = "left".parse::<RegionType>().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn lower_with_only_b_uses_b_as_cut_point() {
        let request = RegionRequest::new(None, Some(-1.0), RegionType::Lower);
        assert_eq!(request.normalize(DOMAIN).unwrap().bounds(), (-3.0, -1.0));
    }

    #[test]
    fn upper_with_only_a_uses_a_as_cut_point() {
        let request = RegionRequest::new(Some(1.5), None, RegionType::Upper);
        assert_eq!(request.normalize(DOMAIN).unwrap().bounds(), (1.5, 3.0));
    }

    #[test]
    fn lower_with_both_bounds_takes_the_lesser() {
        let request = RegionRequest::new(Some(2.0), Some(-1.0), RegionType::Lower);
        assert_eq!(request.normalize(DOMAIN).unwrap().bounds(), (-3.0, -1.0));
    }

    #[test]
    fn upper_with_both_bounds_takes_the_greater() {
        let request = RegionRequest::new(Some(2.0), Some(-1.0), RegionType::Upper);
        assert_eq!(request.normalize(DOMAIN).unwrap().bounds(), (2.0, 3.0));
    }

    #[test]
    fn equal_bounds_are_rejected_for_middle() {
        let err = RegionRequest::middle(1.0, 1.0).normalize(DOMAIN).unwrap_err();
        assert!(err.to_string().contains("two distinct boundaries"));
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        let err = RegionRequest::lower(f64::NAN).normalize(DOMAIN).unwrap_err();
        assert!(err.is_invalid_argument());
        let err = RegionRequest::upper(f64::INFINITY)
            .normalize(DOMAIN)
            .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn only_two_sets_the_erase_flag() {
        assert!(
            RegionRequest::two_tailed(0.0, 1.0)
                .normalize(DOMAIN)
                .unwrap()
                .erase_middle
        );
        assert!(
            !RegionRequest::middle(0.0, 1.0)
                .normalize(DOMAIN)
                .unwrap()
                .erase_middle
        );
    }

    #[test]
    fn cut_point_left_of_domain_gives_inverted_lower_region() {
        let region = RegionRequest::lower(-5.0).normalize(DOMAIN).unwrap();
        assert_eq!(region.bounds(), (-3.0, -5.0));
    }
}
