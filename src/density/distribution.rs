//! Built-in continuous density families.

use super::DensityFunction;
use super::special::{ln_beta, ln_gamma};
use std::f64::consts::PI;
use std::fmt;

/// A continuous distribution with its parameters bound.
///
/// Parameter names are the conventional ones (`mean`, `sd`, `df`, `rate`, ...). Parameters outside a
/// family's support (for example a non-positive standard deviation) are not
/// rejected here: the density evaluates to NaN and the shader reports a
/// density evaluation error at the first sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    Normal { mean: f64, sd: f64 },
    StudentT { df: f64 },
    ChiSquared { df: f64 },
    Exponential { rate: f64 },
    Uniform { min: f64, max: f64 },
    FisherF { df1: f64, df2: f64 },
    Gamma { shape: f64, rate: f64 },
    Beta { shape1: f64, shape2: f64 },
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl Distribution {
    /// Short family identifier, as accepted by [`super::DensitySpec`].
    pub fn family(&self) -> &'static str {
        match self {
            Distribution::Normal { .. } => "normal",
            Distribution::StudentT { .. } => "t",
            Distribution::ChiSquared { .. } => "chisq",
            Distribution::Exponential { .. } => "exp",
            Distribution::Uniform { .. } => "unif",
            Distribution::FisherF { .. } => "f",
            Distribution::Gamma { .. } => "gamma",
            Distribution::Beta { .. } => "beta",
        }
    }

    /// Probability density at `x`. NaN when the parameters are invalid.
    pub fn pdf(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        match *self {
            Distribution::Normal { mean, sd } => {
                if !positive(sd) || !mean.is_finite() {
                    return f64::NAN;
                }
                let z = (x - mean) / sd;
                (-0.5 * z * z).exp() / (sd * (2.0 * PI).sqrt())
            }
            Distribution::StudentT { df } => {
                if !positive(df) {
                    return f64::NAN;
                }
                let ln_norm = ln_gamma((df + 1.0) / 2.0) - ln_gamma(df / 2.0) - 0.5 * (df * PI).ln();
                (ln_norm - (df + 1.0) / 2.0 * (x * x / df).ln_1p()).exp()
            }
            Distribution::ChiSquared { df } => {
                if !positive(df) {
                    return f64::NAN;
                }
                gamma_pdf(x, df / 2.0, 0.5)
            }
            Distribution::Exponential { rate } => {
                if !positive(rate) {
                    return f64::NAN;
                }
                if x < 0.0 { 0.0 } else { rate * (-rate * x).exp() }
            }
            Distribution::Uniform { min, max } => {
                if !(min.is_finite() && max.is_finite() && min < max) {
                    return f64::NAN;
                }
                if (min..=max).contains(&x) {
                    1.0 / (max - min)
                } else {
                    0.0
                }
            }
            Distribution::FisherF { df1, df2 } => {
                if !positive(df1) || !positive(df2) {
                    return f64::NAN;
                }
                f_pdf(x, df1, df2)
            }
            Distribution::Gamma { shape, rate } => {
                if !positive(shape) || !positive(rate) {
                    return f64::NAN;
                }
                gamma_pdf(x, shape, rate)
            }
            Distribution::Beta { shape1, shape2 } => {
                if !positive(shape1) || !positive(shape2) {
                    return f64::NAN;
                }
                beta_pdf(x, shape1, shape2)
            }
        }
    }
}

/// Density at a support edge where the exponent on `x` is `shape - 1`.
fn edge_density(shape: f64, value_at_one: f64) -> f64 {
    if shape < 1.0 {
        f64::INFINITY
    } else if shape == 1.0 {
        value_at_one
    } else {
        0.0
    }
}

fn gamma_pdf(x: f64, shape: f64, rate: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    if x == 0.0 {
        return edge_density(shape, rate);
    }
    (shape * rate.ln() + (shape - 1.0) * x.ln() - rate * x - ln_gamma(shape)).exp()
}

fn f_pdf(x: f64, df1: f64, df2: f64) -> f64 {
    if x < 0.0 {
        return 0.0;
    }
    if x == 0.0 {
        return edge_density(df1 / 2.0, 1.0);
    }
    let ln_num = 0.5 * (df1 * (df1 * x).ln() + df2 * df2.ln() - (df1 + df2) * (df1 * x + df2).ln());
    (ln_num - x.ln() - ln_beta(df1 / 2.0, df2 / 2.0)).exp()
}

fn beta_pdf(x: f64, a: f64, b: f64) -> f64 {
    if !(0.0..=1.0).contains(&x) {
        return 0.0;
    }
    if x == 0.0 {
        return edge_density(a, b);
    }
    if x == 1.0 {
        return edge_density(b, a);
    }
    ((a - 1.0) * x.ln() + (b - 1.0) * (-x).ln_1p() - ln_beta(a, b)).exp()
}

impl DensityFunction for Distribution {
    fn evaluate(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.pdf(x)).collect()
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distribution::Normal { mean, sd } => write!(f, "normal(mean={mean}, sd={sd})"),
            Distribution::StudentT { df } => write!(f, "t(df={df})"),
            Distribution::ChiSquared { df } => write!(f, "chisq(df={df})"),
            Distribution::Exponential { rate } => write!(f, "exp(rate={rate})"),
            Distribution::Uniform { min, max } => write!(f, "unif(min={min}, max={max})"),
            Distribution::FisherF { df1, df2 } => write!(f, "f(df1={df1}, df2={df2})"),
            Distribution::Gamma { shape, rate } => write!(f, "gamma(shape={shape}, rate={rate})"),
            Distribution::Beta { shape1, shape2 } => {
                write!(f, "beta(shape1={shape1}, shape2={shape2})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn standard_normal_peak_and_tail() {
        let normal = Distribution::Normal { mean: 0.0, sd: 1.0 };
        assert_close(normal.pdf(0.0), 0.398_942_280_401_432_7);
        assert_close(normal.pdf(1.0), 0.241_970_724_519_143_37);
        assert_close(normal.pdf(-1.0), normal.pdf(1.0));
    }

    #[test]
    fn invalid_parameters_yield_nan() {
        assert!(Distribution::Normal { mean: 0.0, sd: -1.0 }.pdf(0.0).is_nan());
        assert!(Distribution::StudentT { df: 0.0 }.pdf(0.0).is_nan());
        assert!(Distribution::Uniform { min: 1.0, max: 1.0 }.pdf(1.0).is_nan());
        assert!(Distribution::Exponential { rate: f64::NAN }.pdf(1.0).is_nan());
    }

    #[test]
    fn student_t_with_one_df_is_cauchy() {
        let t = Distribution::StudentT { df: 1.0 };
        assert_close(t.pdf(0.0), 1.0 / PI);
        assert_close(t.pdf(1.0), 1.0 / (2.0 * PI));
    }

    #[test]
    fn chi_squared_two_df_is_exponential() {
        let chisq = Distribution::ChiSquared { df: 2.0 };
        let exp = Distribution::Exponential { rate: 0.5 };
        for x in [0.0, 0.5, 1.0, 4.0] {
            assert_close(chisq.pdf(x), exp.pdf(x));
        }
        assert_eq!(chisq.pdf(-1.0), 0.0);
    }

    #[test]
    fn chi_squared_one_df_is_infinite_at_zero() {
        assert!(Distribution::ChiSquared { df: 1.0 }.pdf(0.0).is_infinite());
    }

    #[test]
    fn uniform_is_flat_inside_support() {
        let unif = Distribution::Uniform { min: 0.0, max: 4.0 };
        assert_close(unif.pdf(2.0), 0.25);
        assert_close(unif.pdf(4.0), 0.25);
        assert_eq!(unif.pdf(4.5), 0.0);
    }

    #[test]
    fn f_distribution_known_value() {
        // B(5/2, 5/2) = 3π/128, so the density at 1 is 4/(3π)
        let f = Distribution::FisherF { df1: 5.0, df2: 5.0 };
        assert_close(f.pdf(1.0), 4.0 / (3.0 * PI));
        assert_eq!(f.pdf(0.0), 0.0);
    }

    #[test]
    fn beta_two_two_is_parabola() {
        let beta = Distribution::Beta { shape1: 2.0, shape2: 2.0 };
        assert_close(beta.pdf(0.5), 1.5);
        assert_close(beta.pdf(0.25), 6.0 * 0.25 * 0.75);
        assert_eq!(beta.pdf(0.0), 0.0);
        assert_eq!(beta.pdf(1.2), 0.0);
    }

    #[test]
    fn gamma_shape_one_edge_equals_rate() {
        let gamma = Distribution::Gamma { shape: 1.0, rate: 3.0 };
        assert_close(gamma.pdf(0.0), 3.0);
        assert_close(gamma.pdf(1.0), 3.0 * (-3.0f64).exp());
    }

    #[test]
    fn evaluate_is_vectorized() {
        let normal = Distribution::Normal { mean: 0.0, sd: 1.0 };
        let ys = normal.evaluate(&[-1.0, 0.0, 1.0]);
        assert_eq!(ys.len(), 3);
        assert_close(ys[1], normal.pdf(0.0));
        assert_eq!(normal.describe(), "normal(mean=0, sd=1)");
    }
}
