//! Density functions the region shader evaluates.
//!
//! - [`DensityFunction`]: the capability the shader depends on
//! - [`Distribution`]: built-in continuous families with bound parameters
//! - [`DensitySpec`]: textual `family(name=value, ...)` specs resolved once
//! - [`FnDensity`]: any named closure

pub mod catalog;
pub mod distribution;
pub mod special;

pub use catalog::DensitySpec;
pub use distribution::Distribution;

/// A density evaluated over a batch of points.
///
/// Implementations must be deterministic and return exactly one value per
/// input. Non-finite values are treated as evaluation failures by the shader.
pub trait DensityFunction {
    fn evaluate(&self, xs: &[f64]) -> Vec<f64>;

    /// Human-readable name used in error messages and logs.
    fn describe(&self) -> String {
        "density".to_string()
    }
}

/// Adapts a scalar closure into a [`DensityFunction`].
///
/// ```
/// use densityshade::density::{DensityFunction, FnDensity};
/// let triangle = FnDensity::new("triangle", |x: f64| (1.0 - x.abs()).max(0.0));
/// assert_eq!(triangle.evaluate(&[0.0, 0.5, 2.0]), vec![1.0, 0.5, 0.0]);
/// ```
pub struct FnDensity<F> {
    name: String,
    f: F,
}

impl<F> FnDensity<F>
where
    F: Fn(f64) -> f64,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> DensityFunction for FnDensity<F>
where
    F: Fn(f64) -> f64,
{
    fn evaluate(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| (self.f)(x)).collect()
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}
