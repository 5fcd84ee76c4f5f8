//! Textual density specifications and their resolution into [`Distribution`]s.

use super::distribution::Distribution;
use crate::shade::ShadeError;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// A density family identifier plus named parameters, e.g. `t(df=5)`.
///
/// Parsing only checks syntax. [`DensitySpec::resolve`] looks up the family,
/// applies defaults and rejects missing or unknown parameters, so the lookup by
/// name happens once rather than at every evaluation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DensitySpec {
    pub family: String,
    pub params: BTreeMap<String, f64>,
}

impl DensitySpec {
    pub fn new(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            params: BTreeMap::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: f64) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    /// Binds the parameters to a concrete [`Distribution`].
    ///
    /// # Errors
    /// `InvalidArgument` for an unknown family, a missing required parameter or
    /// a parameter the family does not take.
    pub fn resolve(&self) -> Result<Distribution, ShadeError> {
        let family = self.family.trim().to_lowercase();
        let mut params = Params::new(&family, &self.params);

        let distribution = match family.as_str() {
            "normal" | "norm" | "gaussian" => Distribution::Normal {
                mean: params.optional("mean", 0.0),
                sd: params.optional("sd", 1.0),
            },
            "t" | "student" | "student-t" => Distribution::StudentT {
                df: params.required("df")?,
            },
            "chisq" | "chi-squared" | "chisquared" => Distribution::ChiSquared {
                df: params.required("df")?,
            },
            "exp" | "exponential" => Distribution::Exponential {
                rate: params.optional("rate", 1.0),
            },
            "unif" | "uniform" => Distribution::Uniform {
                min: params.optional("min", 0.0),
                max: params.optional("max", 1.0),
            },
            "f" | "fisher" => Distribution::FisherF {
                df1: params.required("df1")?,
                df2: params.required("df2")?,
            },
            "gamma" => {
                let shape = params.required("shape")?;
                let rate = match (params.take("rate"), params.take("scale")) {
                    (Some(_), Some(_)) => {
                        return Err(ShadeError::InvalidArgument(
                            "density `gamma` takes either `rate` or `scale`, not both".to_string(),
                        ));
                    }
                    (Some(rate), None) => rate,
                    (None, Some(scale)) => 1.0 / scale,
                    (None, None) => 1.0,
                };
                Distribution::Gamma { shape, rate }
            }
            "beta" => Distribution::Beta {
                shape1: params.required("shape1")?,
                shape2: params.required("shape2")?,
            },
            _ => {
                return Err(ShadeError::InvalidArgument(format!(
                    "unknown density `{}`",
                    self.family
                )));
            }
        };

        params.finish()?;
        log::debug!("Resolved density spec {} to {}", self, distribution);
        Ok(distribution)
    }
}

/// Tracks which parameters a family consumed so leftovers can be reported.
struct Params<'a> {
    family: &'a str,
    values: &'a BTreeMap<String, f64>,
    used: BTreeSet<&'a str>,
}

impl<'a> Params<'a> {
    fn new(family: &'a str, values: &'a BTreeMap<String, f64>) -> Self {
        Self {
            family,
            values,
            used: BTreeSet::new(),
        }
    }

    fn take(&mut self, name: &'a str) -> Option<f64> {
        self.used.insert(name);
        self.values.get(name).copied()
    }

    fn optional(&mut self, name: &'a str, default: f64) -> f64 {
        self.take(name).unwrap_or(default)
    }

    fn required(&mut self, name: &'a str) -> Result<f64, ShadeError> {
        self.take(name).ok_or_else(|| {
            ShadeError::InvalidArgument(format!(
                "density `{}` requires parameter `{}`",
                self.family, name
            ))
        })
    }

    fn finish(self) -> Result<(), ShadeError> {
        match self
            .values
            .keys()
            .find(|name| !self.used.contains(name.as_str()))
        {
            Some(unknown) => Err(ShadeError::InvalidArgument(format!(
                "density `{}` has no parameter `{}`",
                self.family, unknown
            ))),
            None => Ok(()),
        }
    }
}

impl FromStr for DensitySpec {
    type Err = ShadeError;

    /// Parses `family` or `family(name=value, ...)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |why: &str| ShadeError::InvalidArgument(format!("density `{s}`: {why}"));
        let s_trimmed = s.trim();

        let (family, args) = match s_trimmed.split_once('(') {
            Some((family, rest)) => {
                let args = rest
                    .strip_suffix(')')
                    .ok_or_else(|| invalid("missing closing parenthesis"))?;
                (family.trim(), Some(args))
            }
            None => (s_trimmed, None),
        };

        if family.is_empty() {
            return Err(invalid("missing family name"));
        }

        let mut spec = DensitySpec::new(family);
        for pair in args.into_iter().flat_map(|args| args.split(',')) {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }
            let (name, value) = pair
                .split_once('=')
                .ok_or_else(|| invalid("parameters must be written as name=value"))?;
            let name = name.trim();
            let value: f64 = value
                .trim()
                .parse()
                .map_err(|_| invalid(&format!("parameter `{name}` is not a number")))?;
            if spec.params.insert(name.to_string(), value).is_some() {
                return Err(invalid(&format!("parameter `{name}` given twice")));
            }
        }

        Ok(spec)
    }
}

impl fmt::Display for DensitySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.family)?;
        for (i, (name, value)) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_family_uses_defaults() {
        let spec: DensitySpec = "normal".parse().unwrap();
        assert_eq!(
            spec.resolve().unwrap(),
            Distribution::Normal { mean: 0.0, sd: 1.0 }
        );
    }

    #[test]
    fn parses_parameters_with_whitespace() {
        let spec: DensitySpec = " normal( mean = 100 , sd=15 ) ".parse().unwrap();
        assert_eq!(spec.family, "normal");
        assert_eq!(spec.params.get("sd"), Some(&15.0));
        assert_eq!(
            spec.resolve().unwrap(),
            Distribution::Normal {
                mean: 100.0,
                sd: 15.0
            }
        );
    }

    #[test]
    fn aliases_resolve_to_the_same_family() {
        let a = DensitySpec::new("chisq").with_param("df", 3.0);
        let b = DensitySpec::new("Chi-Squared").with_param("df", 3.0);
        assert_eq!(a.resolve().unwrap(), b.resolve().unwrap());
    }

    #[test]
    fn missing_required_parameter_is_rejected() {
        let err = DensitySpec::new("t").resolve().unwrap_err();
        assert!(matches!(err, ShadeError::InvalidArgument(_)));
        assert!(err.to_string().contains("requires parameter `df`"));
    }

    #[test]
    fn unknown_parameter_is_rejected() {
        let err = "normal(mu=1)"
            .parse::<DensitySpec>()
            .unwrap()
            .resolve()
            .unwrap_err();
        assert!(err.to_string().contains("has no parameter `mu`"));
    }

    #[test]
    fn unknown_family_is_rejected() {
        let err = DensitySpec::new("poisson").resolve().unwrap_err();
        assert!(err.to_string().contains("unknown density `poisson`"));
    }

    #[test]
    fn gamma_accepts_scale_or_rate() {
        let by_scale = DensitySpec::new("gamma")
            .with_param("shape", 2.0)
            .with_param("scale", 0.5)
            .resolve()
            .unwrap();
        assert_eq!(
            by_scale,
            Distribution::Gamma {
                shape: 2.0,
                rate: 2.0
            }
        );

        let both = DensitySpec::new("gamma")
            .with_param("shape", 2.0)
            .with_param("scale", 0.5)
            .with_param("rate", 2.0)
            .resolve();
        assert!(both.is_err());
    }

    #[test]
    fn malformed_specs_fail_to_parse() {
        assert!("normal(sd=1".parse::<DensitySpec>().is_err());
        assert!("normal(sd)".parse::<DensitySpec>().is_err());
        assert!("normal(sd=abc)".parse::<DensitySpec>().is_err());
        assert!("t(df=1, df=2)".parse::<DensitySpec>().is_err());
        assert!("(df=1)".parse::<DensitySpec>().is_err());
    }

    #[test]
    fn display_round_trips_through_parse() {
        let spec = DensitySpec::new("f")
            .with_param("df1", 3.0)
            .with_param("df2", 12.0);
        assert_eq!(spec.to_string(), "f(df1=3, df2=12)");
        assert_eq!(spec.to_string().parse::<DensitySpec>().unwrap(), spec);
    }
}
