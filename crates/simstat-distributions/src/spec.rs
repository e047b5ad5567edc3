//! Distribution specifications
//!
//! A [`DistributionSpec`] identifies a distribution family and its
//! parameters. Construction validates every parameter against its natural
//! domain, so a spec that exists is always usable. Specs are immutable
//! value types; the only things you can do with one are ask for its
//! analytic moments or build a sampler from it.

use crate::sampler::Sampler;
use serde::{Deserialize, Serialize};
use simstat_core::{Error, Result};

/// Analytic mean and variance of a distribution, where they exist
///
/// The Cauchy distribution (and Student's t with df <= 2) has no finite
/// variance; callers get [`Moments::Undefined`] and must decide for
/// themselves what to do about it. The engine never substitutes a default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Moments {
    /// Finite mean and variance
    Known { mean: f64, variance: f64 },
    /// No finite mean or variance exists for this family/parameterization
    Undefined,
}

impl Moments {
    /// Standard deviation, where the variance is defined
    pub fn std_dev(&self) -> Option<f64> {
        match self {
            Self::Known { variance, .. } => Some(variance.sqrt()),
            Self::Undefined => None,
        }
    }

    /// Mean, where it is defined
    pub fn mean(&self) -> Option<f64> {
        match self {
            Self::Known { mean, .. } => Some(*mean),
            Self::Undefined => None,
        }
    }
}

/// A distribution family plus its parameters
///
/// Closed set of families; adding one is a local, additive change here and
/// in [`Sampler`]. Use the validating constructors rather than building
/// variants directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DistributionSpec {
    /// Number of successes in `n` Bernoulli trials with success probability `p`
    Binomial { n: u64, p: f64 },
    /// Normal with the given mean and standard deviation
    Normal { mean: f64, std_dev: f64 },
    /// Cauchy with the given location and scale (no finite moments)
    Cauchy { location: f64, scale: f64 },
    /// Exponential with the given rate
    Exponential { rate: f64 },
    /// Continuous uniform on `[min, max)`
    Uniform { min: f64, max: f64 },
    /// Student's t with `df` degrees of freedom
    StudentsT { df: f64 },
}

impl DistributionSpec {
    /// Binomial(n, p); `n` must be positive and `p` in [0, 1]
    pub fn binomial(n: u64, p: f64) -> Result<Self> {
        if n == 0 {
            return Err(Error::non_positive("Binomial n", 0.0));
        }
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid_probability(p));
        }
        Ok(Self::Binomial { n, p })
    }

    /// Normal(mean, std_dev); standard deviation must be positive and finite
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "Normal mean must be finite, got {mean}"
            )));
        }
        if !(std_dev > 0.0 && std_dev.is_finite()) {
            return Err(Error::non_positive("Normal std_dev", std_dev));
        }
        Ok(Self::Normal { mean, std_dev })
    }

    /// Cauchy(location, scale); scale must be positive and finite
    pub fn cauchy(location: f64, scale: f64) -> Result<Self> {
        if !location.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "Cauchy location must be finite, got {location}"
            )));
        }
        if !(scale > 0.0 && scale.is_finite()) {
            return Err(Error::non_positive("Cauchy scale", scale));
        }
        Ok(Self::Cauchy { location, scale })
    }

    /// Exponential(rate); rate must be positive and finite
    pub fn exponential(rate: f64) -> Result<Self> {
        if !(rate > 0.0 && rate.is_finite()) {
            return Err(Error::non_positive("Exponential rate", rate));
        }
        Ok(Self::Exponential { rate })
    }

    /// Uniform on [min, max); requires `min < max`, both finite
    pub fn uniform(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "Uniform bounds must be finite, got [{min}, {max})"
            )));
        }
        if min >= max {
            return Err(Error::InvalidParameter(format!(
                "Uniform requires min < max, got [{min}, {max})"
            )));
        }
        Ok(Self::Uniform { min, max })
    }

    /// Student's t with `df` degrees of freedom; `df` must be positive and finite
    pub fn students_t(df: f64) -> Result<Self> {
        if !(df > 0.0 && df.is_finite()) {
            return Err(Error::non_positive("Student-t df", df));
        }
        Ok(Self::StudentsT { df })
    }

    /// Analytic mean and variance of this distribution
    ///
    /// Returns [`Moments::Undefined`] where no finite variance exists
    /// (Cauchy at any parameterization, Student's t with df <= 2).
    pub fn moments(&self) -> Moments {
        match *self {
            Self::Binomial { n, p } => Moments::Known {
                mean: n as f64 * p,
                variance: n as f64 * p * (1.0 - p),
            },
            Self::Normal { mean, std_dev } => Moments::Known {
                mean,
                variance: std_dev * std_dev,
            },
            Self::Cauchy { .. } => Moments::Undefined,
            Self::Exponential { rate } => Moments::Known {
                mean: 1.0 / rate,
                variance: 1.0 / (rate * rate),
            },
            Self::Uniform { min, max } => {
                let width = max - min;
                Moments::Known {
                    mean: (min + max) / 2.0,
                    variance: width * width / 12.0,
                }
            }
            Self::StudentsT { df } => {
                if df > 2.0 {
                    Moments::Known {
                        mean: 0.0,
                        variance: df / (df - 2.0),
                    }
                } else {
                    Moments::Undefined
                }
            }
        }
    }

    /// The `n * p * q` normal-approximation heuristic value, binomial only
    ///
    /// Exposed so a consumer can apply whatever `npq > 5`-style rule of
    /// thumb it prefers; nothing here enforces a threshold.
    pub fn npq(&self) -> Option<f64> {
        match *self {
            Self::Binomial { n, p } => Some(n as f64 * p * (1.0 - p)),
            _ => None,
        }
    }

    /// Build a sampler for this specification
    pub fn sampler(&self) -> Result<Sampler> {
        Sampler::new(*self)
    }
}
