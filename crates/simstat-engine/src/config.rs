//! Per-demo configuration records
//!
//! One validated record per experiment. Validation runs before any
//! sampling begins and is the only place an `InvalidParameter` error can
//! originate; a run that has started cannot fail on its configuration.

use serde::{Deserialize, Serialize};
use simstat_core::{Error, Result};
use simstat_distributions::DistributionSpec;
use simstat_hypothesis::check_alpha;

fn check_positive_count(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(Error::non_positive(name, 0.0));
    }
    Ok(())
}

fn check_positive_scale(name: &str, value: f64) -> Result<()> {
    if !(value > 0.0 && value.is_finite()) {
        return Err(Error::non_positive(name, value));
    }
    Ok(())
}

/// Binomial proportion experiment: per trial, one Binomial(n, p) draw
/// reduced to the proportion of successes
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BinomialConfig {
    /// Bernoulli draws per trial
    pub n: u64,
    /// Success probability
    pub p: f64,
    /// Number of independent trials
    pub trials: usize,
}

impl BinomialConfig {
    pub fn validate(&self) -> Result<()> {
        if self.n == 0 {
            return Err(Error::non_positive("n", 0.0));
        }
        if !(0.0..=1.0).contains(&self.p) {
            return Err(Error::invalid_probability(self.p));
        }
        check_positive_count("trials", self.trials)
    }
}

/// Sampling-distribution experiment: per trial, an inner sample reduced to
/// its arithmetic mean
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CltConfig {
    /// Source distribution of the inner samples
    pub distribution: DistributionSpec,
    /// Observations per inner sample
    pub inner_n: usize,
    /// Number of independent trials (outer repetitions)
    pub outer_trials: usize,
}

impl CltConfig {
    pub fn validate(&self) -> Result<()> {
        check_positive_count("inner_n", self.inner_n)?;
        check_positive_count("outer_trials", self.outer_trials)
    }
}

/// Paired-test experiment: per trial, n pairs (X, Y) drawn from two normal
/// models, with the paired t and signed-rank tests applied to the same pair
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PairedConfig {
    /// Mean of the X observations
    pub mu1: f64,
    /// Standard deviation of the X observations
    pub sigma1: f64,
    /// Mean of the Y observations
    pub mu2: f64,
    /// Standard deviation of the Y observations
    pub sigma2: f64,
    /// Pairs per trial
    pub n: usize,
    /// Significance level for both tests
    pub alpha: f64,
    /// Number of independent trials
    pub trials: usize,
}

impl PairedConfig {
    pub fn validate(&self) -> Result<()> {
        check_positive_scale("sigma1", self.sigma1)?;
        check_positive_scale("sigma2", self.sigma2)?;
        if self.n < 2 {
            return Err(Error::InvalidParameter(format!(
                "Paired tests need at least 2 pairs, got {}",
                self.n
            )));
        }
        check_alpha(self.alpha)?;
        check_positive_count("trials", self.trials)
    }
}

/// Outlier-contamination experiment: per trial, two groups from the same
/// normal model, with `n3` contaminating draws appended to group 2, and
/// the two-sample t and rank-sum tests applied to the same groups
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OutlierConfig {
    /// Group 1 size
    pub n1: usize,
    /// Group 2 size before contamination
    pub n2: usize,
    /// Contaminating observations appended to group 2 (0 = true-null baseline)
    pub n3: usize,
    /// Mean of the base model
    pub mu: f64,
    /// Standard deviation of the base model
    pub sigma: f64,
    /// Mean of the contaminating model
    pub outlier_mu: f64,
    /// Standard deviation of the contaminating model
    pub outlier_sigma: f64,
    /// Significance level for both tests
    pub alpha: f64,
    /// Number of independent trials
    pub trials: usize,
}

impl OutlierConfig {
    pub fn validate(&self) -> Result<()> {
        if self.n1 < 2 || self.n2 < 2 {
            return Err(Error::InvalidParameter(format!(
                "Both groups need at least 2 observations, got n1={}, n2={}",
                self.n1, self.n2
            )));
        }
        check_positive_scale("sigma", self.sigma)?;
        if self.n3 > 0 {
            check_positive_scale("outlier_sigma", self.outlier_sigma)?;
        }
        check_alpha(self.alpha)?;
        check_positive_count("trials", self.trials)
    }
}
