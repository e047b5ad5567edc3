//! Sequential trial runner
//!
//! Executes the configured number of independent trials, each performing
//! its own draw(s) and reduction. The only mutable state shared between
//! trials is the runner's own generator stream, so trial `i` never depends
//! on trial `j`. Any future parallel execution must give each worker its
//! own seeded generator to keep that independence.

use crate::config::{BinomialConfig, CltConfig, OutlierConfig, PairedConfig};
use crate::outcome::{TestFamily, TrialOutcome, TrialSeries};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use simstat_core::{utils, Result};
use simstat_distributions::{DistributionSpec, Moments};
use simstat_hypothesis::{paired_t_test, rank_sum_test, signed_rank_test, two_sample_t_test};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Result of a binomial proportion run
///
/// Carries the `n * p * q` heuristic value and the exact moments of the
/// proportion estimator alongside the series, so a consumer can judge the
/// normal approximation and draw the theoretical overlay.
#[derive(Debug, Clone)]
pub struct BinomialRun {
    pub series: TrialSeries,
    /// `n * p * (1 - p)` for the configured model
    pub npq: f64,
    /// Exact mean and variance of the proportion `successes / n`
    pub estimate_moments: Moments,
}

/// Result of a sampling-distribution run
#[derive(Debug, Clone)]
pub struct CltRun {
    pub series: TrialSeries,
    /// Analytic moments of the source distribution, `Undefined` where no
    /// finite variance exists (the Cauchy non-convergence case)
    pub source_moments: Moments,
}

/// Sequential Monte Carlo trial runner
///
/// Owns a seeded ChaCha stream; `with_seed` makes whole runs reproducible.
/// A cooperative cancel flag is polled between trials, and a cancelled run
/// returns the completed prefix of its series.
#[derive(Debug)]
pub struct TrialRunner {
    rng: ChaCha8Rng,
    cancel: Option<Arc<AtomicBool>>,
}

impl TrialRunner {
    /// Create a runner with an entropy-seeded generator
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
            cancel: None,
        }
    }

    /// Create a runner with a fixed seed for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            cancel: None,
        }
    }

    /// Install a cooperative cancel flag, polled between trials
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map(|f| f.load(Ordering::Relaxed))
            .unwrap_or(false)
    }

    /// Binomial proportion demo: per trial one Binomial(n, p) variate
    /// reduced to `successes / n`
    pub fn run_binomial(&mut self, config: &BinomialConfig) -> Result<BinomialRun> {
        config.validate()?;
        let spec = DistributionSpec::binomial(config.n, config.p)?;
        let sampler = spec.sampler()?;
        debug!(trials = config.trials, n = config.n, p = config.p, "running binomial trials");

        let mut series = TrialSeries::with_capacity(config.trials, 1);
        for _ in 0..config.trials {
            if self.cancelled() {
                debug!(completed = series.completed_trials(), "binomial run cancelled");
                break;
            }
            let successes = sampler.draw_one(&mut self.rng);
            series.push(TrialOutcome::Estimate {
                value: successes / config.n as f64,
            });
            series.finish_trial();
        }

        let q = 1.0 - config.p;
        Ok(BinomialRun {
            series,
            npq: config.n as f64 * config.p * q,
            estimate_moments: Moments::Known {
                mean: config.p,
                variance: config.p * q / config.n as f64,
            },
        })
    }

    /// Sampling-distribution demo: per trial an inner sample of `inner_n`
    /// variates reduced to its mean
    pub fn run_clt(&mut self, config: &CltConfig) -> Result<CltRun> {
        config.validate()?;
        let sampler = config.distribution.sampler()?;
        debug!(
            trials = config.outer_trials,
            inner_n = config.inner_n,
            "running sampling-distribution trials"
        );

        let mut series = TrialSeries::with_capacity(config.outer_trials, 1);
        for _ in 0..config.outer_trials {
            if self.cancelled() {
                debug!(completed = series.completed_trials(), "run cancelled");
                break;
            }
            let sample = sampler.draw(&mut self.rng, config.inner_n)?;
            series.push(TrialOutcome::Estimate {
                value: utils::mean(&sample),
            });
            series.finish_trial();
        }

        Ok(CltRun {
            series,
            source_moments: config.distribution.moments(),
        })
    }

    /// Paired-test demo: per trial one paired draw, with the paired t and
    /// signed-rank tests applied to the same pair
    pub fn run_paired(&mut self, config: &PairedConfig) -> Result<TrialSeries> {
        config.validate()?;
        let x_sampler = DistributionSpec::normal(config.mu1, config.sigma1)?.sampler()?;
        let y_sampler = DistributionSpec::normal(config.mu2, config.sigma2)?.sampler()?;
        debug!(trials = config.trials, n = config.n, "running paired-test trials");

        let mut series = TrialSeries::with_capacity(config.trials, 2);
        for _ in 0..config.trials {
            if self.cancelled() {
                debug!(completed = series.completed_trials(), "paired run cancelled");
                break;
            }
            let x = x_sampler.draw(&mut self.rng, config.n)?;
            let y = y_sampler.draw(&mut self.rng, config.n)?;
            // Both tests see the same draw so power comparisons line up
            let t = paired_t_test(&x, &y, config.alpha)?;
            let w = signed_rank_test(&x, &y, config.alpha)?;
            series.push(TrialOutcome::Test {
                family: TestFamily::StudentT,
                outcome: t,
            });
            series.push(TrialOutcome::Test {
                family: TestFamily::SignedRank,
                outcome: w,
            });
            series.finish_trial();
        }
        Ok(series)
    }

    /// Outlier demo: per trial two groups from the base model, `n3`
    /// contaminating draws appended to group 2, with the two-sample t and
    /// rank-sum tests applied to the same groups
    pub fn run_outlier(&mut self, config: &OutlierConfig) -> Result<TrialSeries> {
        config.validate()?;
        let base = DistributionSpec::normal(config.mu, config.sigma)?.sampler()?;
        let contaminant = if config.n3 > 0 {
            Some(DistributionSpec::normal(config.outlier_mu, config.outlier_sigma)?.sampler()?)
        } else {
            None
        };
        debug!(
            trials = config.trials,
            n1 = config.n1,
            n2 = config.n2,
            n3 = config.n3,
            "running outlier trials"
        );

        let mut series = TrialSeries::with_capacity(config.trials, 2);
        for _ in 0..config.trials {
            if self.cancelled() {
                debug!(completed = series.completed_trials(), "outlier run cancelled");
                break;
            }
            let group1 = base.draw(&mut self.rng, config.n1)?;
            let mut group2 = base.draw(&mut self.rng, config.n2)?;
            if let Some(contaminant) = &contaminant {
                group2.extend(contaminant.draw(&mut self.rng, config.n3)?);
            }
            let t = two_sample_t_test(&group1, &group2, config.alpha)?;
            let u = rank_sum_test(&group1, &group2, config.alpha)?;
            series.push(TrialOutcome::Test {
                family: TestFamily::StudentT,
                outcome: t,
            });
            series.push(TrialOutcome::Test {
                family: TestFamily::RankSum,
                outcome: u,
            });
            series.finish_trial();
        }
        Ok(series)
    }
}

impl Default for TrialRunner {
    fn default() -> Self {
        Self::new()
    }
}
