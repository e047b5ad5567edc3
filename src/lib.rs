//! simstat: Monte Carlo engine for sampling-distribution and
//! hypothesis-test power experiments
//!
//! Draw repeated pseudo-random samples from a chosen distribution, reduce
//! each draw to a summary statistic or a pair of hypothesis-test outcomes,
//! and aggregate the trials into empirical distributions and rejection
//! rates. Built to let a user observe convergence under the Central Limit
//! Theorem (and its failure for the Cauchy), and to compare the power and
//! robustness of paired parametric vs. nonparametric tests on identical
//! draws.
//!
//! This crate re-exports the workspace members:
//!
//! - [`simstat_core`] — errors, slice math, mid-rank utilities
//! - [`simstat_distributions`] — distribution specs, moments, samplers
//! - [`simstat_hypothesis`] — t tests, signed-rank, rank-sum
//! - [`simstat_engine`] — configs, trial runner, aggregation
//!
//! # Example
//!
//! ```rust
//! use simstat::engine::{summarize, AggregateResult, PairedConfig, TestFamily, TrialRunner};
//!
//! // Null is true by construction: both rejection rates should sit near alpha
//! let config = PairedConfig {
//!     mu1: 0.0, sigma1: 1.0,
//!     mu2: 0.0, sigma2: 1.0,
//!     n: 30, alpha: 0.05, trials: 200,
//! };
//! let series = TrialRunner::with_seed(7).run_paired(&config).unwrap();
//! let summary = summarize(&series).unwrap();
//! assert!(summary.rate_for(TestFamily::StudentT).unwrap() < 0.2);
//! ```

pub use simstat_core as core;
pub use simstat_distributions as distributions;
pub use simstat_engine as engine;
pub use simstat_hypothesis as hypothesis;

// Flat re-exports of the types most consumers touch
pub use simstat_core::{Error, Result};
pub use simstat_distributions::{DistributionSpec, Moments, Sampler};
pub use simstat_engine::{
    summarize, AggregateResult, BinomialConfig, BinomialRun, CltConfig, CltRun, EstimateSummary,
    OutlierConfig, PairedConfig, RejectionSummary, TestFamily, TrialOutcome, TrialRunner,
    TrialSeries,
};
pub use simstat_hypothesis::{
    paired_t_test, rank_sum_test, signed_rank_test, two_sample_t_test, TestOutcome,
};
