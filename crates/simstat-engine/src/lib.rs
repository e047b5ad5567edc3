//! Monte Carlo trial runner and aggregation
//!
//! The engine repeats {draw sample(s) -> reduce -> record} for a
//! configured number of independent trials and summarizes the recorded
//! outcomes into empirical quantities: mean and spread of an estimator's
//! sampling distribution, or rejection rates of paired parametric and
//! nonparametric tests run on the same draws.
//!
//! The contract is a pure function of configuration: validated config in,
//! [`TrialSeries`] plus [`AggregateResult`] out. The engine holds no
//! reference to any presentation layer; consumers histogram the raw series
//! or read the summary however they like.
//!
//! # Example
//!
//! ```rust
//! use simstat_engine::{summarize, AggregateResult, BinomialConfig, TrialRunner};
//!
//! let config = BinomialConfig { n: 100, p: 0.5, trials: 1000 };
//! let run = TrialRunner::with_seed(42).run_binomial(&config).unwrap();
//! match summarize(&run.series).unwrap() {
//!     AggregateResult::Estimates(s) => assert!((s.mean - 0.5).abs() < 0.01),
//!     _ => unreachable!(),
//! }
//! ```

mod aggregate;
mod config;
mod outcome;
mod runner;

pub use aggregate::{summarize, AggregateResult, EstimateSummary, RejectionSummary};
pub use config::{BinomialConfig, CltConfig, OutlierConfig, PairedConfig};
pub use outcome::{TestFamily, TrialOutcome, TrialSeries};
pub use runner::{BinomialRun, CltRun, TrialRunner};
