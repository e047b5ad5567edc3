//! Order-independent aggregation of a trial series

use crate::outcome::{TestFamily, TrialOutcome, TrialSeries};
use simstat_core::{utils, Error, Result};
use simstat_hypothesis::TestOutcome;

/// Empirical summary of an estimate series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimateSummary {
    /// Trials summarized
    pub trials: usize,
    /// Empirical mean of the recorded estimates
    pub mean: f64,
    /// Empirical sample standard deviation of the recorded estimates
    pub std_dev: f64,
}

/// Empirical rejection rate of one test family
///
/// An estimated type-I-error rate when the null is true by construction,
/// an estimated power when an effect or contamination is injected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RejectionSummary {
    pub family: TestFamily,
    /// Outcomes recorded for this family
    pub trials: usize,
    /// Outcomes that rejected the null
    pub rejections: usize,
    /// `rejections / trials`
    pub rate: f64,
}

/// Summary of a [`TrialSeries`]
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateResult {
    /// Mean and spread of an estimate series
    Estimates(EstimateSummary),
    /// Rejection rate per test family present in the series, in a fixed
    /// reporting order so paired families are directly comparable
    Rejections(Vec<RejectionSummary>),
}

impl AggregateResult {
    /// Rejection rate for one family, if this is a test summary containing it
    pub fn rate_for(&self, family: TestFamily) -> Option<f64> {
        match self {
            Self::Rejections(summaries) => summaries
                .iter()
                .find(|s| s.family == family)
                .map(|s| s.rate),
            Self::Estimates(_) => None,
        }
    }
}

/// Summarize a series into empirical quantities
///
/// Defined for any non-empty series, including the prefix left by a
/// cancelled run. Aggregation ignores outcome order.
pub fn summarize(series: &TrialSeries) -> Result<AggregateResult> {
    if series.is_empty() {
        return Err(Error::empty_input("summarize"));
    }

    let mut estimates = Vec::new();
    let mut tests: Vec<(TestFamily, TestOutcome)> = Vec::new();
    for outcome in series.outcomes() {
        match *outcome {
            TrialOutcome::Estimate { value } => estimates.push(value),
            TrialOutcome::Test { family, outcome } => tests.push((family, outcome)),
        }
    }

    match (estimates.is_empty(), tests.is_empty()) {
        (false, true) => Ok(AggregateResult::Estimates(EstimateSummary {
            trials: estimates.len(),
            mean: utils::mean(&estimates),
            std_dev: utils::std_dev(&estimates),
        })),
        (true, false) => {
            let mut summaries = Vec::new();
            for family in TestFamily::ALL {
                let total = tests.iter().filter(|(f, _)| *f == family).count();
                if total == 0 {
                    continue;
                }
                let rejections = tests
                    .iter()
                    .filter(|(f, o)| *f == family && o.reject)
                    .count();
                summaries.push(RejectionSummary {
                    family,
                    trials: total,
                    rejections,
                    rate: rejections as f64 / total as f64,
                });
            }
            Ok(AggregateResult::Rejections(summaries))
        }
        _ => Err(Error::InvalidInput(
            "Series mixes estimate and test outcomes".to_string(),
        )),
    }
}
