//! Trial outcomes and the series accumulated across a run

use simstat_hypothesis::TestOutcome;
use std::fmt;

/// Which test produced a recorded outcome
///
/// The paired demo records `StudentT` and `SignedRank` outcomes per trial;
/// the outlier demo records `StudentT` and `RankSum`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestFamily {
    /// Paired or two-sample t test
    StudentT,
    /// Wilcoxon signed-rank test
    SignedRank,
    /// Mann-Whitney rank-sum test
    RankSum,
}

impl TestFamily {
    pub fn name(&self) -> &'static str {
        match self {
            Self::StudentT => "t-test",
            Self::SignedRank => "signed-rank",
            Self::RankSum => "rank-sum",
        }
    }

    /// All families, in reporting order
    pub(crate) const ALL: [TestFamily; 3] = [Self::StudentT, Self::SignedRank, Self::RankSum];
}

impl fmt::Display for TestFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One recorded outcome of one trial
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrialOutcome {
    /// A scalar estimate (sample mean, binomial proportion)
    Estimate { value: f64 },
    /// A hypothesis-test outcome, tagged with the test that produced it
    Test {
        family: TestFamily,
        outcome: TestOutcome,
    },
}

/// Ordered record of trial outcomes from one run
///
/// Insertion order is generation order, but aggregation is
/// order-independent. A cancelled run yields a valid prefix with
/// `is_complete() == false`; any non-empty prefix is summarizable.
#[derive(Debug, Clone)]
pub struct TrialSeries {
    outcomes: Vec<TrialOutcome>,
    intended_trials: usize,
    completed_trials: usize,
}

impl TrialSeries {
    pub(crate) fn with_capacity(intended_trials: usize, outcomes_per_trial: usize) -> Self {
        Self {
            outcomes: Vec::with_capacity(intended_trials * outcomes_per_trial),
            intended_trials,
            completed_trials: 0,
        }
    }

    pub(crate) fn push(&mut self, outcome: TrialOutcome) {
        self.outcomes.push(outcome);
    }

    pub(crate) fn finish_trial(&mut self) {
        self.completed_trials += 1;
    }

    /// Recorded outcomes, in generation order
    pub fn outcomes(&self) -> &[TrialOutcome] {
        &self.outcomes
    }

    /// Trials the run was configured for
    pub fn intended_trials(&self) -> usize {
        self.intended_trials
    }

    /// Trials actually completed (smaller after a cancellation)
    pub fn completed_trials(&self) -> usize {
        self.completed_trials
    }

    /// Whether the run finished all configured trials
    pub fn is_complete(&self) -> bool {
        self.completed_trials == self.intended_trials
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Recorded estimate values, for consumers that want to histogram them
    pub fn estimates(&self) -> Vec<f64> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                TrialOutcome::Estimate { value } => Some(*value),
                TrialOutcome::Test { .. } => None,
            })
            .collect()
    }
}
