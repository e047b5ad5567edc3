//! Wilcoxon signed-rank test for paired samples
//!
//! Nonparametric counterpart of the paired t test: ranks the absolute
//! paired differences (mid-ranks for ties, zero differences excluded) and
//! sums the ranks of the positive differences. The p-value uses the
//! normal approximation with tie-corrected variance.

use crate::types::{check_alpha, normal_two_sided_p, TestOutcome};
use simstat_core::{ranks, Error, Result};

/// Wilcoxon signed-rank test of the null "median difference = 0"
///
/// The statistic is `W+`, the sum of ranks of positive differences. Zero
/// differences are dropped before ranking; if every difference is zero
/// there is nothing to rank and the test fails with a `Computation` error.
pub fn signed_rank_test(x: &[f64], y: &[f64], alpha: f64) -> Result<TestOutcome> {
    check_alpha(alpha)?;
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "signed-rank test"));
    }
    if x.is_empty() {
        return Err(Error::empty_input("signed-rank test"));
    }

    // Nonzero differences, sorted by magnitude for ranking
    let mut diffs: Vec<f64> = x
        .iter()
        .zip(y)
        .map(|(&a, &b)| a - b)
        .filter(|d| *d != 0.0)
        .collect();
    if diffs.iter().any(|d| d.is_nan()) {
        return Err(Error::Computation(
            "Cannot rank differences (NaN encountered)".to_string(),
        ));
    }
    if diffs.is_empty() {
        return Err(Error::Computation(
            "All paired differences are zero".to_string(),
        ));
    }
    // Safe: NaN excluded above
    diffs.sort_by(|a, b| a.abs().partial_cmp(&b.abs()).unwrap());

    let abs: Vec<f64> = diffs.iter().map(|d| d.abs()).collect();
    let rank = ranks::midranks(&abs);
    let w_plus: f64 = diffs
        .iter()
        .zip(&rank)
        .filter(|(d, _)| **d > 0.0)
        .map(|(_, r)| r)
        .sum();

    let n = diffs.len() as f64;
    let mean_w = n * (n + 1.0) / 4.0;
    let var_w = n * (n + 1.0) * (2.0 * n + 1.0) / 24.0 - ranks::tie_correction(&abs) / 48.0;
    let z = (w_plus - mean_w) / var_w.sqrt();
    let p = normal_two_sided_p(z)?;
    Ok(TestOutcome::at_level(w_plus, p, alpha))
}
