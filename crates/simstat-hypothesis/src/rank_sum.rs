//! Mann-Whitney rank-sum test for two independent samples
//!
//! Nonparametric counterpart of the two-sample t test: ranks the pooled
//! observations (mid-ranks for ties) and compares the rank sum of the
//! first group against its null expectation. The p-value uses the normal
//! approximation with tie-corrected variance.

use crate::types::{check_alpha, normal_two_sided_p, TestOutcome};
use simstat_core::{ranks, Error, Result};

/// Mann-Whitney U test of the null "equal location"
///
/// The statistic is `U` for the first group: the number of (a, b) pairs
/// with `a > b`, counting ties as half.
pub fn rank_sum_test(a: &[f64], b: &[f64], alpha: f64) -> Result<TestOutcome> {
    check_alpha(alpha)?;
    if a.is_empty() || b.is_empty() {
        return Err(Error::empty_input("rank-sum test"));
    }

    // Pool both groups, tagging each value with its origin
    let mut pooled: Vec<(f64, bool)> = a
        .iter()
        .map(|&v| (v, true))
        .chain(b.iter().map(|&v| (v, false)))
        .collect();
    if pooled.iter().any(|(v, _)| v.is_nan()) {
        return Err(Error::Computation(
            "Cannot rank observations (NaN encountered)".to_string(),
        ));
    }
    // Safe: NaN excluded above
    pooled.sort_by(|x, y| x.0.partial_cmp(&y.0).unwrap());

    let values: Vec<f64> = pooled.iter().map(|(v, _)| *v).collect();
    let rank = ranks::midranks(&values);
    let r1: f64 = pooled
        .iter()
        .zip(&rank)
        .filter(|((_, from_a), _)| *from_a)
        .map(|(_, r)| r)
        .sum();

    let n1 = a.len() as f64;
    let n2 = b.len() as f64;
    let n = n1 + n2;
    let u = r1 - n1 * (n1 + 1.0) / 2.0;

    let mean_u = n1 * n2 / 2.0;
    let var_u = n1 * n2 / 12.0 * ((n + 1.0) - ranks::tie_correction(&values) / (n * (n - 1.0)));
    if var_u <= 0.0 {
        return Err(Error::Computation(
            "All pooled observations are tied".to_string(),
        ));
    }

    let z = (u - mean_u) / var_u.sqrt();
    let p = normal_two_sided_p(z)?;
    Ok(TestOutcome::at_level(u, p, alpha))
}
