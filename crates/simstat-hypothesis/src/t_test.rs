//! Parametric t tests
//!
//! Both tests report a two-sided p-value from the exact Student-t
//! distribution of the statistic under the null, and both are pure
//! functions of their inputs.

use crate::types::{check_alpha, student_t_two_sided_p, TestOutcome};
use simstat_core::{utils, Error, Result};

/// Paired t test of the null "mean difference = 0"
///
/// `x` and `y` must have equal length (the pairs) and at least 2 pairs.
/// The statistic is `mean(d) / (sd(d) / sqrt(n))` on the differences
/// `d_i = x_i - y_i`, with `n - 1` degrees of freedom.
pub fn paired_t_test(x: &[f64], y: &[f64], alpha: f64) -> Result<TestOutcome> {
    check_alpha(alpha)?;
    if x.len() != y.len() {
        return Err(Error::size_mismatch(x.len(), y.len(), "paired t test"));
    }
    if x.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: x.len(),
        });
    }

    let diffs: Vec<f64> = x.iter().zip(y).map(|(&a, &b)| a - b).collect();
    let n = diffs.len() as f64;
    let mean_d = utils::mean(&diffs);
    let sd_d = utils::std_dev(&diffs);
    if sd_d == 0.0 {
        return Err(Error::Computation(
            "Paired differences have zero variance".to_string(),
        ));
    }

    let t = mean_d / (sd_d / n.sqrt());
    let p = student_t_two_sided_p(t, n - 1.0)?;
    Ok(TestOutcome::at_level(t, p, alpha))
}

/// Pooled-variance two-sample t test of the null "equal means"
///
/// Classical equal-variance Student t with `n1 + n2 - 2` degrees of
/// freedom; each group needs at least 2 observations.
pub fn two_sample_t_test(a: &[f64], b: &[f64], alpha: f64) -> Result<TestOutcome> {
    check_alpha(alpha)?;
    if a.len() < 2 || b.len() < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: a.len().min(b.len()),
        });
    }

    let n1 = a.len() as f64;
    let n2 = b.len() as f64;
    let pooled_variance = ((n1 - 1.0) * utils::sample_variance(a)
        + (n2 - 1.0) * utils::sample_variance(b))
        / (n1 + n2 - 2.0);
    if pooled_variance == 0.0 {
        return Err(Error::Computation(
            "Pooled variance is zero".to_string(),
        ));
    }

    let se = (pooled_variance * (1.0 / n1 + 1.0 / n2)).sqrt();
    let t = (utils::mean(a) - utils::mean(b)) / se;
    let p = student_t_two_sided_p(t, n1 + n2 - 2.0)?;
    Ok(TestOutcome::at_level(t, p, alpha))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_paired_t_reference() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 2.0, 2.0, 2.0, 2.0];
        let out = paired_t_test(&x, &y, 0.05).unwrap();
        assert_abs_diff_eq!(out.statistic, 1.414214, epsilon = 1e-5);
        assert_abs_diff_eq!(out.p_value, 0.2302, epsilon = 1e-3);
        assert!(!out.reject);
    }

    #[test]
    fn test_paired_t_detects_shift() {
        let x: Vec<f64> = (0..20).map(|i| i as f64 * 0.1).collect();
        let y: Vec<f64> = x.iter().map(|v| v + 3.0 + 0.01 * v).collect();
        let out = paired_t_test(&x, &y, 0.05).unwrap();
        assert!(out.reject);
        assert!(out.statistic < 0.0);
    }

    #[test]
    fn test_paired_t_errors() {
        assert!(paired_t_test(&[1.0, 2.0], &[1.0], 0.05).is_err());
        assert!(paired_t_test(&[1.0], &[2.0], 0.05).is_err());
        assert!(paired_t_test(&[1.0, 2.0], &[1.0, 2.0], 0.05).is_err()); // zero variance
        assert!(paired_t_test(&[1.0, 2.0], &[2.0, 1.0], 1.5).is_err()); // bad alpha
    }

    #[test]
    fn test_two_sample_t_reference() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [3.0, 4.0, 5.0, 6.0];
        let out = two_sample_t_test(&a, &b, 0.05).unwrap();
        assert_abs_diff_eq!(out.statistic, -2.190890, epsilon = 1e-5);
        assert_abs_diff_eq!(out.p_value, 0.0708, epsilon = 1e-3);
        assert!(!out.reject);
    }

    #[test]
    fn test_two_sample_t_symmetry() {
        let a = [1.0, 2.0, 3.0, 4.0, 7.0];
        let b = [2.0, 5.0, 6.0, 8.0];
        let ab = two_sample_t_test(&a, &b, 0.05).unwrap();
        let ba = two_sample_t_test(&b, &a, 0.05).unwrap();
        assert_abs_diff_eq!(ab.statistic, -ba.statistic, epsilon = 1e-12);
        assert_abs_diff_eq!(ab.p_value, ba.p_value, epsilon = 1e-12);
    }

    #[test]
    fn test_two_sample_t_errors() {
        assert!(two_sample_t_test(&[1.0], &[1.0, 2.0], 0.05).is_err());
        assert!(two_sample_t_test(&[2.0, 2.0], &[2.0, 2.0], 0.05).is_err()); // zero variance
    }
}
