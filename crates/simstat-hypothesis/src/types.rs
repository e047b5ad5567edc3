//! Test outcome type and shared p-value helpers

use simstat_core::{Error, Result};
use statrs::distribution::{ContinuousCDF, Normal, StudentsT};

/// Outcome of one hypothesis test at a fixed significance level
///
/// `reject == (p_value < alpha)` by construction: the only way to build an
/// outcome is [`TestOutcome::at_level`], which derives the decision from
/// the p-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestOutcome {
    /// Test statistic (t, W+, or U depending on the test)
    pub statistic: f64,
    /// Two-sided p-value in [0, 1]
    pub p_value: f64,
    /// Whether the null is rejected at the run's significance level
    pub reject: bool,
}

impl TestOutcome {
    /// Build an outcome, deriving the reject decision from `p_value < alpha`
    pub fn at_level(statistic: f64, p_value: f64, alpha: f64) -> Self {
        Self {
            statistic,
            p_value,
            reject: p_value < alpha,
        }
    }
}

/// Validate a significance level, which must lie strictly inside (0, 1)
pub fn check_alpha(alpha: f64) -> Result<()> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(Error::invalid_alpha(alpha))
    }
}

/// Two-sided p-value of a t statistic with `df` degrees of freedom
pub(crate) fn student_t_two_sided_p(t: f64, df: f64) -> Result<f64> {
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| Error::Computation(format!("Failed to create t-distribution: {e}")))?;
    Ok(2.0 * (1.0 - dist.cdf(t.abs())))
}

/// Two-sided p-value of a standard normal z statistic
pub(crate) fn normal_two_sided_p(z: f64) -> Result<f64> {
    let dist = Normal::new(0.0, 1.0)
        .map_err(|e| Error::Computation(format!("Failed to create normal distribution: {e}")))?;
    Ok(2.0 * (1.0 - dist.cdf(z.abs())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_reject_follows_p_value() {
        assert!(TestOutcome::at_level(2.0, 0.01, 0.05).reject);
        assert!(!TestOutcome::at_level(1.0, 0.30, 0.05).reject);
        // Boundary: p == alpha does not reject
        assert!(!TestOutcome::at_level(1.0, 0.05, 0.05).reject);
    }

    #[test]
    fn test_check_alpha() {
        assert!(check_alpha(0.05).is_ok());
        assert!(check_alpha(0.0).is_err());
        assert!(check_alpha(1.0).is_err());
        assert!(check_alpha(-0.1).is_err());
        assert!(check_alpha(f64::NAN).is_err());
    }

    #[test]
    fn test_two_sided_p_values() {
        // z = 1.959964 is the classic two-sided 5% critical value
        assert_abs_diff_eq!(normal_two_sided_p(1.959964).unwrap(), 0.05, epsilon = 1e-5);
        assert_abs_diff_eq!(normal_two_sided_p(0.0).unwrap(), 1.0, epsilon = 1e-12);
        // t with huge df approaches the normal
        assert_abs_diff_eq!(
            student_t_two_sided_p(1.959964, 1e6).unwrap(),
            0.05,
            epsilon = 1e-3
        );
    }
}
