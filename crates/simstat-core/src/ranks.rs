//! Rank assignment with mid-rank tie handling
//!
//! Both Wilcoxon-family tests rank observations and give every member of a
//! tied group the average rank of the group. The tie correction term
//! `sum(t^3 - t)` over tied groups feeds the normal-approximation variance
//! of those tests.

/// Assign 1-based mid-ranks to already-sorted data
///
/// Tied runs receive the average of the ranks they span.
///
/// # Examples
///
/// ```rust
/// use simstat_core::ranks::midranks;
///
/// let ranks = midranks(&[1.0, 1.0, 2.0, 2.0, 3.0]);
/// assert_eq!(ranks, vec![1.5, 1.5, 3.5, 3.5, 5.0]);
/// ```
pub fn midranks(sorted_data: &[f64]) -> Vec<f64> {
    let n = sorted_data.len();
    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && sorted_data[j] == sorted_data[i] {
            j += 1;
        }
        // Members i..j are tied; average of ranks i+1 ..= j
        let avg = (i + 1 + j) as f64 / 2.0;
        for rank in ranks.iter_mut().take(j).skip(i) {
            *rank = avg;
        }
        i = j;
    }
    ranks
}

/// Tie correction term `sum(t^3 - t)` over tied groups of sorted data
pub fn tie_correction(sorted_data: &[f64]) -> f64 {
    let n = sorted_data.len();
    let mut correction = 0.0;
    let mut i = 0;
    while i < n {
        let mut j = i + 1;
        while j < n && sorted_data[j] == sorted_data[i] {
            j += 1;
        }
        let t = (j - i) as f64;
        correction += t * t * t - t;
        i = j;
    }
    correction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midranks_no_ties() {
        assert_eq!(midranks(&[1.0, 2.0, 3.0]), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_midranks_all_tied() {
        assert_eq!(midranks(&[5.0, 5.0, 5.0, 5.0]), vec![2.5, 2.5, 2.5, 2.5]);
    }

    #[test]
    fn test_midranks_mixed() {
        // |d| = [1, 1, 2, 2, 3] from the paired differences [1, -1, 2, 2, -3]
        let ranks = midranks(&[1.0, 1.0, 2.0, 2.0, 3.0]);
        assert_eq!(ranks, vec![1.5, 1.5, 3.5, 3.5, 5.0]);
        // Ranks always sum to n(n+1)/2 regardless of ties
        assert_eq!(ranks.iter().sum::<f64>(), 15.0);
    }

    #[test]
    fn test_tie_correction() {
        assert_eq!(tie_correction(&[1.0, 2.0, 3.0]), 0.0);
        // Two pairs of ties: 2 * (8 - 2) = 12
        assert_eq!(tie_correction(&[1.0, 1.0, 2.0, 2.0, 3.0]), 12.0);
        // One triple: 27 - 3 = 24
        assert_eq!(tie_correction(&[4.0, 4.0, 4.0]), 24.0);
    }

    #[test]
    fn test_empty() {
        assert!(midranks(&[]).is_empty());
        assert_eq!(tie_correction(&[]), 0.0);
    }
}
