//! Paired and two-sample hypothesis tests
//!
//! Each test is a pure function taking its sample(s) and a significance
//! level, returning a [`TestOutcome`] with the statistic, the two-sided
//! p-value, and the reject decision at that level. The parametric tests
//! use exact Student-t p-values; the rank tests use the tie-corrected
//! normal approximation.
//!
//! # Example
//!
//! ```rust
//! use simstat_hypothesis::{paired_t_test, signed_rank_test};
//!
//! let x = [5.1, 4.8, 6.2, 5.7, 5.0, 5.9];
//! let y = [4.2, 4.9, 5.1, 4.8, 4.4, 5.2];
//! let t = paired_t_test(&x, &y, 0.05).unwrap();
//! let w = signed_rank_test(&x, &y, 0.05).unwrap();
//! assert!(t.p_value >= 0.0 && w.p_value <= 1.0);
//! ```

mod rank_sum;
mod t_test;
mod types;
mod wilcoxon;

pub use rank_sum::rank_sum_test;
pub use t_test::{paired_t_test, two_sample_t_test};
pub use types::{check_alpha, TestOutcome};
pub use wilcoxon::signed_rank_test;
