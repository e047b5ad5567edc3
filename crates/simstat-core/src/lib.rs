//! Core error types and numeric helpers for the simstat engine
//!
//! Everything here is shared by the distribution, hypothesis-test, and
//! engine crates: the unified error type, slice math used by estimators
//! and test statistics, and mid-rank assignment for the rank-based tests.

pub mod error;
pub mod ranks;
pub mod utils;

pub use error::{Error, Result};
pub use ranks::{midranks, tie_correction};
pub use utils::{iqr, mean, quantile_sorted, sample_variance, sorted, std_dev};
