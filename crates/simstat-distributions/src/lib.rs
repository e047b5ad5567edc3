//! Distribution specifications and samplers
//!
//! A [`DistributionSpec`] names a distribution family and its parameters,
//! validated at construction. From it you get analytic [`Moments`] (or an
//! explicit `Undefined` where none exist, e.g. Cauchy) and a [`Sampler`]
//! that draws i.i.d. variates through a caller-supplied `Rng`.
//!
//! # Example
//!
//! ```rust
//! use simstat_distributions::DistributionSpec;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let spec = DistributionSpec::normal(0.0, 1.0).unwrap();
//! let sampler = spec.sampler().unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let sample = sampler.draw(&mut rng, 50).unwrap();
//! assert_eq!(sample.len(), 50);
//! ```

mod sampler;
mod spec;

pub use sampler::Sampler;
pub use spec::{DistributionSpec, Moments};
