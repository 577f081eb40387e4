//! # distribution-algebra
//!
//! Random variables as typed values with exact or analytically derived
//! arithmetic and comparison. Adding two independent [`Normal`](stats::Normal)s
//! gives a `Normal`; adding two [`Discrete`](stats::Discrete)s convolves their
//! supports; asking whether one variable is below another gives a
//! [`Bernoulli`](stats::Bernoulli) holding that probability. Nothing is
//! sampled.
//!
//! ## Quick start
//!
//! ```
//! use distribution_algebra::stats::{Compare, Discrete, DiscreteDistribution};
//!
//! let d6 = Discrete::new((1..=6).map(|k| (f64::from(k), 1.0 / 6.0))).unwrap();
//! let two_dice = (&d6 + &d6).unwrap();
//! assert!((two_dice.mean() - 7.0).abs() < 1e-12);
//!
//! // P(sum ≥ 7) = 21/36
//! let p = two_dice.greater_equal(7.0);
//! assert!((p.p() - 21.0 / 36.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`stats`]: The distribution families, the [`Distribution`](stats::Distribution)
//!   contract (parameters, string form, tolerance-based equality), the
//!   continuous / discrete capability traits, [`Compare`](stats::Compare), and
//!   the runtime-dispatched [`AnyDistribution`](stats::AnyDistribution).
//!
//! - [`special`]: Error function, log-gamma and the regularized incomplete
//!   gamma function behind the Normal and Poisson closed forms.
//!
//! - [`traits`]: [`FloatScalar`], the element type every distribution is
//!   generic over (`f32`, `f64`).
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm |
//! | `libm`  | no      | Pure-Rust software float fallback for `no_std` targets |
//!
//! Without `std` the crate is `no_std` and needs `alloc` for [`Discrete`](stats::Discrete)
//! tables.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod special;
pub mod stats;
pub mod traits;

pub use traits::FloatScalar;
