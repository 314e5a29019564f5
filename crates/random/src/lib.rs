//! Seeded, reproducible structure generation for benchmark landscapes.
//!
//! Every function here is a pure function of its arguments: each call builds
//! its own [`LehmerStream`], so generating structures for different seeds on
//! different threads never interleaves state, and calling twice with the
//! same arguments yields bit-identical results.
//!
//! # Structures
//!
//! - [`compute_optimum`], [`compute_optimum_value`]: hidden optimum location
//!   and value
//! - [`compute_rotation`]: dense orthogonal matrix
//! - [`compute_block_sizes`], [`compute_block_rotation`]: block-diagonal
//!   orthogonal matrix for large dimensions
//! - [`compute_swap_permutation`]: permutation built from local swaps
//!
//! The [`seed`] module holds the offsets used to derive one seed per
//! structure from the problem seed.

mod error;
mod optimum;
mod permutation;
mod policy;
mod rotation;
mod stream;

pub mod seed;

pub use error::GenerationError;
pub use optimum::{compute_optimum, compute_optimum_value};
pub use permutation::{SwapPermutation, compute_swap_permutation};
pub use policy::{BlockPolicy, LargeScalePolicy, PolicyError, compute_block_sizes};
pub use rotation::{compute_block_rotation, compute_rotation};
pub use stream::{LehmerStream, gaussian, uniform};
