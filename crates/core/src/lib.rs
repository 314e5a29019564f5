//! Core traits and types for building synthetic benchmark landscapes.
//!
//! This crate defines the shared abstractions that generators and problem
//! assemblers build on:
//!
//! - [`Evaluable`]: a function with a fixed dimension, a declared optimum,
//!   and a single `evaluate` operation
//! - [`Optimum`], [`Bounds`]: metadata carried by every evaluable
//! - [`Permutation`], [`BlockDiagonal`]: structured linear maps consumed by
//!   the large-scale transform
//! - [`transform`]: decorators that wrap an evaluable and change its inputs
//!   or its output while keeping the same contract

mod block;
mod error;
mod evaluable;
mod optimum;
mod permutation;

pub mod transform;

pub use block::BlockDiagonal;
pub use error::{EvalError, TransformError};
pub use evaluable::Evaluable;
pub use optimum::{Bounds, Optimum};
pub use permutation::Permutation;
