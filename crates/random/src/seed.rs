//! Seed derivation.
//!
//! A problem seed is derived from the function id and instance number, and
//! each generated structure adds a fixed offset to it so that the rotation
//! and permutation draws are decorrelated. The offsets are a historical
//! convention kept for reproducibility with published benchmark data.

/// Multiplier applied to the instance number when deriving seeds.
pub const INSTANCE_SEED_STRIDE: i64 = 10_000;

/// Added to the problem seed for the (block) rotation.
pub const ROTATION_SEED_OFFSET: i64 = 1_000_000;

/// Added to the problem seed for the permutation applied before the blocks.
pub const FIRST_PERMUTATION_SEED_OFFSET: i64 = 2_000_000;

/// Added to the problem seed for the permutation applied after the blocks.
pub const SECOND_PERMUTATION_SEED_OFFSET: i64 = 3_000_000;

/// Distance between the seeds of consecutive blocks of a block rotation.
pub const BLOCK_SEED_STRIDE: i64 = 1_000_000;

/// Returns the base seed of a problem: `function + 10000 · instance`.
#[must_use]
pub fn problem_seed(function: u32, instance: u32) -> i64 {
    i64::from(function) + INSTANCE_SEED_STRIDE * i64::from(instance)
}
