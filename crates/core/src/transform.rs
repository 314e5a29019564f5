//! Decorators that wrap an [`Evaluable`](crate::Evaluable) and transform its
//! inputs or its output.
//!
//! Every decorator owns the evaluable it wraps along with its own parameters,
//! and is itself an evaluable. Decorators are usually built through the
//! combinator methods on [`Evaluable`](crate::Evaluable) rather than directly.
//!
//! # Transforms
//!
//! | Decorator | Evaluates | Declared optimum |
//! |-----------|-----------|------------------|
//! | [`ShiftDomain`] | `f(x - offset)` | `x* + offset` |
//! | [`ShiftObjective`] | `f(x) + offset` | `f* + offset` |
//! | [`Oscillate`] | `f(T_osz(x))` | coordinatewise preimage of `x*` |
//! | [`Affine`] | `f(M·x + b)` | solution of `M·x = x* - b` |
//! | [`PermBlockDiag`] | `f(P2·B·(P1·x))` | `P1⁻¹·B⁻¹·P2⁻¹·x*` |
//!
//! Input transforms build a call-local buffer, so the caller's slice is never
//! modified and concurrent calls share no scratch state.

mod affine;
mod oscillate;
mod perm_block_diag;
mod shift_domain;
mod shift_objective;

pub use affine::Affine;
pub use oscillate::{Oscillate, oscillate_coordinate};
pub use perm_block_diag::PermBlockDiag;
pub use shift_domain::ShiftDomain;
pub use shift_objective::ShiftObjective;
