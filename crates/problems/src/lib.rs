//! Reproducible ellipsoid benchmark problems.
//!
//! A problem is identified by a [`ProblemSpec`]: a function id, a dimension,
//! an instance number, and a [`Variant`]. Assembly derives the hidden
//! structures from the problem seed, wraps the [`Ellipsoid`] kernel in a fixed
//! chain of transforms, and checks that the result is self-consistent.
//!
//! ```
//! use landscape_core::Evaluable;
//! use landscape_problems::{ProblemSpec, Variant, assemble};
//!
//! let spec = ProblemSpec::new(10, 20, 1, Variant::Rotated);
//! let problem = assemble(&spec).unwrap();
//!
//! assert_eq!(problem.id(), "bbob_f010_i01_d20");
//! let optimum = problem.optimum();
//! assert_eq!(problem.evaluate(&optimum.parameter).unwrap(), optimum.value);
//! ```
//!
//! # Variants
//!
//! | Variant | Transform chain (innermost first) | Structural tag |
//! |---------|-----------------------------------|----------------|
//! | [`Variant::Separable`] | oscillate → shift domain → shift objective | `1-separable` |
//! | [`Variant::Rotated`] | oscillate → rotate → shift domain → shift objective | `3-ill-conditioned` |
//! | [`Variant::BlockRotated`] | oscillate → permuted block rotation → shift domain → shift objective | `large_scale_block_rotated` |

mod assemble;
mod config;
mod ellipsoid;
mod error;
mod problem;
mod variant;

pub use assemble::{Assembler, assemble};
pub use config::{Config, ConfigError};
pub use ellipsoid::{CONDITION, Ellipsoid};
pub use error::{AssemblyError, ConstructionError, ErrorKind, Stage};
pub use problem::{Problem, ProblemSpec};
pub use variant::Variant;
