#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # kunion
//!
//! Closed sum types for Rust code that wants an anonymous "one of these"
//! without declaring a dedicated enum for every pair or triple of types.
//!
//! This library re-exports the workspace crates for convenience.
//!
//! ```rust
//! use kunion::prelude::*;
//!
//! let input: Union<i32, &str> = Union::of_second("err");
//! let len: usize = input
//!     .map_first(|n| n.unsigned_abs() as usize)
//!     .first_or_else(str::len);
//! assert_eq!(len, 3);
//! ```

pub use kunion_core;
pub use kunion_core::{Result, Slot, TripleUnion, Union, UnionError, UnionExt};

pub mod prelude;
