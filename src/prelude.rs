//! Prelude module - common imports for kunion
//!
//! Import this module to get the union types and their helpers:
//! ```rust
//! use kunion::prelude::*;
//! ```

// Re-export functional utilities
pub use tap::{Pipe, Tap};

// Re-export union types
pub use kunion_core::{Slot, TripleUnion, Union, UnionExt};
