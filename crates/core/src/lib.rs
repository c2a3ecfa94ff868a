#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # kunion core
//!
//! Discriminated unions over two and three alternatives.
//!
//! - [`Union<T1, T2>`]: exactly one of two values.
//! - [`TripleUnion<T1, T2, T3>`]: exactly one of three values. Eliminating
//!   one of its slots yields a [`Union`] over the other two, in order.
//!
//! Both are plain immutable values. Every combinator is total: there is no
//! "wrong slot" error, only `None` or a caller-supplied fallback. Callbacks
//! are `FnOnce` and run at most once, on the caller's thread, before the
//! combinator returns.
//!
//! ```rust
//! use kunion_core::{TripleUnion, Union};
//!
//! let reply: Union<u16, String> = Union::of_second("timeout".to_string());
//! let code: u16 = reply
//!     .on_second(|reason| assert_eq!(reason, "timeout"))
//!     .first_or_else(|_| 504);
//! assert_eq!(code, 504);
//!
//! let token: TripleUnion<i64, f64, &str> = TripleUnion::of_third("+");
//! assert_eq!(token.map_third(str::len).third_or_none(), Some(1));
//! ```

mod error;
mod ext;
mod slot;
mod triple;
mod union;

pub use error::{Result, UnionError};
pub use ext::UnionExt;
pub use slot::Slot;
pub use triple::TripleUnion;
pub use union::Union;
