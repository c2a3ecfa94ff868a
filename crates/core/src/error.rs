//! Error types for slot conversions.
//!
//! The union combinators are total and never fail. Only turning untrusted
//! input (a raw tag or a slot name) into a [`Slot`](crate::Slot) can go wrong.

use thiserror::Error;

/// Error produced when a raw discriminant cannot be mapped onto a slot.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnionError {
    #[error("slot index {index} is out of range (expected 1..=3)")]
    SlotOutOfRange { index: u8 },

    #[error("unknown slot name '{name}' (expected first, second or third)")]
    UnknownSlotName { name: String },
}

impl UnionError {
    /// Create an out-of-range error for a 1-based slot index.
    #[must_use]
    pub const fn slot_out_of_range(index: u8) -> Self {
        Self::SlotOutOfRange { index }
    }

    /// Create an unknown-name error.
    pub fn unknown_slot_name(name: impl Into<String>) -> Self {
        Self::UnknownSlotName { name: name.into() }
    }
}

/// Result alias for fallible slot conversions.
pub type Result<T> = std::result::Result<T, UnionError>;
