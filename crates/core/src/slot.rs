//! Slot discriminant shared by both union arities.

use strum::{Display, EnumString};

use crate::error::{Result, UnionError};

/// One alternative position of a union's type parameter list.
///
/// The discriminant is read-only: a union reports its slot through
/// `slot()`, but the slot can only be chosen by constructing a new union.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Slot {
    First,
    Second,
    Third,
}

impl Slot {
    /// Returns the 1-based tag of this slot.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    /// Parses a slot from its name (`first`, `second` or `third`, any case).
    ///
    /// # Errors
    ///
    /// Returns [`UnionError::UnknownSlotName`] for any other input.
    #[inline]
    pub fn from_name(name: &str) -> Result<Self> {
        name.parse::<Self>()
            .map_err(|_| UnionError::unknown_slot_name(name))
    }
}

impl TryFrom<u8> for Slot {
    type Error = UnionError;

    #[inline]
    fn try_from(index: u8) -> Result<Self> {
        match index {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            other => Err(UnionError::slot_out_of_range(other)),
        }
    }
}

impl From<Slot> for u8 {
    #[inline]
    fn from(slot: Slot) -> Self {
        slot.index()
    }
}
