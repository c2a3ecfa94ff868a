//! Logged extraction for both union arities.
//!
//! Same idea as logging a failed `Result` before turning it into an `Option`:
//! when the requested slot is empty, the discarded payload is reported
//! through `tracing` instead of vanishing silently.

use std::fmt::Debug;

use crate::slot::Slot;
use crate::triple::TripleUnion;
use crate::union::Union;

/// Extraction helpers that log the discarded alternative.
pub trait UnionExt: Sized {
    /// Payload type of the first slot.
    type First;

    /// Convert to an `Option` of the first value, logging the active slot
    /// when it is not the first.
    fn into_first_logged(self) -> Option<Self::First>;

    /// Get the first value or a default, logging the active slot when it is
    /// not the first.
    #[inline]
    fn first_or_default_logged(self, default: Self::First) -> Self::First {
        self.into_first_logged().unwrap_or(default)
    }
}

fn log_discarded(slot: Slot, value: &impl Debug) {
    tracing::debug!(slot = %slot, value = ?value, "first slot empty, discarding value");
}

impl<T1, T2: Debug> UnionExt for Union<T1, T2> {
    type First = T1;

    #[inline]
    fn into_first_logged(self) -> Option<T1> {
        self.on_second(|value| log_discarded(Slot::Second, value))
            .first_or_none()
    }
}

impl<T1, T2: Debug, T3: Debug> UnionExt for TripleUnion<T1, T2, T3> {
    type First = T1;

    #[inline]
    fn into_first_logged(self) -> Option<T1> {
        self.on_second(|value| log_discarded(Slot::Second, value))
            .on_third(|value| log_discarded(Slot::Third, value))
            .first_or_none()
    }
}
