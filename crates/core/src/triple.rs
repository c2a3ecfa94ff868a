//! Triple union: exactly one of three typed values.
//!
//! Mirrors [`Union`] slot for slot. The `*_or_else` combinators differ: when
//! the requested slot is empty, two alternatives remain, so the fallback
//! receives a [`Union`] over the surviving slots in their original order.

use std::fmt;

use crate::slot::Slot;
use crate::union::Union;

/// A discriminated union holding exactly one of `T1`, `T2` or `T3`.
///
/// Like [`Union`], equality and hashing take the slot into account and
/// [`Display`](fmt::Display) only shows the active payload.
///
/// Every callback taken by the combinators is an `FnOnce` and is invoked
/// at most once, synchronously, before the combinator returns.
///
/// # Examples
///
/// ```rust
/// use kunion_core::TripleUnion;
///
/// // Eliminating the first slot turns the second into the pair's first.
/// let triple: TripleUnion<&str, i32, bool> = TripleUnion::of_second(5);
/// let rest = triple.first_or_else(|pair| match pair.first_or_none() {
///     Some(_) => "second",
///     None => "third",
/// });
/// assert_eq!(rest, "second");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TripleUnion<T1, T2, T3> {
    First(T1),
    Second(T2),
    Third(T3),
}

impl<T1, T2, T3> TripleUnion<T1, T2, T3> {
    /// Slots of a triple union, in tag order.
    pub const SLOTS: [Slot; 3] = [Slot::First, Slot::Second, Slot::Third];

    /// Constructs a union holding `value` in the first slot.
    #[inline]
    #[must_use]
    pub const fn of_first(value: T1) -> Self {
        Self::First(value)
    }

    /// Constructs a union holding `value` in the second slot.
    #[inline]
    #[must_use]
    pub const fn of_second(value: T2) -> Self {
        Self::Second(value)
    }

    /// Constructs a union holding `value` in the third slot.
    #[inline]
    #[must_use]
    pub const fn of_third(value: T3) -> Self {
        Self::Third(value)
    }

    /// Returns the populated slot.
    #[inline]
    #[must_use]
    pub const fn slot(&self) -> Slot {
        match self {
            Self::First(_) => Slot::First,
            Self::Second(_) => Slot::Second,
            Self::Third(_) => Slot::Third,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_first(&self) -> bool {
        matches!(self, Self::First(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_second(&self) -> bool {
        matches!(self, Self::Second(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_third(&self) -> bool {
        matches!(self, Self::Third(_))
    }

    /// Borrows the payload, keeping the slot.
    #[inline]
    #[must_use]
    pub const fn as_ref(&self) -> TripleUnion<&T1, &T2, &T3> {
        match self {
            Self::First(value) => TripleUnion::First(value),
            Self::Second(value) => TripleUnion::Second(value),
            Self::Third(value) => TripleUnion::Third(value),
        }
    }

    /// Returns the first value, or `None` if another slot is populated.
    #[inline]
    pub fn first_or_none(self) -> Option<T1> {
        match self {
            Self::First(value) => Some(value),
            Self::Second(_) | Self::Third(_) => None,
        }
    }

    /// Returns the second value, or `None` if another slot is populated.
    #[inline]
    pub fn second_or_none(self) -> Option<T2> {
        match self {
            Self::Second(value) => Some(value),
            Self::First(_) | Self::Third(_) => None,
        }
    }

    /// Returns the third value, or `None` if another slot is populated.
    #[inline]
    pub fn third_or_none(self) -> Option<T3> {
        match self {
            Self::Third(value) => Some(value),
            Self::First(_) | Self::Second(_) => None,
        }
    }

    /// Returns the first value converted into `R`, or hands the remaining
    /// alternatives to `fallback` as `Union<T2, T3>`.
    ///
    /// The second slot becomes the pair's first slot and the third slot its
    /// second. `fallback` is called at most once.
    #[inline]
    pub fn first_or_else<R, F>(self, fallback: F) -> R
    where
        T1: Into<R>,
        F: FnOnce(Union<T2, T3>) -> R,
    {
        match self {
            Self::First(value) => value.into(),
            Self::Second(value) => fallback(Union::First(value)),
            Self::Third(value) => fallback(Union::Second(value)),
        }
    }

    /// Returns the second value converted into `R`, or hands the remaining
    /// alternatives to `fallback` as `Union<T1, T3>`.
    #[inline]
    pub fn second_or_else<R, F>(self, fallback: F) -> R
    where
        T2: Into<R>,
        F: FnOnce(Union<T1, T3>) -> R,
    {
        match self {
            Self::First(value) => fallback(Union::First(value)),
            Self::Second(value) => value.into(),
            Self::Third(value) => fallback(Union::Second(value)),
        }
    }

    /// Returns the third value converted into `R`, or hands the remaining
    /// alternatives to `fallback` as `Union<T1, T2>`.
    #[inline]
    pub fn third_or_else<R, F>(self, fallback: F) -> R
    where
        T3: Into<R>,
        F: FnOnce(Union<T1, T2>) -> R,
    {
        match self {
            Self::First(value) => fallback(Union::First(value)),
            Self::Second(value) => fallback(Union::Second(value)),
            Self::Third(value) => value.into(),
        }
    }

    /// Transforms the first value, passing the other slots through untouched.
    #[inline]
    pub fn map_first<U, F>(self, transform: F) -> TripleUnion<U, T2, T3>
    where
        F: FnOnce(T1) -> U,
    {
        match self {
            Self::First(value) => TripleUnion::First(transform(value)),
            Self::Second(value) => TripleUnion::Second(value),
            Self::Third(value) => TripleUnion::Third(value),
        }
    }

    /// Transforms the second value, passing the other slots through untouched.
    #[inline]
    pub fn map_second<U, F>(self, transform: F) -> TripleUnion<T1, U, T3>
    where
        F: FnOnce(T2) -> U,
    {
        match self {
            Self::First(value) => TripleUnion::First(value),
            Self::Second(value) => TripleUnion::Second(transform(value)),
            Self::Third(value) => TripleUnion::Third(value),
        }
    }

    /// Transforms the third value, passing the other slots through untouched.
    #[inline]
    pub fn map_third<U, F>(self, transform: F) -> TripleUnion<T1, T2, U>
    where
        F: FnOnce(T3) -> U,
    {
        match self {
            Self::First(value) => TripleUnion::First(value),
            Self::Second(value) => TripleUnion::Second(value),
            Self::Third(value) => TripleUnion::Third(transform(value)),
        }
    }

    /// Runs `action` on the first value if present, then returns `self`.
    #[inline]
    #[must_use]
    pub fn on_first<F>(self, action: F) -> Self
    where
        F: FnOnce(&T1),
    {
        if let Self::First(ref value) = self {
            action(value);
        }
        self
    }

    /// Runs `action` on the second value if present, then returns `self`.
    #[inline]
    #[must_use]
    pub fn on_second<F>(self, action: F) -> Self
    where
        F: FnOnce(&T2),
    {
        if let Self::Second(ref value) = self {
            action(value);
        }
        self
    }

    /// Runs `action` on the third value if present, then returns `self`.
    #[inline]
    #[must_use]
    pub fn on_third<F>(self, action: F) -> Self
    where
        F: FnOnce(&T3),
    {
        if let Self::Third(ref value) = self {
            action(value);
        }
        self
    }

    /// Exhaustive case analysis: exactly one of the three closures runs.
    #[inline]
    pub fn fold<R, F1, F2, F3>(self, on_first: F1, on_second: F2, on_third: F3) -> R
    where
        F1: FnOnce(T1) -> R,
        F2: FnOnce(T2) -> R,
        F3: FnOnce(T3) -> R,
    {
        match self {
            Self::First(value) => on_first(value),
            Self::Second(value) => on_second(value),
            Self::Third(value) => on_third(value),
        }
    }

    /// Drops down to a pair union unless the third slot is populated.
    ///
    /// # Errors
    ///
    /// Returns the third value when it is the active one.
    #[inline]
    pub fn narrow_third(self) -> Result<Union<T1, T2>, T3> {
        match self {
            Self::First(value) => Ok(Union::First(value)),
            Self::Second(value) => Ok(Union::Second(value)),
            Self::Third(value) => Err(value),
        }
    }

    /// Splits a sequence of unions by slot, preserving relative order.
    pub fn partition<I>(unions: I) -> (Vec<T1>, Vec<T2>, Vec<T3>)
    where
        I: IntoIterator<Item = Self>,
    {
        unions.into_iter().fold(
            (Vec::new(), Vec::new(), Vec::new()),
            |(mut firsts, mut seconds, mut thirds), union| {
                match union {
                    Self::First(value) => firsts.push(value),
                    Self::Second(value) => seconds.push(value),
                    Self::Third(value) => thirds.push(value),
                }
                (firsts, seconds, thirds)
            },
        )
    }
}

impl<T1, T2, T3> From<Union<T1, T2>> for TripleUnion<T1, T2, T3> {
    #[inline]
    fn from(pair: Union<T1, T2>) -> Self {
        pair.fold(Self::First, Self::Second)
    }
}

impl<T1: fmt::Display, T2: fmt::Display, T3: fmt::Display> fmt::Display
    for TripleUnion<T1, T2, T3>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First(value) => fmt::Display::fmt(value, f),
            Self::Second(value) => fmt::Display::fmt(value, f),
            Self::Third(value) => fmt::Display::fmt(value, f),
        }
    }
}
