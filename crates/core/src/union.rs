//! Pair union: exactly one of two typed values.

use std::fmt;

use either::Either;
use itertools::Itertools;

use crate::slot::Slot;

/// A discriminated union holding exactly one of `T1` or `T2`.
///
/// The variant is the tag: a `Union` can never be empty and can never hold
/// both values. Equality and hashing take the slot into account, so
/// `Union::<&str, &str>::of_first("x") != Union::of_second("x")`.
/// [`Display`](fmt::Display) only shows the active payload.
///
/// Every callback taken by the combinators is an `FnOnce` and is invoked
/// at most once, synchronously, before the combinator returns.
///
/// # Examples
///
/// ```rust
/// use kunion_core::Union;
///
/// let parsed: Union<i32, String> = Union::of_first(42);
/// let value: i32 = parsed.map_first(|x| x + 1).first_or_else(|_| -1);
/// assert_eq!(value, 43);
///
/// let failed: Union<usize, &str> = Union::of_second("err");
/// assert_eq!(failed.first_or_else(str::len), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Union<T1, T2> {
    First(T1),
    Second(T2),
}

impl<T1, T2> Union<T1, T2> {
    /// Slots of a pair union, in tag order.
    pub const SLOTS: [Slot; 2] = [Slot::First, Slot::Second];

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

    /// Returns the populated slot.
    #[inline]
    #[must_use]
    pub const fn slot(&self) -> Slot {
        match self {
            Self::First(_) => Slot::First,
            Self::Second(_) => Slot::Second,
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

    /// Borrows the payload, keeping the slot.
    #[inline]
    #[must_use]
    pub const fn as_ref(&self) -> Union<&T1, &T2> {
        match self {
            Self::First(value) => Union::First(value),
            Self::Second(value) => Union::Second(value),
        }
    }

    /// Returns the first value, or `None` if the second slot is populated.
    #[inline]
    pub fn first_or_none(self) -> Option<T1> {
        match self {
            Self::First(value) => Some(value),
            Self::Second(_) => None,
        }
    }

    /// Returns the second value, or `None` if the first slot is populated.
    #[inline]
    pub fn second_or_none(self) -> Option<T2> {
        match self {
            Self::First(_) => None,
            Self::Second(value) => Some(value),
        }
    }

    /// Returns the first value converted into `R`, or the result of
    /// `fallback` applied to the second value.
    ///
    /// `fallback` is only called when the second slot is populated.
    #[inline]
    pub fn first_or_else<R, F>(self, fallback: F) -> R
    where
        T1: Into<R>,
        F: FnOnce(T2) -> R,
    {
        match self {
            Self::First(value) => value.into(),
            Self::Second(value) => fallback(value),
        }
    }

    /// Returns the second value converted into `R`, or the result of
    /// `fallback` applied to the first value.
    ///
    /// `fallback` is only called when the first slot is populated.
    #[inline]
    pub fn second_or_else<R, F>(self, fallback: F) -> R
    where
        T2: Into<R>,
        F: FnOnce(T1) -> R,
    {
        match self {
            Self::First(value) => fallback(value),
            Self::Second(value) => value.into(),
        }
    }

    /// Transforms the first value, passing a second value through untouched.
    #[inline]
    pub fn map_first<U, F>(self, transform: F) -> Union<U, T2>
    where
        F: FnOnce(T1) -> U,
    {
        match self {
            Self::First(value) => Union::First(transform(value)),
            Self::Second(value) => Union::Second(value),
        }
    }

    /// Transforms the second value, passing a first value through untouched.
    #[inline]
    pub fn map_second<U, F>(self, transform: F) -> Union<T1, U>
    where
        F: FnOnce(T2) -> U,
    {
        match self {
            Self::First(value) => Union::First(value),
            Self::Second(value) => Union::Second(transform(value)),
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

    /// Exhaustive case analysis: exactly one of the two closures runs.
    #[inline]
    pub fn fold<R, F1, F2>(self, on_first: F1, on_second: F2) -> R
    where
        F1: FnOnce(T1) -> R,
        F2: FnOnce(T2) -> R,
    {
        match self {
            Self::First(value) => on_first(value),
            Self::Second(value) => on_second(value),
        }
    }

    /// Swaps the two slots.
    #[inline]
    #[must_use]
    pub fn flip(self) -> Union<T2, T1> {
        self.fold(Union::Second, Union::First)
    }

    /// Splits a sequence of unions by slot, preserving relative order.
    pub fn partition<I>(unions: I) -> (Vec<T1>, Vec<T2>)
    where
        I: IntoIterator<Item = Self>,
    {
        unions
            .into_iter()
            .partition_map(|union| union.fold(Either::Left, Either::Right))
    }
}

impl<T1: fmt::Display, T2: fmt::Display> fmt::Display for Union<T1, T2> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::First(value) => fmt::Display::fmt(value, f),
            Self::Second(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl<L, R> From<Either<L, R>> for Union<L, R> {
    #[inline]
    fn from(value: Either<L, R>) -> Self {
        match value {
            Either::Left(left) => Self::First(left),
            Either::Right(right) => Self::Second(right),
        }
    }
}

impl<L, R> From<Union<L, R>> for Either<L, R> {
    #[inline]
    fn from(value: Union<L, R>) -> Self {
        value.fold(Self::Left, Self::Right)
    }
}
