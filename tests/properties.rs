//! Property-based tests for the union combinators using proptest.
//!
//! Properties verified:
//! - Construction and extraction are inverse
//! - Fallbacks run only for the other slots, exactly once
//! - Mapping leaves non-target slots untouched and composes
//! - Hooks observe without changing the union
//! - Equality and hashing respect the slot

use std::cell::Cell;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use kunion::prelude::*;
use proptest::prelude::*;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn pair_strategy() -> impl Strategy<Value = Union<i64, String>> {
    prop_oneof![
        any::<i64>().prop_map(Union::of_first),
        "[a-z]{0,12}".prop_map(Union::of_second),
    ]
}

fn triple_strategy() -> impl Strategy<Value = TripleUnion<i64, String, bool>> {
    prop_oneof![
        any::<i64>().prop_map(TripleUnion::of_first),
        "[a-z]{0,12}".prop_map(TripleUnion::of_second),
        any::<bool>().prop_map(TripleUnion::of_third),
    ]
}

// ==========================================================================
// PROPERTY: Construction / extraction inverse
// ==========================================================================

proptest! {
    #[test]
    fn prop_pair_extraction_inverse(n in any::<i64>(), s in "[a-z]{0,12}") {
        let first: Union<i64, String> = Union::of_first(n);
        let second: Union<i64, String> = Union::of_second(s.clone());

        prop_assert_eq!(first.clone().first_or_none(), Some(n));
        prop_assert_eq!(first.second_or_none(), None);
        prop_assert_eq!(second.clone().first_or_none(), None);
        prop_assert_eq!(second.second_or_none(), Some(s));
    }

    #[test]
    fn prop_triple_extraction_inverse(n in any::<i64>(), s in "[a-z]{0,12}", b in any::<bool>()) {
        let first: TripleUnion<i64, String, bool> = TripleUnion::of_first(n);
        let second: TripleUnion<i64, String, bool> = TripleUnion::of_second(s.clone());
        let third: TripleUnion<i64, String, bool> = TripleUnion::of_third(b);

        prop_assert_eq!(first.as_ref().first_or_none(), Some(&n));
        prop_assert_eq!(first.as_ref().second_or_none(), None);
        prop_assert_eq!(first.third_or_none(), None);
        prop_assert_eq!(second.as_ref().second_or_none(), Some(&s));
        prop_assert_eq!(second.as_ref().first_or_none(), None);
        prop_assert_eq!(second.third_or_none(), None);
        prop_assert_eq!(third.as_ref().third_or_none(), Some(&b));
        prop_assert_eq!(third.as_ref().first_or_none(), None);
        prop_assert_eq!(third.second_or_none(), None);
    }
}

// ==========================================================================
// PROPERTY: Fallback call count
// ==========================================================================

proptest! {
    #[test]
    fn prop_pair_fallback_only_for_other_slot(union in pair_strategy()) {
        let calls = Cell::new(0u32);
        let expected = union.clone().first_or_none();

        let value: Option<i64> = union.clone().map_first(Some).first_or_else(|_| {
            calls.set(calls.get().saturating_add(1));
            None
        });

        prop_assert_eq!(value, expected);
        prop_assert_eq!(calls.get(), u32::from(union.is_second()));

        let other_calls = Cell::new(0u32);
        let text: Option<String> = union.clone().map_second(Some).second_or_else(|_| {
            other_calls.set(other_calls.get().saturating_add(1));
            None
        });

        prop_assert_eq!(text, union.clone().second_or_none());
        prop_assert_eq!(other_calls.get(), u32::from(union.is_first()));
    }

    #[test]
    fn prop_triple_first_or_else_reshapes_in_order(union in triple_strategy()) {
        let calls = Cell::new(0u32);
        let seen_slot = Cell::new(None);
        let original = union.clone();

        let rebuilt: TripleUnion<i64, String, bool> = union
            .map_first(TripleUnion::<i64, String, bool>::of_first)
            .first_or_else(|pair| {
                calls.set(calls.get().saturating_add(1));
                seen_slot.set(Some(pair.slot()));
                pair.fold(TripleUnion::of_second, TripleUnion::of_third)
            });

        let expected_slot = match original.slot() {
            Slot::First => None,
            Slot::Second => Some(Slot::First),
            Slot::Third => Some(Slot::Second),
        };
        prop_assert_eq!(rebuilt, original.clone());
        prop_assert_eq!(seen_slot.get(), expected_slot);
        prop_assert_eq!(calls.get(), u32::from(!original.is_first()));
    }

    #[test]
    fn prop_triple_second_or_else_reshapes_in_order(union in triple_strategy()) {
        let calls = Cell::new(0u32);
        let seen_slot = Cell::new(None);
        let original = union.clone();

        let rebuilt: TripleUnion<i64, String, bool> = union
            .map_second(TripleUnion::<i64, String, bool>::of_second)
            .second_or_else(|pair| {
                calls.set(calls.get().saturating_add(1));
                seen_slot.set(Some(pair.slot()));
                pair.fold(TripleUnion::of_first, TripleUnion::of_third)
            });

        let expected_slot = match original.slot() {
            Slot::First => Some(Slot::First),
            Slot::Second => None,
            Slot::Third => Some(Slot::Second),
        };
        prop_assert_eq!(rebuilt, original.clone());
        prop_assert_eq!(seen_slot.get(), expected_slot);
        prop_assert_eq!(calls.get(), u32::from(!original.is_second()));
    }

    #[test]
    fn prop_triple_third_or_else_reshapes_in_order(union in triple_strategy()) {
        let calls = Cell::new(0u32);
        let seen_slot = Cell::new(None);
        let original = union.clone();

        let rebuilt: TripleUnion<i64, String, bool> = union
            .map_third(TripleUnion::<i64, String, bool>::of_third)
            .third_or_else(|pair| {
                calls.set(calls.get().saturating_add(1));
                seen_slot.set(Some(pair.slot()));
                pair.fold(TripleUnion::of_first, TripleUnion::of_second)
            });

        let expected_slot = match original.slot() {
            Slot::First => Some(Slot::First),
            Slot::Second => Some(Slot::Second),
            Slot::Third => None,
        };
        prop_assert_eq!(rebuilt, original.clone());
        prop_assert_eq!(seen_slot.get(), expected_slot);
        prop_assert_eq!(calls.get(), u32::from(!original.is_third()));
    }
}

// ==========================================================================
// PROPERTY: Map identity and composition
// ==========================================================================

proptest! {
    #[test]
    fn prop_pair_map_targets_one_slot(union in pair_strategy()) {
        let expected_first: Union<i64, String> =
            union.clone().fold(|n| Union::of_first(n.wrapping_mul(3)), Union::of_second);
        let expected_second: Union<i64, usize> =
            union.clone().fold(Union::of_first, |s| Union::of_second(s.len()));

        prop_assert_eq!(union.clone().map_first(|n| n.wrapping_mul(3)), expected_first);
        prop_assert_eq!(union.map_second(|s| s.len()), expected_second);
    }

    #[test]
    fn prop_triple_map_targets_one_slot(union in triple_strategy()) {
        let expected_first: TripleUnion<i64, String, bool> = union.clone().fold(
            |n| TripleUnion::of_first(n.wrapping_mul(3)),
            TripleUnion::of_second,
            TripleUnion::of_third,
        );
        let expected_second: TripleUnion<i64, usize, bool> = union.clone().fold(
            TripleUnion::of_first,
            |s| TripleUnion::of_second(s.len()),
            TripleUnion::of_third,
        );
        let expected_third: TripleUnion<i64, String, u8> = union.clone().fold(
            TripleUnion::of_first,
            TripleUnion::of_second,
            |b| TripleUnion::of_third(u8::from(b)),
        );

        prop_assert_eq!(union.clone().map_first(|n| n.wrapping_mul(3)), expected_first);
        prop_assert_eq!(union.clone().map_second(|s| s.len()), expected_second);
        prop_assert_eq!(union.map_third(u8::from), expected_third);
    }

    #[test]
    fn prop_pair_map_composes(union in pair_strategy()) {
        let g = |n: i64| n.wrapping_add(7);
        let f = |n: i64| n.wrapping_mul(2);
        let h = |s: String| s.len();
        let k = |n: usize| n.saturating_add(1);

        prop_assert_eq!(
            union.clone().map_first(g).map_first(f),
            union.clone().map_first(|n| f(g(n)))
        );
        prop_assert_eq!(
            union.clone().map_second(h).map_second(k),
            union.map_second(|s| k(h(s)))
        );
    }

    #[test]
    fn prop_triple_map_composes(union in triple_strategy()) {
        let g = |n: i64| n.wrapping_add(7);
        let f = |n: i64| n.wrapping_mul(2);
        let h = |s: String| s.len();
        let k = |n: usize| n.saturating_add(1);
        let not = |b: bool| !b;
        let count = |b: bool| u8::from(b);

        prop_assert_eq!(
            union.clone().map_first(g).map_first(f),
            union.clone().map_first(|n| f(g(n)))
        );
        prop_assert_eq!(
            union.clone().map_second(h).map_second(k),
            union.clone().map_second(|s| k(h(s)))
        );
        prop_assert_eq!(
            union.clone().map_third(not).map_third(count),
            union.map_third(|b| count(not(b)))
        );
    }
}

// ==========================================================================
// PROPERTY: Hooks observe without changing
// ==========================================================================

proptest! {
    #[test]
    fn prop_on_first_observes_once(union in pair_strategy()) {
        let seen = Cell::new(None);
        let result = union.clone().on_first(|n| seen.set(Some(*n)));

        prop_assert_eq!(&result, &union);
        prop_assert_eq!(seen.get(), union.first_or_none());
    }

    #[test]
    fn prop_on_third_observes_once(union in triple_strategy()) {
        let calls = Cell::new(0u32);
        let result = union.clone().on_third(|_| calls.set(calls.get().saturating_add(1)));

        prop_assert_eq!(&result, &union);
        prop_assert_eq!(calls.get(), u32::from(union.is_third()));
    }
}

// ==========================================================================
// PROPERTY: Equality / hash contract
// ==========================================================================

proptest! {
    #[test]
    fn prop_same_slot_same_payload_equal_and_hash_equal(s in "[a-z]{0,12}") {
        let a: Union<String, String> = Union::of_first(s.clone());
        let b: Union<String, String> = Union::of_first(s.clone());
        let other: Union<String, String> = Union::of_second(s);

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
        prop_assert_ne!(&a, &other);
        prop_assert_eq!(a.to_string(), other.to_string());
    }

    #[test]
    fn prop_triple_slots_never_equal(n in any::<i64>()) {
        let first: TripleUnion<i64, i64, i64> = TripleUnion::of_first(n);
        let second: TripleUnion<i64, i64, i64> = TripleUnion::of_second(n);
        let third: TripleUnion<i64, i64, i64> = TripleUnion::of_third(n);

        prop_assert_ne!(first, second);
        prop_assert_ne!(second, third);
        prop_assert_ne!(first, third);
    }
}
