//! Property-based tests for the Funf calling convention.
//!
//! ## Overflow
//! - `f(xs ++ ys) == [f(xs), ys...]` when `len(xs) == arity(f)`
//!
//! ## Partial Application
//! - `f(xs)(ys) == f(xs ++ ys)` when `len(xs) < arity(f)`
//! - `f(xs) == capture(f, xs)` observationally
//!
//! ## Composition
//! - `arity(compose(g, f)) == arity(f) + arity(g)`
//! - `compose(g, f)(xs ++ ys) == g(f(xs), ys...)` when `len(xs) == arity(f)`
//!
//! ## Function Arguments
//! - `capture(f, xs ++ [h] ++ ys)(zs ++ ws) == f(xs ++ [h(zs)] ++ ys ++ ws)`
//!   when `len(zs) == arity(h)`

#![allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]

use funfist::{Funf, Value};
use proptest::prelude::*;

// =============================================================================
// Test Functions
// =============================================================================

/// An order-sensitive fold over integer arguments that never overflows.
fn checksum(arguments: &[Value]) -> funfist::Result<Value> {
    let mut total: i64 = 17;
    for argument in arguments {
        total = total.wrapping_mul(31).wrapping_add(argument.as_int()?);
    }
    Ok(Value::Int(total))
}

fn integers(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::Int).collect()
}

/// An arity in the supported range together with enough arguments for it.
fn arity_and_arguments(extra: usize) -> impl Strategy<Value = (usize, Vec<i64>)> {
    (0usize..=16).prop_flat_map(move |arity| {
        (
            Just(arity),
            prop::collection::vec(-1000i64..1000, arity + extra..=arity + extra),
        )
    })
}

proptest! {
    // =========================================================================
    // Overflow
    // =========================================================================

    #[test]
    fn prop_overflow_appends_leftovers_in_order(
        (arity, values) in (1usize..=4).prop_flat_map(arity_and_arguments)
    ) {
        let function = Funf::native(arity, checksum);
        let arguments = integers(&values);
        let (consumed, leftover) = arguments.split_at(arity);

        let mut expected = vec![checksum(consumed).unwrap()];
        expected.extend_from_slice(leftover);

        prop_assert_eq!(function.call(&arguments).unwrap(), Value::from(expected));
    }

    // =========================================================================
    // Partial Application
    // =========================================================================

    #[test]
    fn prop_partial_then_rest_equals_full_call(
        (arity, values) in arity_and_arguments(0).prop_filter("needs an argument", |(arity, _)| *arity > 0),
        split_seed in any::<usize>(),
    ) {
        let split = split_seed % arity;
        let function = Funf::native(arity, checksum);
        let arguments = integers(&values);
        let (bound, remaining) = arguments.split_at(split);

        let partial = function.call(bound).unwrap();
        let partial = partial.as_funf().unwrap();
        prop_assert_eq!(partial.arity(), (arity - split) as isize);
        prop_assert_eq!(partial.call(remaining).unwrap(), checksum(&arguments).unwrap());
    }

    #[test]
    fn prop_partial_call_matches_capture(
        (arity, values) in arity_and_arguments(0).prop_filter("needs an argument", |(arity, _)| *arity > 1),
    ) {
        let function = Funf::native(arity, checksum);
        let arguments = integers(&values);
        let (bound, remaining) = arguments.split_at(1);

        let called = function.call(bound).unwrap();
        let captured = function.capture(bound);

        prop_assert_eq!(called.as_funf().unwrap().arity(), captured.arity());
        prop_assert_eq!(
            called.as_funf().unwrap().call(remaining).unwrap(),
            captured.call(remaining).unwrap()
        );
    }

    // =========================================================================
    // Composition
    // =========================================================================

    #[test]
    fn prop_compose_arity_is_sum(inner_arity in 0usize..=16, outer_arity in 0usize..=16) {
        let inner = Funf::native(inner_arity, checksum);
        let outer = Funf::native(outer_arity, checksum);
        prop_assert_eq!(
            outer.compose(&inner).arity(),
            (inner_arity + outer_arity) as isize
        );
    }

    #[test]
    fn prop_compose_feeds_inner_result(
        inner_arity in 0usize..=6,
        outer_arity in 1usize..=6,
        seed in prop::collection::vec(-1000i64..1000, 12),
    ) {
        let inner = Funf::native(inner_arity, checksum);
        let outer = Funf::native(outer_arity, checksum);
        let arguments = integers(&seed[..inner_arity + outer_arity]);
        let (xs, ys) = arguments.split_at(inner_arity);

        let mut fed = vec![checksum(xs).unwrap()];
        fed.extend_from_slice(ys);
        let expected = outer.call(&fed).unwrap();

        prop_assert_eq!(outer.compose(&inner).call(&arguments).unwrap(), expected);
    }

    // =========================================================================
    // Function Arguments
    // =========================================================================

    #[test]
    fn prop_function_argument_result_takes_its_position(
        arity in 1usize..=8,
        inner_arity in 0usize..=4,
        before_seed in any::<usize>(),
        after_seed in any::<usize>(),
        pool in prop::collection::vec(-1000i64..1000, 32),
    ) {
        let before = before_seed % arity;
        let after = after_seed % (arity - before + 1);
        let function = Funf::native(arity, checksum);
        let inner = Funf::native(inner_arity, checksum);

        let (xs, rest) = pool.split_at(before);
        let (ys, rest) = rest.split_at(after);
        let remaining = inner_arity + arity - before - after;
        let zs = integers(&rest[..remaining]);

        let mut captured = integers(xs);
        captured.push(Value::from(inner.clone()));
        captured.extend(integers(ys));
        let captured = function.capture(&captured);
        prop_assert_eq!(captured.arity(), remaining as isize);

        let (consumed, leftover) = zs.split_at(inner_arity);
        let mut direct = integers(xs);
        direct.push(checksum(consumed).unwrap());
        direct.extend(integers(ys));
        direct.extend_from_slice(leftover);

        prop_assert_eq!(captured.call(&zs).unwrap(), function.call(&direct).unwrap());
    }
}
