//! Combinators built as function values.
//!
//! - [`identity`]: returns its argument (I combinator)
//! - [`constant`]: ignores its argument and returns a fixed value (K combinator)
//! - [`flip`]: swaps the first two arguments of a function value (C combinator)
//!
//! They are ordinary [`Funf`]s, so they capture, compose and overflow like
//! any other.

use crate::{Funf, Value};

/// The identity function value, arity 1.
///
/// Composing with it on either side leaves results unchanged, apart from the
/// extra argument slot composition always adds.
///
/// # Examples
///
/// ```
/// use funfist::funf::identity;
/// use funfist::Value;
///
/// assert_eq!(identity().apply([42]).unwrap(), Value::Int(42));
/// ```
#[must_use]
pub fn identity() -> Funf {
    crate::funf!(|value| value.clone())
}

/// A function value of arity 1 that always returns `value`.
///
/// # Examples
///
/// ```
/// use funfist::funf::constant;
/// use funfist::Value;
///
/// let always_five = constant(5);
/// assert_eq!(always_five.apply(["ignored"]).unwrap(), Value::Int(5));
/// ```
#[must_use]
pub fn constant(value: impl Into<Value>) -> Funf {
    let value = value.into();
    crate::funf!(|_ignored| value.clone())
}

/// Swaps the first two arguments of `function`.
///
/// The result has arity 2; `flip(f)(a, b) == f(b, a)`. Extra arity of
/// `function` is left to the calling convention: a three-argument `f`
/// flipped and called with two arguments yields a partial application.
///
/// # Examples
///
/// ```
/// use funfist::funf::flip;
/// use funfist::{funf, Value};
///
/// let subtract = funf!(|left, right| left.as_int()? - right.as_int()?);
/// assert_eq!(flip(&subtract).apply([1, 10]).unwrap(), Value::Int(9));
/// ```
#[must_use]
pub fn flip(function: &Funf) -> Funf {
    let function = function.clone();
    crate::funf!(|first, second| function.call(&[second.clone(), first.clone()])?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_identity_with_nil() {
        assert_eq!(identity().apply([()]).unwrap(), Value::Nil);
    }

    #[rstest]
    fn test_constant_with_string() {
        let always_hello = constant("hello");
        assert_eq!(always_hello.apply([42]).unwrap(), Value::from("hello"));
    }

    #[rstest]
    fn test_double_flip_is_identity() {
        let subtract = crate::funf!(|left, right| left.as_int()? - right.as_int()?);
        let flipped_twice = flip(&flip(&subtract));
        assert_eq!(
            flipped_twice.apply([10, 3]).unwrap(),
            subtract.apply([10, 3]).unwrap()
        );
    }

    #[rstest]
    fn test_flip_of_wider_function_is_partial() {
        let three = crate::funf!(|a, b, c| format!("{a}{b}{c}"));
        let partial = flip(&three).apply(["x", "y"]).unwrap();
        assert_eq!(partial.as_funf().unwrap().apply(["z"]).unwrap(), Value::from("yxz"));
    }
}
