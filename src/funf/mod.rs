//! Arity-aware function values.
//!
//! This module provides [`Funf`], a function value that supports currying,
//! partial application, argument overflow and composition through a single
//! calling convention.
//!
//! # Overview
//!
//! - [`Funf::native`] / [`funf!`](crate::funf!): wrap a native callable of any
//!   arity
//! - [`Funf::call`] / [`Funf::apply`]: run, capture or overflow depending on
//!   how many arguments are supplied
//! - [`Funf::capture`]: bind arguments without running
//! - [`Funf::compose`] / [`Funf::pipe`]: chain two function values
//!
//! # Helper Functions
//!
//! - [`identity`]: returns its argument
//! - [`constant`]: always returns the same value
//! - [`flip`]: swaps the first two arguments
//!
//! # Calling Convention
//!
//! With `a = f.arity()` and `n` supplied arguments:
//!
//! ```text
//! n <  a   call(f, xs)         == capture(f, xs)              arity a - n
//! n == a   call(f, xs)         == native(xs)
//! n >  a   call(f, xs ++ ys)   == [native(xs), ys...]         len(xs) == a
//! ```
//!
//! Composition feeds the inner result into the outer's first slot:
//!
//! ```text
//! arity(compose(g, f))          == arity(f) + arity(g)
//! compose(g, f)(xs ++ ys)       == g(f(xs), ys...)            len(xs) == arity(f)
//! ```
//!
//! # Examples
//!
//! ```
//! use funfist::{funf, Value};
//!
//! let multiply = funf!(|left, right| left.as_int()? * right.as_int()?);
//! let triple = multiply.apply([3]).unwrap();
//! let triple = triple.as_funf().unwrap();
//!
//! assert_eq!(triple.apply([7]).unwrap(), Value::Int(21));
//! ```

mod function;
mod macros;
mod utils;

pub use function::{Arguments, Funf, FunfKind, NativeFn};
pub use utils::{constant, flip, identity};
