//! Persistent cons-lists with deferred mapping.
//!
//! [`Fist`] is an immutable singly-linked list whose tails are shared between
//! versions. [`Fist::map`] does not walk the list: it records the function
//! next to the source and the element is computed the first time it is
//! visited.
//!
//! # Overview
//!
//! - Construction: [`Fist::new`], [`Fist::cons`], [`fist!`](crate::fist!),
//!   `FromIterator`, `From<Vec<_>>`
//! - Inspection (never evaluates): [`Fist::is_empty`], [`Fist::len`]
//! - Access (evaluates the front): [`Fist::uncons`], [`Fist::first`],
//!   [`Fist::rest`]
//! - Traversal (evaluates in order): [`Fist::iter`], [`Fist::reduce`],
//!   [`Fist::reduce_with`], [`Fist::reverse`], [`Fist::all`], [`Fist::any`]
//! - Output: [`Fist::print`], [`Fist::println`]
//!
//! # Laziness
//!
//! A mapped element is recomputed each time it is reached; results are not
//! cached. Side effects in the mapping function therefore happen once per
//! visit, in list order.
//!
//! # Examples
//!
//! ```
//! use funfist::{fist, funf, Value};
//!
//! let double = funf!(|value| value.as_int()? * 2);
//! let doubled = fist![1, 2, 3].map(&double);
//!
//! assert_eq!(doubled.first().unwrap(), Value::Int(2));
//! assert_eq!(doubled.reverse().unwrap(), fist![6, 4, 2]);
//! ```

mod list;
mod macros;
mod print;
mod traverse;

pub use list::{Cell, Fist, FistIterator, Mapped};
pub use print::DEFAULT_DELIMITER;
