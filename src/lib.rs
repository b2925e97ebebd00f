//! # funfist
//!
//! A small functional runtime: arity-aware function values and a lazily
//! mappable persistent cons-list.
//!
//! ## Overview
//!
//! - **Function values** ([`Funf`]): wrap a native callable together with its
//!   arity, then call it with any number of arguments. Too few arguments
//!   capture a partial application, too many overflow into a sequence of the
//!   result followed by the unused arguments, and function values passed as
//!   arguments are composed in place.
//! - **Persistent lists** ([`Fist`]): an immutable cons-list with structural
//!   sharing whose `map` is deferred until a traversal (`reduce`, `reverse`,
//!   `all`, `any`, `print`) reaches each element.
//!
//! Payloads are dynamically kinded [`Value`]s. The runtime never inspects
//! them beyond what `capture`, `all`/`any` and `print` need.
//!
//! ## Feature Flags
//!
//! - `fist` (default): persistent lists
//! - `arc`: share nodes through `Arc` instead of `Rc`, making every value
//!   `Send + Sync` (native callables must then be `Send + Sync` as well)
//!
//! ## Example
//!
//! ```rust
//! use funfist::prelude::*;
//!
//! let add = funf!(|left, right| left.as_int()? + right.as_int()?);
//! let increment = add.apply([1]).unwrap();
//! assert_eq!(increment.as_funf().unwrap().apply([41]).unwrap(), Value::Int(42));
//!
//! let list = fist![1, 2, 3, 4];
//! let doubled = list.map(&funf!(|value| value.as_int()? * 2));
//! assert_eq!(doubled.reduce(&add).unwrap(), Some(Value::Int(20)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the value types and the construction macros.
///
/// # Usage
///
/// ```rust
/// use funfist::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::funf::*;
    pub use crate::value::Value;

    pub use crate::funf;

    #[cfg(feature = "fist")]
    pub use crate::fist;
    #[cfg(feature = "fist")]
    pub use crate::fist::*;
}

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

mod error;
mod value;

pub mod funf;

#[cfg(feature = "fist")]
pub mod fist;

pub use error::{Error, Result};
pub use funf::Funf;
pub use value::Value;

#[cfg(feature = "fist")]
pub use fist::Fist;

#[cfg(test)]
mod reference_counter_tests {
    use super::ReferenceCounter;
    use rstest::rstest;

    #[rstest]
    fn test_reference_counter_strong_count() {
        let reference_counter: ReferenceCounter<i32> = ReferenceCounter::new(42);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
        let reference_counter_clone = reference_counter.clone();
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 2);
        drop(reference_counter_clone);
        assert_eq!(ReferenceCounter::strong_count(&reference_counter), 1);
    }
}
