//! Error type shared by function values and lists.
//!
//! The runtime itself treats arity arithmetic and list structure as total
//! functions. Errors only come from three places:
//!
//! - a destructuring accessor that meets a shape it has no case for
//!   ([`Error::ArgumentMismatch`]);
//! - a native callable that fails while executing ([`Error::Failure`],
//!   [`Error::Custom`], [`Error::TypeMismatch`]), which is handed back to the
//!   caller unchanged;
//! - the sink written to by `print`/`println` ([`Error::Io`]).
//!
//! # Examples
//!
//! ```rust
//! use funfist::{Error, Funf, Value};
//!
//! let failing = Funf::native(1, |_| Err(Error::failure("boom")));
//! let error = failing.call(&[Value::Nil]).unwrap_err();
//! assert_eq!(error.to_string(), "boom");
//! ```

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(feature = "arc")]
type BoxedSource = Box<dyn std::error::Error + Send + Sync + 'static>;

#[cfg(not(feature = "arc"))]
type BoxedSource = Box<dyn std::error::Error + 'static>;

/// Errors raised while calling function values or walking lists.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation destructured a value whose shape it has no case for.
    #[error("argument mismatch in {operation}: expected {expected}, found {found}")]
    ArgumentMismatch {
        /// The operation that failed to match.
        operation: &'static str,
        /// The shape the operation can handle.
        expected: String,
        /// The shape it was given.
        found: String,
    },

    /// A `Value` accessor was used on a value of another kind.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The kind the accessor recovers.
        expected: &'static str,
        /// The kind of the value it was given.
        found: &'static str,
    },

    /// A native callable reported a failure with a message.
    #[error("{0}")]
    Failure(String),

    /// A native callable reported a failure from another error type.
    #[error(transparent)]
    Custom(BoxedSource),

    /// Writing to a print sink failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a [`Error::Failure`] from a message.
    ///
    /// Intended for native callables that need to abort a call.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    /// Wraps any error type as [`Error::Custom`].
    #[cfg(not(feature = "arc"))]
    #[must_use]
    pub fn custom(source: impl std::error::Error + 'static) -> Self {
        Self::Custom(Box::new(source))
    }

    /// Wraps any error type as [`Error::Custom`].
    #[cfg(feature = "arc")]
    #[must_use]
    pub fn custom(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Custom(Box::new(source))
    }

    /// Creates a [`Error::ArgumentMismatch`].
    #[must_use]
    pub fn argument_mismatch(
        operation: &'static str,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::ArgumentMismatch {
            operation,
            expected: expected.into(),
            found: found.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_argument_mismatch_display() {
        let error = Error::argument_mismatch("first", "a cell", "an empty list");
        assert_eq!(
            error.to_string(),
            "argument mismatch in first: expected a cell, found an empty list"
        );
    }

    #[rstest]
    fn test_type_mismatch_display() {
        let error = Error::TypeMismatch {
            expected: "int",
            found: "str",
        };
        assert_eq!(error.to_string(), "type mismatch: expected int, found str");
    }

    #[rstest]
    fn test_failure_display_is_the_message() {
        assert_eq!(Error::failure("division by zero").to_string(), "division by zero");
    }

    #[rstest]
    fn test_custom_is_transparent() {
        let parse_error = "x".parse::<i64>().unwrap_err();
        let expected = parse_error.to_string();
        assert_eq!(Error::custom(parse_error).to_string(), expected);
    }

    #[rstest]
    fn test_io_error_converts() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let error: Error = io_error.into();
        assert!(matches!(error, Error::Io(_)));
        assert_eq!(error.to_string(), "closed");
    }
}
