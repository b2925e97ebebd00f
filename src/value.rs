//! Opaque payload carried by function values and lists.
//!
//! [`Value`] is a closed sum over the kinds of data the runtime moves around.
//! The calling convention and the list structure never look inside a value,
//! with three exceptions:
//!
//! - `capture` checks whether an argument is a function ([`Value::Fun`]);
//! - `all`/`any` read [`Value::is_truthy`];
//! - `print`/`println` write the [`Display`](std::fmt::Display) form.
//!
//! Native callables recover concrete kinds with the `as_*` accessors, which
//! fail with [`Error::TypeMismatch`] on the wrong kind.
//!
//! # Examples
//!
//! ```rust
//! use funfist::Value;
//!
//! let value = Value::from(21);
//! assert_eq!(value.as_int().unwrap() * 2, 42);
//! assert!(value.as_str().is_err());
//!
//! assert!(!Value::from(0).is_truthy());
//! assert!(Value::from("text").is_truthy());
//! ```

use std::fmt;

#[cfg(feature = "fist")]
use crate::fist::Fist;
use crate::funf::Funf;
use crate::{Error, ReferenceCounter, Result};

/// A dynamically-kinded value.
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit float.
    Float(f64),
    /// A shared string.
    Str(ReferenceCounter<str>),
    /// A shared sequence. Overflowing calls return this shape.
    Seq(ReferenceCounter<[Value]>),
    /// A persistent list.
    #[cfg(feature = "fist")]
    List(Fist),
    /// A function value.
    Fun(Funf),
}

impl Value {
    /// Builds a [`Value::Seq`] from anything convertible into values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funfist::Value;
    ///
    /// let seq = Value::seq([1, 2, 3]);
    /// assert_eq!(seq.to_string(), "[1, 2, 3]");
    /// ```
    pub fn seq<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Self>,
    {
        Self::Seq(values.into_iter().map(Into::into).collect())
    }

    /// Name of this value's kind, as used in error messages.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Seq(_) => "seq",
            #[cfg(feature = "fist")]
            Self::List(_) => "list",
            Self::Fun(_) => "funf",
        }
    }

    /// Returns `true` for [`Value::Nil`].
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Truthiness as read by predicate scans.
    ///
    /// `nil`, `false`, `0`, `0.0`, `NaN` and the empty string are falsy.
    /// Everything else is truthy, including empty sequences and lists.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Nil => false,
            Self::Bool(value) => *value,
            Self::Int(value) => *value != 0,
            Self::Float(value) => *value != 0.0 && !value.is_nan(),
            Self::Str(value) => !value.is_empty(),
            _ => true,
        }
    }

    /// Recovers an integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for any other kind.
    pub fn as_int(&self) -> Result<i64> {
        match self {
            Self::Int(value) => Ok(*value),
            other => Err(other.mismatch("int")),
        }
    }

    /// Recovers a float. Integers are widened.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for any non-numeric kind.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self) -> Result<f64> {
        match self {
            Self::Float(value) => Ok(*value),
            Self::Int(value) => Ok(*value as f64),
            other => Err(other.mismatch("float")),
        }
    }

    /// Recovers a boolean.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for any other kind.
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Self::Bool(value) => Ok(*value),
            other => Err(other.mismatch("bool")),
        }
    }

    /// Recovers a string slice.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for any other kind.
    pub fn as_str(&self) -> Result<&str> {
        match self {
            Self::Str(value) => Ok(value),
            other => Err(other.mismatch("str")),
        }
    }

    /// Recovers the elements of a sequence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for any other kind.
    pub fn as_seq(&self) -> Result<&[Self]> {
        match self {
            Self::Seq(values) => Ok(values),
            other => Err(other.mismatch("seq")),
        }
    }

    /// Recovers a list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for any other kind.
    #[cfg(feature = "fist")]
    pub fn as_list(&self) -> Result<&Fist> {
        match self {
            Self::List(list) => Ok(list),
            other => Err(other.mismatch("list")),
        }
    }

    /// Recovers a function value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for any other kind.
    pub fn as_funf(&self) -> Result<&Funf> {
        match self {
            Self::Fun(function) => Ok(function),
            other => Err(other.mismatch("funf")),
        }
    }

    const fn mismatch(&self, expected: &'static str) -> Error {
        Error::TypeMismatch {
            expected,
            found: self.kind_name(),
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl PartialEq for Value {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Str(left), Self::Str(right)) => left == right,
            (Self::Seq(left), Self::Seq(right)) => left == right,
            #[cfg(feature = "fist")]
            (Self::List(left), Self::List(right)) => left == right,
            (Self::Fun(left), Self::Fun(right)) => left.ptr_eq(right),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => formatter.write_str("nil"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Int(value) => write!(formatter, "{value}"),
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Str(value) => formatter.write_str(value),
            Self::Seq(values) => {
                write!(formatter, "[")?;
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{value}")?;
                }
                write!(formatter, "]")
            }
            #[cfg(feature = "fist")]
            Self::List(list) => write!(formatter, "{list}"),
            Self::Fun(function) => write!(formatter, "{function}"),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Nil
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(ReferenceCounter::from(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(ReferenceCounter::from(value))
    }
}

impl From<Vec<Self>> for Value {
    fn from(values: Vec<Self>) -> Self {
        Self::Seq(ReferenceCounter::from(values))
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

#[cfg(feature = "fist")]
impl From<Fist> for Value {
    fn from(list: Fist) -> Self {
        Self::List(list)
    }
}

impl From<Funf> for Value {
    fn from(function: Funf) -> Self {
        Self::Fun(function)
    }
}

// =============================================================================
// Thread Safety
// =============================================================================

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Value: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Value: Send, Sync);
