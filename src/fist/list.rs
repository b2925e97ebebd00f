//! Persistent (immutable) singly-linked list with deferred mapping.
//!
//! This module provides [`Fist`], an immutable cons-list that uses structural
//! sharing for efficient operations, and whose [`map`](Fist::map) is applied
//! lazily while the list is traversed.
//!
//! # Overview
//!
//! - O(1) prepend (`cons`)
//! - O(1) `map` (nothing is evaluated until a traversal reaches each element)
//! - O(1) `uncons` (one mapping step per pending map)
//! - O(n) `len`, `reverse`, `reduce`
//!
//! # Structural Sharing
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.cons(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! ```
//!
//! # Lazy Mapping
//!
//! ```text
//! map(nil, f)           ~ nil
//! map(x -> rest, f)     ~ f(x) -> map(rest, f)
//! ```
//!
//! The right-hand side is computed by each traversal step, once per element
//! per traversal.

use std::fmt;
use std::iter::FromIterator;

use crate::{Error, Funf, ReferenceCounter, Result, Value};

/// A cons cell: a head value and a shared tail.
pub struct Cell {
    head: Value,
    tail: Fist,
}

impl Cell {
    /// The element stored in this cell.
    #[inline]
    #[must_use]
    pub const fn head(&self) -> &Value {
        &self.head
    }

    /// The rest of the list.
    #[inline]
    #[must_use]
    pub const fn tail(&self) -> &Fist {
        &self.tail
    }
}

/// A pending map: `function` applied to every element of `source`.
pub struct Mapped {
    source: Fist,
    function: Funf,
}

impl Mapped {
    /// The list being mapped.
    #[inline]
    #[must_use]
    pub const fn source(&self) -> &Fist {
        &self.source
    }

    /// The function applied to each element.
    #[inline]
    #[must_use]
    pub const fn function(&self) -> &Funf {
        &self.function
    }
}

impl Drop for Cell {
    fn drop(&mut self) {
        unlink(std::mem::take(&mut self.tail));
    }
}

impl Drop for Mapped {
    fn drop(&mut self) {
        unlink(std::mem::take(&mut self.source));
    }
}

/// Releases a chain of nodes one at a time.
///
/// Stops at the first node that is still shared, leaving it to its other
/// owners. Each node freed here has an empty tail by then, so dropping it
/// does not recurse.
fn unlink(mut next: Fist) {
    loop {
        next = match next {
            Fist::Empty => break,
            Fist::Cell(cell) => match ReferenceCounter::try_unwrap(cell) {
                Ok(mut cell) => std::mem::take(&mut cell.tail),
                Err(_) => break,
            },
            Fist::Mapped(mapped) => match ReferenceCounter::try_unwrap(mapped) {
                Ok(mut mapped) => std::mem::take(&mut mapped.source),
                Err(_) => break,
            },
        };
    }
}

/// A persistent singly-linked list.
///
/// A list is one of three shapes. Traversals treat a [`Fist::Mapped`] node as
/// the empty list or a cell, depending on its source, and evaluate the mapped
/// head when they reach it.
///
/// # Time Complexity
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `new`     | O(1)       |
/// | `cons`    | O(1)       |
/// | `map`     | O(1)       |
/// | `uncons`  | O(m), m pending maps on the node |
/// | `len`     | O(n), never evaluates maps |
/// | `reverse` | O(n)       |
///
/// # Examples
///
/// ```rust
/// use funfist::{fist, funf, Value};
///
/// let list = fist![1, 2, 3];
/// let squares = list.map(&funf!(|value| value.as_int()?.pow(2)));
/// assert_eq!(squares.to_vec().unwrap(), vec![Value::Int(1), Value::Int(4), Value::Int(9)]);
/// ```
#[derive(Clone, Default)]
pub enum Fist {
    /// The empty list.
    #[default]
    Empty,
    /// A head value followed by a tail list.
    Cell(ReferenceCounter<Cell>),
    /// A deferred map over another list.
    Mapped(ReferenceCounter<Mapped>),
}

impl Fist {
    /// Creates a new empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funfist::Fist;
    ///
    /// assert!(Fist::new().is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::Empty
    }

    /// Creates a list containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: impl Into<Value>) -> Self {
        Self::new().cons(element)
    }

    /// Prepends an element to the front of the list.
    ///
    /// The new list shares the whole of `self` as its tail.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funfist::{Fist, Value};
    ///
    /// let list = Fist::new().cons(3).cons(2).cons(1);
    /// assert_eq!(list.first().unwrap(), Value::Int(1));
    /// assert_eq!(list.len(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(&self, element: impl Into<Value>) -> Self {
        Self::Cell(ReferenceCounter::new(Cell {
            head: element.into(),
            tail: self.clone(),
        }))
    }

    /// Maps `function` over the list without evaluating anything.
    ///
    /// Each traversal that reaches an element calls `function` with that
    /// element as its only argument.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funfist::{fist, funf, Value};
    ///
    /// let doubled = fist![1, 2].map(&funf!(|value| value.as_int()? * 2));
    /// assert_eq!(doubled.to_string(), "fist(2, 4)");
    /// ```
    #[must_use]
    pub fn map(&self, function: &Funf) -> Self {
        tracing::debug!(arity = function.arity(), "lazy map created");
        self.mapped(function)
    }

    fn mapped(&self, function: &Funf) -> Self {
        Self::Mapped(ReferenceCounter::new(Mapped {
            source: self.clone(),
            function: function.clone(),
        }))
    }

    /// Returns `true` if the list has no elements.
    ///
    /// Never evaluates a pending map: a mapped list is empty exactly when its
    /// source is.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let mut current = self;
        loop {
            match current {
                Self::Empty => return true,
                Self::Cell(_) => return false,
                Self::Mapped(mapped) => current = &mapped.source,
            }
        }
    }

    /// Returns the number of elements.
    ///
    /// Mapping preserves length, so this never evaluates a pending map.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn len(&self) -> usize {
        let mut current = self;
        let mut length = 0;
        loop {
            match current {
                Self::Empty => return length,
                Self::Cell(cell) => {
                    length += 1;
                    current = &cell.tail;
                }
                Self::Mapped(mapped) => current = &mapped.source,
            }
        }
    }

    /// Decomposes the list into its head and tail, evaluating a pending map
    /// on the first node if there is one.
    ///
    /// Returns `None` for an empty list.
    ///
    /// # Errors
    ///
    /// Returns the error of a mapped function that fails on the head.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funfist::{fist, Value};
    ///
    /// let list = fist![1, 2];
    /// let (head, tail) = list.uncons().unwrap().unwrap();
    /// assert_eq!(head, Value::Int(1));
    /// assert_eq!(tail.len(), 1);
    /// ```
    pub fn uncons(&self) -> Result<Option<(Value, Self)>> {
        match self {
            Self::Empty => Ok(None),
            Self::Cell(cell) => Ok(Some((cell.head.clone(), cell.tail.clone()))),
            Self::Mapped(mapped) => {
                let Some((head, tail)) = mapped.source.uncons()? else {
                    return Ok(None);
                };
                let head = mapped.function.call(&[head])?;
                Ok(Some((head, tail.mapped(&mapped.function))))
            }
        }
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArgumentMismatch`] for an empty list, or the error
    /// of a failing mapped function.
    pub fn first(&self) -> Result<Value> {
        self.uncons()?
            .map(|(head, _)| head)
            .ok_or_else(|| Error::argument_mismatch("first", "a non-empty list", "an empty list"))
    }

    /// Returns the list without its first element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArgumentMismatch`] for an empty list, or the error
    /// of a failing mapped function.
    pub fn rest(&self) -> Result<Self> {
        self.uncons()?
            .map(|(_, tail)| tail)
            .ok_or_else(|| Error::argument_mismatch("rest", "a non-empty list", "an empty list"))
    }

    /// Returns an iterator that evaluates elements as it reaches them.
    ///
    /// The iterator yields `Err` once if a mapped function fails, then stops.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funfist::{fist, Value};
    ///
    /// let list = fist![1, 2, 3];
    /// let collected: Vec<Value> = list.iter().collect::<Result<_, _>>().unwrap();
    /// assert_eq!(collected, vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> FistIterator {
        FistIterator {
            current: self.clone(),
        }
    }

    /// Collects every element, evaluating all pending maps.
    ///
    /// # Errors
    ///
    /// Returns the first error of a failing mapped function.
    pub fn to_vec(&self) -> Result<Vec<Value>> {
        self.iter().collect()
    }

    /// Builds a list from a Vec, keeping the order.
    fn build_from_vec(mut elements: Vec<Value>) -> Self {
        let mut list = Self::new();
        while let Some(element) = elements.pop() {
            list = list.cons(element);
        }
        list
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over the elements of a [`Fist`], evaluating pending maps.
#[derive(Clone)]
pub struct FistIterator {
    current: Fist,
}

impl Iterator for FistIterator {
    type Item = Result<Value>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current.uncons() {
            Ok(Some((head, tail))) => {
                self.current = tail;
                Some(Ok(head))
            }
            Ok(None) => None,
            Err(error) => {
                self.current = Fist::Empty;
                Some(Err(error))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.current.len()))
    }
}

impl IntoIterator for &Fist {
    type Item = Result<Value>;
    type IntoIter = FistIterator;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl FromIterator<Value> for Fist {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

impl<V: Into<Value>> From<Vec<V>> for Fist {
    fn from(elements: Vec<V>) -> Self {
        Self::build_from_vec(elements.into_iter().map(Into::into).collect())
    }
}

/// Compares element by element, evaluating pending maps on both sides.
///
/// A mapped function that fails makes the lists compare unequal.
impl PartialEq for Fist {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.iter();
        let mut right = other.iter();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(Ok(left_element)), Some(Ok(right_element)))
                    if left_element == right_element => {}
                _ => return false,
            }
        }
    }
}

impl fmt::Debug for Fist {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => formatter.write_str("Empty"),
            Self::Cell(cell) => formatter
                .debug_struct("Cell")
                .field("head", &cell.head)
                .field("tail", &cell.tail)
                .finish(),
            Self::Mapped(mapped) => formatter
                .debug_struct("Mapped")
                .field("function", &mapped.function)
                .field("source", &mapped.source)
                .finish(),
        }
    }
}

/// Writes `fist(a, b, c)`, evaluating pending maps.
///
/// A mapped function that fails surfaces as [`fmt::Error`].
impl fmt::Display for Fist {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "fist(")?;
        for (index, element) in self.iter().enumerate() {
            let element = element.map_err(|_| fmt::Error)?;
            if index > 0 {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, ")")
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Fist: Send, Sync);
