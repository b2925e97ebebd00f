//! The function value and its calling convention.

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use crate::{ReferenceCounter, Result, Value};

/// Inline capacity for held argument sequences.
///
/// Most captures hold a handful of arguments, so they stay off the heap.
pub(crate) const ARGUMENT_INLINE_CAPACITY: usize = 4;

/// An ordered sequence of arguments held by a derived function value.
pub type Arguments = SmallVec<[Value; ARGUMENT_INLINE_CAPACITY]>;

/// A native callable: receives exactly as many arguments as its declared arity.
#[cfg(not(feature = "arc"))]
pub trait NativeFn: Fn(&[Value]) -> Result<Value> {}

#[cfg(not(feature = "arc"))]
impl<F> NativeFn for F where F: Fn(&[Value]) -> Result<Value> {}

/// A native callable: receives exactly as many arguments as its declared arity.
#[cfg(feature = "arc")]
pub trait NativeFn: Fn(&[Value]) -> Result<Value> + Send + Sync {}

#[cfg(feature = "arc")]
impl<F> NativeFn for F where F: Fn(&[Value]) -> Result<Value> + Send + Sync {}

/// Which variant a [`Funf`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FunfKind {
    /// A native callable.
    Wrapped,
    /// An inner function value plus arguments supplied ahead of time.
    Captured,
    /// An outer function value fed by the result of an inner one.
    Composed,
}

enum Node {
    Wrapped {
        arity: isize,
        function: Box<dyn NativeFn>,
    },
    Captured {
        inner: Funf,
        arguments: Arguments,
        arity: isize,
    },
    Composed {
        outer: Funf,
        inner: Funf,
        arguments: Arguments,
        bound: Arguments,
        arity: isize,
    },
}

/// An arity-aware function value.
///
/// A `Funf` knows how many arguments it still needs (its [`arity`]) and
/// resolves every [`call`] against that number:
///
/// | Supplied `n` vs arity `a` | Result |
/// |---------------------------|--------|
/// | `n < a` | a captured `Funf` of arity `a - n`, as [`Value::Fun`] |
/// | `n == a` | the result of running the native callable |
/// | `n > a` | `[result, args[a], ..., args[n - 1]]`, as [`Value::Seq`] |
///
/// Function values are immutable. Capturing, composing and calling always
/// produce new values that share their parents.
///
/// # Examples
///
/// ```rust
/// use funfist::{funf, Value};
///
/// let add = funf!(|left, right| left.as_int()? + right.as_int()?);
/// assert_eq!(add.arity(), 2);
///
/// // exact
/// assert_eq!(add.apply([2, 3]).unwrap(), Value::Int(5));
///
/// // partial
/// let add_two = add.apply([2]).unwrap();
/// assert_eq!(add_two.as_funf().unwrap().arity(), 1);
///
/// // overflow
/// assert_eq!(add.apply([2, 3, 4]).unwrap(), Value::seq([5, 4]));
/// ```
///
/// [`arity`]: Funf::arity
/// [`call`]: Funf::call
#[derive(Clone)]
pub struct Funf {
    node: ReferenceCounter<Node>,
}

impl Funf {
    /// Wraps a native callable of the given arity.
    ///
    /// The callable always receives a slice of exactly `arity` arguments.
    /// See [`funf!`](crate::funf!) for positional closures.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funfist::{Funf, Value};
    ///
    /// let count = Funf::native(3, |arguments| Ok(Value::from(arguments.len())));
    /// assert_eq!(count.apply([1, 2, 3]).unwrap(), Value::Int(3));
    /// ```
    pub fn native<F>(arity: usize, function: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + NativeFn + 'static,
    {
        Self::from_node(Node::Wrapped {
            arity: signed(arity),
            function: Box::new(function),
        })
    }

    fn from_node(node: Node) -> Self {
        Self {
            node: ReferenceCounter::new(node),
        }
    }

    fn captured(inner: Self, arguments: Arguments) -> Self {
        let arity = inner.arity().saturating_sub(signed(arguments.len()));
        Self::from_node(Node::Captured {
            inner,
            arguments,
            arity,
        })
    }

    fn composed(outer: Self, inner: Self, arguments: Arguments, bound: Arguments) -> Self {
        let arity = inner
            .arity()
            .saturating_add(outer.arity())
            .saturating_sub(signed(arguments.len()))
            .saturating_add(bound_offset(&bound));
        Self::from_node(Node::Composed {
            outer,
            inner,
            arguments,
            bound,
            arity,
        })
    }

    /// Number of arguments still needed before the native callable runs.
    ///
    /// Negative when more arguments are held than the innermost callable
    /// consumes; the surplus is reported when the value is called.
    #[inline]
    #[must_use]
    pub fn arity(&self) -> isize {
        match &*self.node {
            Node::Wrapped { arity, .. }
            | Node::Captured { arity, .. }
            | Node::Composed { arity, .. } => *arity,
        }
    }

    /// Which variant this value is.
    #[must_use]
    pub fn kind(&self) -> FunfKind {
        match &*self.node {
            Node::Wrapped { .. } => FunfKind::Wrapped,
            Node::Captured { .. } => FunfKind::Captured,
            Node::Composed { .. } => FunfKind::Composed,
        }
    }

    /// Returns `true` if both handles point to the same function value.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.node, &other.node)
    }

    /// Calls this function value with the given arguments.
    ///
    /// - Fewer arguments than [`arity`](Funf::arity): same as
    ///   [`capture`](Funf::capture), returned as [`Value::Fun`].
    /// - Exactly `arity` arguments: the result of the native callable.
    /// - More: a [`Value::Seq`] holding the result of running with the first
    ///   `arity` arguments, followed by the remaining arguments in order.
    ///
    /// # Errors
    ///
    /// Any error returned by a native callable is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funfist::{funf, Value};
    ///
    /// let negate = funf!(|value| -value.as_int()?);
    /// let result = negate.call(&[Value::from(1), Value::from("rest")]).unwrap();
    /// assert_eq!(result, Value::seq([Value::from(-1), Value::from("rest")]));
    /// ```
    pub fn call(&self, arguments: &[Value]) -> Result<Value> {
        let arity = self.arity();
        let supplied = signed(arguments.len());

        match supplied.cmp(&arity) {
            Ordering::Less => {
                tracing::trace!(arity, supplied, "partial call captured");
                Ok(Value::Fun(self.capture(arguments)))
            }
            Ordering::Equal => {
                tracing::trace!(arity, "call executed");
                self.execute(arguments)
            }
            Ordering::Greater => match usize::try_from(arity) {
                Ok(consumed) => {
                    let (consumed, leftover) = arguments.split_at(consumed);
                    tracing::trace!(arity, supplied, leftover = leftover.len(), "call overflowed");
                    let result = self.execute(consumed)?;
                    Ok(overflow(result, leftover))
                }
                // The surplus is already held; the held overflow absorbs the new arguments.
                Err(_) => self.execute(arguments),
            },
        }
    }

    /// Calls with anything convertible into values.
    ///
    /// # Errors
    ///
    /// Same as [`call`](Funf::call).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funfist::{funf, Value};
    ///
    /// let join = funf!(|left, right| format!("{left}{right}"));
    /// assert_eq!(join.apply(["a", "b"]).unwrap(), Value::from("ab"));
    /// ```
    pub fn apply<I, V>(&self, arguments: I) -> Result<Value>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let arguments: Arguments = arguments.into_iter().map(Into::into).collect();
        self.call(&arguments)
    }

    /// Binds arguments without executing.
    ///
    /// Always returns a captured function value. Each plain argument reduces
    /// the arity by one, even when that makes it zero or negative.
    ///
    /// An argument that is itself a function value is not stored. The
    /// arguments before it are captured and the result is composed with it,
    /// so its result fills that position once it runs. Plain arguments after
    /// it stay in their own positions, behind that result:
    ///
    /// ```text
    /// capture(f, [a, h, c])(z1..zp, w...) == f(a, h(z1..zp), c, w...)    p == arity(h)
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funfist::{funf, funf::FunfKind, Value};
    ///
    /// let subtract = funf!(|left, right| left.as_int()? - right.as_int()?);
    /// let from_ten = subtract.capture(&[Value::from(10)]);
    /// assert_eq!(from_ten.kind(), FunfKind::Captured);
    /// assert_eq!(from_ten.arity(), 1);
    /// assert_eq!(from_ten.apply([3]).unwrap(), Value::Int(7));
    ///
    /// let join = funf!(|a, b, c| format!("{a}{b}{c}"));
    /// let wrap = funf!(|x| format!("<{x}>"));
    /// let around = join.capture(&[Value::from("a"), Value::from(wrap), Value::from("c")]);
    /// assert_eq!(around.arity(), 2);
    /// assert_eq!(around.apply(["x", "y"]).unwrap(), Value::seq(["a<x>c", "y"]));
    /// ```
    #[must_use]
    pub fn capture(&self, arguments: &[Value]) -> Self {
        self.capture_behind(Arguments::new(), arguments)
    }

    /// Captures `leading` as plain values, then `arguments` with function
    /// arguments composed in place.
    fn capture_behind(&self, mut leading: Arguments, arguments: &[Value]) -> Self {
        let first_function = arguments
            .iter()
            .enumerate()
            .find_map(|(position, argument)| match argument {
                Value::Fun(function) => Some((position, function)),
                _ => None,
            });
        let Some((position, function)) = first_function else {
            leading.extend(arguments.iter().cloned());
            return Self::captured(self.clone(), leading);
        };

        let (before, rest) = arguments.split_at(position);
        leading.extend(before.iter().cloned());
        let outer = if leading.is_empty() {
            self.clone()
        } else {
            Self::captured(self.clone(), leading)
        };
        tracing::trace!(position, arity = function.arity(), "function argument composed");

        let bound = rest.iter().skip(1).cloned().collect();
        let composed = Self::composed(outer, function.clone(), Arguments::new(), bound);
        Self::captured(composed, Arguments::new())
    }

    /// Composes `self` (outer) after `inner`.
    ///
    /// The result has arity `inner.arity() + self.arity()`. Arguments are
    /// gathered for `inner` until it is satisfied; its result is then
    /// prepended to the leftover arguments and the whole list is passed to
    /// `self`:
    ///
    /// ```text
    /// g.compose(f)(x1..xp, y1..yq) == g(f(x1..xp), y1..yq)
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funfist::{funf, Value};
    ///
    /// let double = funf!(|value| value.as_int()? * 2);
    /// let add = funf!(|left, right| left.as_int()? + right.as_int()?);
    ///
    /// let double_then_add = add.compose(&double);
    /// assert_eq!(double_then_add.arity(), 3);
    ///
    /// // add(double(5), 1) with the third argument left over
    /// let result = double_then_add.apply([5, 1, 0]).unwrap();
    /// assert_eq!(result, Value::seq([11, 0]));
    /// ```
    #[must_use]
    pub fn compose(&self, inner: &Self) -> Self {
        Self::composed(self.clone(), inner.clone(), Arguments::new(), Arguments::new())
    }

    /// Composes left to right: `f.pipe(g)` is `g.compose(f)`.
    #[must_use]
    pub fn pipe(&self, next: &Self) -> Self {
        next.compose(self)
    }

    fn execute(&self, arguments: &[Value]) -> Result<Value> {
        match &*self.node {
            Node::Wrapped { arity, function } => {
                debug_assert_eq!(signed(arguments.len()), *arity);
                function(arguments)
            }
            Node::Captured {
                inner,
                arguments: held,
                ..
            } => inner.call(&concat(held, arguments)),
            Node::Composed {
                outer,
                inner,
                arguments: held,
                bound,
                ..
            } => {
                let gathered = concat(held, arguments);
                let needed = inner.arity();

                let Ok(share) = usize::try_from(needed) else {
                    return resume(outer, inner.call(&[])?, bound, &gathered);
                };
                if gathered.len() < share {
                    tracing::trace!(needed, gathered = gathered.len(), "composition still gathering");
                    return Ok(Value::Fun(Self::composed(
                        outer.clone(),
                        inner.clone(),
                        gathered,
                        bound.clone(),
                    )));
                }

                let (consumed, leftover) = gathered.split_at(share);
                let result = inner.call(consumed)?;
                resume(outer, result, bound, leftover)
            }
        }
    }
}

/// Calls `outer` with an inner result, then the arguments bound behind it,
/// then the leftover arguments.
///
/// Function values among the bound arguments are composed in place first, so
/// they take their own share of the leftover arguments.
fn resume(outer: &Funf, result: Value, bound: &[Value], leftover: &[Value]) -> Result<Value> {
    if bound.iter().any(|argument| matches!(argument, Value::Fun(_))) {
        let mut leading = Arguments::new();
        leading.push(result);
        return outer.capture_behind(leading, bound).call(leftover);
    }

    let mut arguments = feed(result, bound);
    arguments.extend(leftover.iter().cloned());
    outer.call(&arguments)
}

/// Arity change caused by arguments bound behind an inner result: a plain
/// value fills one slot, a function value adds its own arity.
fn bound_offset(bound: &[Value]) -> isize {
    bound.iter().fold(0, |offset: isize, argument| match argument {
        Value::Fun(function) => offset.saturating_add(function.arity()),
        _ => offset.saturating_sub(1),
    })
}

fn signed(length: usize) -> isize {
    isize::try_from(length).unwrap_or(isize::MAX)
}

fn concat(held: &[Value], supplied: &[Value]) -> Arguments {
    let mut arguments = Arguments::with_capacity(held.len() + supplied.len());
    arguments.extend(held.iter().cloned());
    arguments.extend(supplied.iter().cloned());
    arguments
}

fn feed(result: Value, leftover: &[Value]) -> Arguments {
    let mut arguments = Arguments::with_capacity(leftover.len() + 1);
    arguments.push(result);
    arguments.extend(leftover.iter().cloned());
    arguments
}

fn overflow(result: Value, leftover: &[Value]) -> Value {
    let mut values = Vec::with_capacity(leftover.len() + 1);
    values.push(result);
    values.extend_from_slice(leftover);
    Value::from(values)
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl fmt::Debug for Funf {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.node {
            Node::Wrapped { arity, .. } => formatter
                .debug_struct("Wrapped")
                .field("arity", arity)
                .finish_non_exhaustive(),
            Node::Captured {
                inner,
                arguments,
                arity,
            } => formatter
                .debug_struct("Captured")
                .field("arity", arity)
                .field("arguments", arguments)
                .field("inner", inner)
                .finish(),
            Node::Composed {
                outer,
                inner,
                arguments,
                bound,
                arity,
            } => formatter
                .debug_struct("Composed")
                .field("arity", arity)
                .field("arguments", arguments)
                .field("bound", bound)
                .field("outer", outer)
                .field("inner", inner)
                .finish(),
        }
    }
}

impl fmt::Display for Funf {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<funf/{}>", self.arity())
    }
}

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Funf: Send, Sync);
