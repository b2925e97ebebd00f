//! The `funf!` macro for wrapping positional closures.
//!
//! A native callable receives its arguments as a slice. `funf!` lets the
//! closure name them instead: the parameter list fixes the arity, each name is
//! bound to a `&Value`, and the body's value is converted with `Value::from`.
//!
//! The body runs inside a function returning `funfist::Result<Value>`, so `?`
//! and `return Err(...)` work as in any fallible function.

/// Wraps a positional closure into a [`Funf`](crate::Funf).
///
/// The number of parameters is the arity. Any parameter count works, there
/// is no per-arity overload.
///
/// # Examples
///
/// ## Basic wrapping
///
/// ```
/// use funfist::{funf, Value};
///
/// let answer = funf!(|| 42);
/// assert_eq!(answer.arity(), 0);
/// assert_eq!(answer.call(&[]).unwrap(), Value::Int(42));
///
/// let add = funf!(|left, right| left.as_int()? + right.as_int()?);
/// assert_eq!(add.apply([1, 2]).unwrap(), Value::Int(3));
/// ```
///
/// ## Failing from the body
///
/// ```
/// use funfist::{funf, Error};
///
/// let divide = funf!(|numerator, denominator| {
///     let denominator = denominator.as_int()?;
///     if denominator == 0 {
///         return Err(Error::failure("division by zero"));
///     }
///     numerator.as_int()? / denominator
/// });
/// assert!(divide.apply([1, 0]).is_err());
/// ```
#[macro_export]
macro_rules! funf {
    (|| $body:expr) => {{
        $crate::Funf::native(
            0,
            move |_arguments: &[$crate::Value]| -> $crate::Result<$crate::Value> {
                ::std::result::Result::Ok($crate::Value::from($body))
            },
        )
    }};
    (|$($parameter:ident),+ $(,)?| $body:expr) => {{
        $crate::Funf::native(
            $crate::funf!(@count $($parameter)+),
            move |arguments: &[$crate::Value]| -> $crate::Result<$crate::Value> {
                let [$($parameter),+] = arguments else {
                    return ::std::result::Result::Err($crate::Error::argument_mismatch(
                        "funf!",
                        ::std::format!("{} arguments", $crate::funf!(@count $($parameter)+)),
                        ::std::format!("{} arguments", arguments.len()),
                    ));
                };
                ::std::result::Result::Ok($crate::Value::from($body))
            },
        )
    }};
    (@count) => { 0usize };
    (@count $head:ident $($tail:ident)*) => { 1usize + $crate::funf!(@count $($tail)*) };
}
