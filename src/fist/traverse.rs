//! Eager traversals: reduce, reverse and the predicate scans.
//!
//! Every traversal walks the list front to back through [`Fist::iter`], so a
//! pending map is evaluated exactly when its element is visited.

use crate::{Fist, Funf, Result, Value};

impl Fist {
    /// Reduces the list with `function`, seeded by the first element.
    ///
    /// `function` receives the element first and the accumulator second.
    /// Returns `None` for an empty list.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `function` or by a pending map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funfist::{fist, funf, Fist, Value};
    ///
    /// let add = funf!(|element, accumulator| element.as_int()? + accumulator.as_int()?);
    /// assert_eq!(fist![1, 2, 3, 4].reduce(&add).unwrap(), Some(Value::Int(10)));
    /// assert_eq!(Fist::new().reduce(&add).unwrap(), None);
    /// ```
    pub fn reduce(&self, function: &Funf) -> Result<Option<Value>> {
        let Some((first, rest)) = self.uncons()? else {
            return Ok(None);
        };
        rest.reduce_with(first, function).map(Some)
    }

    /// Reduces the list with `function`, starting from `initial`.
    ///
    /// For each element in order, the accumulator becomes
    /// `function(element, accumulator)`. Returns `initial` for an empty list.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `function` or by a pending map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funfist::{fist, funf, Fist, Value};
    ///
    /// let add = funf!(|element, accumulator| element.as_int()? + accumulator.as_int()?);
    /// assert_eq!(fist![1, 2, 3, 4].reduce_with(0, &add).unwrap(), Value::Int(10));
    /// assert_eq!(Fist::new().reduce_with(5, &add).unwrap(), Value::Int(5));
    /// ```
    pub fn reduce_with(&self, initial: impl Into<Value>, function: &Funf) -> Result<Value> {
        let mut accumulator = initial.into();
        for element in self {
            accumulator = function.call(&[element?, accumulator])?;
        }
        Ok(accumulator)
    }

    /// Returns a new list with the elements in reverse order.
    ///
    /// Pending maps are evaluated; the result holds plain cells.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by a pending map.
    ///
    /// # Complexity
    ///
    /// O(n) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funfist::fist;
    ///
    /// assert_eq!(fist![1, 2, 3].reverse().unwrap(), fist![3, 2, 1]);
    /// ```
    pub fn reverse(&self) -> Result<Self> {
        self.iter()
            .try_fold(Self::new(), |reversed, element| Ok(reversed.cons(element?)))
    }

    /// Returns `true` if `predicate` is truthy for every element.
    ///
    /// Stops at the first falsy result; later elements are not evaluated.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `predicate` or by a pending map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funfist::{fist, funf};
    ///
    /// let below_five = funf!(|value| value.as_int()? < 5);
    /// assert!(fist![1, 2, 3, 4].all(&below_five).unwrap());
    /// ```
    pub fn all(&self, predicate: &Funf) -> Result<bool> {
        for element in self {
            if !predicate.call(&[element?])?.is_truthy() {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Returns `true` if `predicate` is truthy for some element.
    ///
    /// Stops at the first truthy result; later elements are not evaluated.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by `predicate` or by a pending map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funfist::{fist, funf};
    ///
    /// let above_five = funf!(|value| value.as_int()? > 5);
    /// assert!(!fist![1, 2, 3, 4].any(&above_five).unwrap());
    /// ```
    pub fn any(&self, predicate: &Funf) -> Result<bool> {
        for element in self {
            if predicate.call(&[element?])?.is_truthy() {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, funf};
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn numbers() -> Fist {
        Fist::from(vec![1, 2, 3, 4])
    }

    fn add() -> Funf {
        funf!(|element, accumulator| element.as_int()? + accumulator.as_int()?)
    }

    #[rstest]
    fn test_reduce_passes_element_before_accumulator() {
        let record = funf!(|element, accumulator| format!("({element} {accumulator})"));
        assert_eq!(
            numbers().reduce_with("_", &record).unwrap(),
            Value::from("(4 (3 (2 (1 _))))")
        );
    }

    #[rstest]
    fn test_reduce_single_element_does_not_call() {
        let failing = Funf::native(2, |_| Err(Error::failure("called")));
        assert_eq!(Fist::singleton(7).reduce(&failing).unwrap(), Some(Value::Int(7)));
    }

    #[rstest]
    fn test_reverse_of_empty() {
        assert!(Fist::new().reverse().unwrap().is_empty());
    }

    #[rstest]
    fn test_reverse_evaluates_maps() {
        let double = funf!(|value| value.as_int()? * 2);
        let reversed = numbers().map(&double).reverse().unwrap();
        assert!(matches!(reversed, Fist::Cell(_)));
        assert_eq!(reversed, Fist::from(vec![8, 6, 4, 2]));
    }

    #[rstest]
    #[case(vec![], true)]
    #[case(vec![1, 2], true)]
    #[case(vec![1, 0, 2], false)]
    fn test_all(#[case] elements: Vec<i64>, #[case] expected: bool) {
        let list = Fist::from(elements);
        assert_eq!(list.all(&crate::funf::identity()).unwrap(), expected);
    }

    #[rstest]
    #[case(vec![], false)]
    #[case(vec![0, 0], false)]
    #[case(vec![0, 3], true)]
    fn test_any(#[case] elements: Vec<i64>, #[case] expected: bool) {
        let list = Fist::from(elements);
        assert_eq!(list.any(&crate::funf::identity()).unwrap(), expected);
    }

    #[rstest]
    fn test_any_stops_at_deciding_element() {
        let counter = Arc::new(AtomicUsize::new(0));
        let observed = Arc::clone(&counter);
        let is_two = funf!(|value| {
            observed.fetch_add(1, Ordering::SeqCst);
            value.as_int()? == 2
        });
        assert!(numbers().any(&is_two).unwrap());
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    fn test_reduce_propagates_map_failure() {
        let failing = Funf::native(1, |_| Err(Error::failure("map failed")));
        let error = numbers().map(&failing).reduce(&add()).unwrap_err();
        assert!(matches!(error, Error::Failure(message) if message == "map failed"));
    }
}
