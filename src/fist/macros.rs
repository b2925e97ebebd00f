//! The `fist!` literal macro.

/// Builds a [`Fist`](crate::Fist) from its elements, first to last.
///
/// Each element is converted with `Value::from`, so mixed kinds are allowed.
///
/// # Examples
///
/// ```
/// use funfist::{fist, Fist, Value};
///
/// let empty: Fist = fist![];
/// assert!(empty.is_empty());
///
/// let mixed = fist![1, "two", 3.0];
/// assert_eq!(mixed.first().unwrap(), Value::Int(1));
/// assert_eq!(mixed.len(), 3);
/// ```
#[macro_export]
macro_rules! fist {
    () => {
        $crate::Fist::new()
    };
    ($($element:expr),+ $(,)?) => {
        <$crate::Fist as ::std::iter::FromIterator<$crate::Value>>::from_iter([
            $($crate::Value::from($element)),+
        ])
    };
}

#[cfg(test)]
mod tests {
    use crate::{Fist, Value};
    use rstest::rstest;

    #[rstest]
    fn test_fist_empty() {
        let list: Fist = fist![];
        assert!(list.is_empty());
    }

    #[rstest]
    fn test_fist_keeps_order() {
        let list = fist![1, 2, 3,];
        assert_eq!(
            list.to_vec().unwrap(),
            vec![Value::Int(1), Value::Int(2), Value::Int(3)]
        );
    }

    #[rstest]
    fn test_fist_nested_list_element() {
        let list = fist![fist![1], ()];
        assert!(matches!(list.first().unwrap(), Value::List(_)));
    }
}
