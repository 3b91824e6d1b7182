//! Splitting a sequence in two by a predicate.

/// Split `iterable` into `(falses, trues)` by `predicate`.
///
/// Each output keeps the input's relative order.
///
/// # Example
///
/// ```
/// use umcp_util::partition;
///
/// let (odd, even) = partition(vec![1, 2, 3, 4, 5], |n| n % 2 == 0);
/// assert_eq!(odd, vec![1, 3, 5]);
/// assert_eq!(even, vec![2, 4]);
/// ```
pub fn partition<I, T, F>(iterable: I, mut predicate: F) -> (Vec<T>, Vec<T>)
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    let mut ret = (Vec::new(), Vec::new());
    for x in iterable {
        if predicate(&x) {
            ret.1.push(x);
        } else {
            ret.0.push(x);
        }
    }
    ret
}

/// Like [`partition`], with a predicate that can fail.
///
/// Stops at the first error and returns it unchanged.
///
/// # Errors
///
/// Returns whatever error `predicate` returns.
pub fn try_partition<I, T, E, F>(iterable: I, mut predicate: F) -> Result<(Vec<T>, Vec<T>), E>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> Result<bool, E>,
{
    let mut ret = (Vec::new(), Vec::new());
    for x in iterable {
        if predicate(&x)? {
            ret.1.push(x);
        } else {
            ret.0.push(x);
        }
    }
    Ok(ret)
}
