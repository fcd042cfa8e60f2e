/// Returns `true` when no element compares greater than its successor.
///
/// Empty and single element slices are implicitly sorted.
///
/// # Example
/// ```
/// use listcraft::is_sorted;
///
/// assert!(is_sorted(&[1, 2, 2]));
/// assert!(!is_sorted(&['b', 'a']));
/// ```
pub fn is_sorted<T: PartialOrd>(l: &[T]) -> bool {
    l.windows(2).all(|pair| !(pair[0] > pair[1]))
}
