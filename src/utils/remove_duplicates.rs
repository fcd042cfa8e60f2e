use crate::utils::{is_sorted, sorted_copy};

/// Returns the unique elements of `l` in sorted order.
///
/// Empty and single element lists are returned as they are.
///
/// # Example
/// ```
/// use listcraft::{remove_duplicates, str_to_list};
///
/// assert_eq!(remove_duplicates(&[1, 2, 3, 4, 2, 1]), vec![1, 2, 3, 4]);
/// assert_eq!(remove_duplicates(&str_to_list("steven")), str_to_list("enstv"));
/// ```
pub fn remove_duplicates<T: PartialOrd + Clone>(l: &[T]) -> Vec<T> {
    if l.len() < 2 {
        return l.to_vec();
    }

    let mut deduped = if is_sorted(l) {
        l.to_vec()
    } else {
        sorted_copy(l)
    };
    deduped.dedup_by(|a, b| a == b);

    deduped
}
