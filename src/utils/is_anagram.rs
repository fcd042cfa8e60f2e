use crate::utils::{is_sorted, sorted_copy, to_lowercase_elements, CaseFold};

/// Checks whether two lists contain exactly the same elements, in any order.
///
/// Anagrams are normally about words, but any list of comparable elements
/// works. When `normalize_char_case` is set, textual elements are compared
/// case-insensitively.
///
/// # Example
/// ```
/// use listcraft::{is_anagram, str_to_list};
///
/// assert!(is_anagram(&str_to_list("never"), &str_to_list("REven"), true));
/// assert!(!is_anagram(&str_to_list("steve"), &str_to_list("STEVEN"), true));
/// ```
pub fn is_anagram<T>(l1: &[T], l2: &[T], normalize_char_case: bool) -> bool
where
    T: PartialOrd + Clone + CaseFold,
{
    if l1.len() != l2.len() {
        return false;
    }

    let (mut l1, mut l2) = if normalize_char_case {
        (to_lowercase_elements(l1), to_lowercase_elements(l2))
    } else {
        (l1.to_vec(), l2.to_vec())
    };

    if !is_sorted(&l1) {
        l1 = sorted_copy(&l1);
    }
    if !is_sorted(&l2) {
        l2 = sorted_copy(&l2);
    }

    // Both sorted, so the first mismatch decides
    l1.iter().zip(l2.iter()).all(|(a, b)| a == b)
}
