use crate::utils::{is_sorted, sorted_copy, to_lowercase_elements, CaseFold};

/// Returns `true` if any element appears more than once.
///
/// With `ignore_case` set, textual elements differing only by case count as
/// duplicates.
pub fn has_duplicates<T>(l: &[T], ignore_case: bool) -> bool
where
    T: PartialOrd + Clone + CaseFold,
{
    if l.len() < 2 {
        return false;
    }

    let mut l = if ignore_case {
        to_lowercase_elements(l)
    } else {
        l.to_vec()
    };

    if !is_sorted(&l) {
        l = sorted_copy(&l);
    }

    // Duplicates are adjacent once sorted
    l.windows(2).any(|pair| pair[0] == pair[1])
}
