use crate::utils::{is_sorted, sorted_copy};
use log::debug;
use std::borrow::Cow;

/// Binary search for `target_value` between the inclusive bounds
/// `lower_bound` and `upper_bound` of `l`.
///
/// The input does not need to be sorted. When the bounds cover the whole
/// list (`0..=len - 1`) sortedness is checked once and, if needed, a sorted
/// local copy is searched instead. The returned index is then a position in
/// that **sorted** copy, not in the caller's original ordering.
///
/// Returns `None` if the target is absent or the range is malformed
/// (`upper_bound < lower_bound`, or `upper_bound` past the end of the list).
/// Any matching index may be returned when the target occurs more than once.
///
/// The midpoint is excluded from both halves after it has been compared
/// (`mid - 1` / `mid + 1`), and the halves are walked iteratively.
///
/// # Example
/// ```
/// use listcraft::bisect;
///
/// // Searched as [1, 2, 3]
/// assert_eq!(bisect(&[3, 1, 2], 0, 2, &2), Some(1));
/// assert_eq!(bisect(&[3, 1, 2], 0, 2, &7), None);
/// ```
pub fn bisect<T>(l: &[T], lower_bound: usize, upper_bound: usize, target_value: &T) -> Option<usize>
where
    T: PartialOrd + Clone,
{
    let n = l.len();
    if n == 0 {
        return None;
    }
    if n == 1 {
        return (l[0] == *target_value).then_some(0);
    }

    // Only the top-level range pays for the sortedness check
    let is_top_level = lower_bound == 0 && upper_bound == n - 1;

    let l: Cow<[T]> = if is_top_level && !is_sorted(l) {
        debug!("List of {} elements is not sorted; sorting a local copy", n);
        Cow::Owned(sorted_copy(l))
    } else {
        Cow::Borrowed(l)
    };

    if is_top_level {
        debug!("Bisecting {} elements", n);
    }

    bisect_sorted(&l, lower_bound, upper_bound, target_value)
}

fn bisect_sorted<T: PartialOrd>(
    l: &[T],
    mut lower_bound: usize,
    mut upper_bound: usize,
    target_value: &T,
) -> Option<usize> {
    if upper_bound >= l.len() {
        return None;
    }

    while lower_bound <= upper_bound {
        // Same as (lower + upper) / 2 without the overflow
        let midpoint = lower_bound + (upper_bound - lower_bound) / 2;
        let value_at_midpoint = &l[midpoint];

        debug!(
            "Midpoint between {} and {} is {}",
            lower_bound, upper_bound, midpoint
        );

        if *value_at_midpoint == *target_value {
            return Some(midpoint);
        }

        if *target_value < *value_at_midpoint {
            if midpoint == 0 {
                return None;
            }
            upper_bound = midpoint - 1;
        } else {
            lower_bound = midpoint + 1;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inner_range_on_sorted_list() {
        let l = [1, 3, 5, 7, 9, 11];
        assert_eq!(bisect_sorted(&l, 2, 4, &7), Some(3));
        assert_eq!(bisect_sorted(&l, 2, 4, &1), None);
        assert_eq!(bisect_sorted(&l, 2, 4, &11), None);
    }

    #[test]
    fn test_target_below_first_element_terminates() {
        assert_eq!(bisect_sorted(&[5, 6], 0, 1, &1), None);
    }

    #[test]
    fn test_target_above_last_element_terminates() {
        assert_eq!(bisect_sorted(&[1, 2], 0, 1, &5), None);
    }
}
