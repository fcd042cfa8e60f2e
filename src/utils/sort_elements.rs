use std::cmp::Ordering;

/// Sorts a slice of partially-ordered elements in place.
///
/// Incomparable pairs (e.g. `NaN`) are treated as equal; callers should not
/// rely on the resulting position of such elements.
pub fn sort_elements<T: PartialOrd>(l: &mut [T]) {
    l.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}

/// Returns a sorted copy of `l`, leaving the original untouched.
pub fn sorted_copy<T: PartialOrd + Clone>(l: &[T]) -> Vec<T> {
    let mut sorted = l.to_vec();
    sort_elements(&mut sorted);
    sorted
}
