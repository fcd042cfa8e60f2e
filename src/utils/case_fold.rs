/// Lower-cases textual values while leaving every other type alone.
pub trait CaseFold {
    fn case_fold(&self) -> Self;
}

impl CaseFold for char {
    fn case_fold(&self) -> Self {
        // Multi-char expansions (e.g. 'İ') keep their leading char only
        self.to_lowercase().next().unwrap_or(*self)
    }
}

impl CaseFold for String {
    fn case_fold(&self) -> Self {
        self.to_lowercase()
    }
}

macro_rules! impl_case_fold_identity {
    ($($ty:ty),*) => {
        $(
            impl CaseFold for $ty {
                fn case_fold(&self) -> Self {
                    *self
                }
            }
        )*
    };
}

impl_case_fold_identity!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool);

/// Converts a string into a list of chars so it can be handled like any other list.
pub fn str_to_list(s: &str) -> Vec<char> {
    s.chars().collect()
}

/// Returns a copy of `l` where textual elements are lower-cased.
///
/// Non-textual elements (numbers, booleans) are copied unchanged.
pub fn to_lowercase_elements<T: CaseFold>(l: &[T]) -> Vec<T> {
    l.iter().map(CaseFold::case_fold).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_chars_and_strings_only() {
        assert_eq!(to_lowercase_elements(&str_to_list("ReVeN")), str_to_list("reven"));
        assert_eq!(
            to_lowercase_elements(&["Steven".to_string(), "STEVE".to_string()]),
            vec!["steven".to_string(), "steve".to_string()]
        );
        assert_eq!(to_lowercase_elements(&[3, 1, 2]), vec![3, 1, 2]);
    }
}
