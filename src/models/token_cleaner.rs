use crate::types::{TokenRef, Word};

/// Turns a raw token into a word, or rejects it.
///
/// Any `Fn(Option<&str>) -> Option<String>` is a `TokenCleaner`, so plain
/// functions can be passed wherever a cleaner is expected.
pub trait TokenCleaner {
    fn clean(&self, token: Option<&TokenRef>) -> Option<Word>;
}

impl<F> TokenCleaner for F
where
    F: Fn(Option<&TokenRef>) -> Option<Word>,
{
    fn clean(&self, token: Option<&TokenRef>) -> Option<Word> {
        self(token)
    }
}

/// Trims surrounding whitespace, then drops every character that is neither
/// alphanumeric nor whitespace. Yields `None` when nothing is left.
///
/// # Example
/// ```
/// use listcraft::{DefaultTokenCleaner, TokenCleaner};
///
/// let cleaner = DefaultTokenCleaner;
/// assert_eq!(cleaner.clean(Some(" THE! ")), Some("THE".to_string()));
/// assert_eq!(cleaner.clean(Some("--")), None);
/// assert_eq!(cleaner.clean(None), None);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultTokenCleaner;

impl TokenCleaner for DefaultTokenCleaner {
    fn clean(&self, token: Option<&TokenRef>) -> Option<Word> {
        let word: Word = token?
            .trim()
            .chars()
            .filter(|c| c.is_alphanumeric() || c.is_whitespace())
            .collect();

        if word.is_empty() {
            None
        } else {
            Some(word)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_punctuation_but_keeps_case() {
        let cleaner = DefaultTokenCleaner;
        assert_eq!(cleaner.clean(Some("Ishmael.")), Some("Ishmael".to_string()));
        assert_eq!(cleaner.clean(Some("ago--never")), Some("agonever".to_string()));
        assert_eq!(cleaner.clean(Some("don't")), Some("dont".to_string()));
    }

    #[test]
    fn test_unicode_letters_and_digits_survive() {
        let cleaner = DefaultTokenCleaner;
        assert_eq!(cleaner.clean(Some("«Café»")), Some("Café".to_string()));
        assert_eq!(cleaner.clean(Some("1851,")), Some("1851".to_string()));
    }

    #[test]
    fn test_inner_whitespace_is_kept() {
        let cleaner = DefaultTokenCleaner;
        assert_eq!(cleaner.clean(Some("  a ! b  ")), Some("a  b".to_string()));
    }

    #[test]
    fn test_empty_and_absent_tokens_are_rejected() {
        let cleaner = DefaultTokenCleaner;
        assert_eq!(cleaner.clean(Some("")), None);
        assert_eq!(cleaner.clean(Some("   ")), None);
        assert_eq!(cleaner.clean(Some("?!")), None);
        assert_eq!(cleaner.clean(None), None);
    }
}
