use crate::models::TokenCleaner;
use crate::types::{CharFrequencyMap, WordFrequencyMap};

/// Builds a word index and a character index from raw tokens.
///
/// Every token is passed through `cleaner`; rejected tokens are skipped.
/// Each accepted word is counted once under its lower-cased form, and every
/// character of the word (case preserved) is counted individually.
///
/// Neither map has a defined iteration order.
///
/// # Example
/// ```
/// use listcraft::{tokens_to_inverted_index, DefaultTokenCleaner};
///
/// let (words, chars) = tokens_to_inverted_index(["The", "the", "THE!"], &DefaultTokenCleaner);
///
/// assert_eq!(words.get("the"), Some(&3));
/// assert_eq!(chars.get(&'e'), Some(&2));
/// assert_eq!(chars.get(&'E'), Some(&1));
/// ```
pub fn tokens_to_inverted_index<I, S, C>(tokens: I, cleaner: &C) -> (WordFrequencyMap, CharFrequencyMap)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    C: TokenCleaner + ?Sized,
{
    let mut word_frequencies = WordFrequencyMap::new();
    let mut char_frequencies = CharFrequencyMap::new();

    for token in tokens {
        let Some(word) = cleaner.clean(Some(token.as_ref())) else {
            continue;
        };

        for c in word.chars() {
            *char_frequencies.entry(c).or_insert(0) += 1;
        }

        *word_frequencies.entry(word.to_lowercase()).or_insert(0) += 1;
    }

    (word_frequencies, char_frequencies)
}
