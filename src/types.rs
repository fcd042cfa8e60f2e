use std::collections::HashMap;

// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a raw token as an owned `String`. Tokens are whitespace-delimited
/// substrings of source text, before any cleaning takes place.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// A token after punctuation has been stripped and emptiness checked.
pub type Word = String;

/// Represents the total number of occurrences of a word or character.
pub type Frequency = usize;

/// Maps each lower-cased word to the number of times it occurred.
pub type WordFrequencyMap = HashMap<Word, Frequency>;

/// Maps each case-sensitive character to the number of times it occurred
/// within cleaned (non lower-cased) words.
pub type CharFrequencyMap = HashMap<char, Frequency>;

/// Day of the year, starting at 1.
pub type Birthday = u16;
