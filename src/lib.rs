mod config;
pub use config::{DEFAULT_APPEND_BENCHMARK_CONFIG, DEFAULT_BIRTHDAY_PARADOX_CONFIG};
pub mod constants;
pub mod models;
pub use models::{
    benchmark_words_file_to_list, exact_birthday_probability,
    run_benchmark_words_file_to_list_series, sort_char_frequencies, summarize_text_file,
    tokens_to_inverted_index, AppendBenchmarkConfig, AppendBenchmarkSummary, AppendStrategy,
    BirthdayParadoxConfig, BirthdayParadoxResult, BirthdayParadoxSimulator, DefaultTokenCleaner,
    Error, LetterFrequency, TextFileSummary, TokenCleaner,
};
pub mod types;
pub use types::{
    Birthday, CharFrequencyMap, Frequency, Token, TokenRef, Word, WordFrequencyMap,
};
pub mod utils;
pub use utils::{
    bisect, has_duplicates, is_anagram, is_sorted, open_text_reader, remove_duplicates,
    sort_elements, sorted_copy, str_to_list, to_lowercase_elements, toggle_case,
    words_file_to_list, words_file_to_toggle_case, words_from_reader, CaseFold,
};

#[cfg(doctest)]
doc_comment::doctest!("../README.md");
