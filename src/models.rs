pub mod append_benchmark;
pub use append_benchmark::{
    benchmark_words_file_to_list, run_benchmark_words_file_to_list_series,
    AppendBenchmarkSummary,
};

pub mod append_strategy;
pub use append_strategy::AppendStrategy;

pub mod birthday_paradox;
pub use birthday_paradox::{
    exact_birthday_probability, BirthdayParadoxResult, BirthdayParadoxSimulator,
};

pub mod config;
pub use config::{AppendBenchmarkConfig, BirthdayParadoxConfig};

pub mod error;
pub use error::Error;

pub mod inverted_index;
pub use inverted_index::tokens_to_inverted_index;

pub mod text_file_summary;
pub use text_file_summary::{
    sort_char_frequencies, summarize_text_file, LetterFrequency, TextFileSummary,
};

pub mod token_cleaner;
pub use token_cleaner::{DefaultTokenCleaner, TokenCleaner};
