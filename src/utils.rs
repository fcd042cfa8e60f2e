pub mod bisect;
pub mod case_fold;
pub mod has_duplicates;
pub mod is_anagram;
pub mod is_sorted;
pub mod read_words;
pub mod remove_duplicates;
pub mod sort_elements;
pub mod toggle_case;

pub use bisect::bisect;
pub use case_fold::{str_to_list, to_lowercase_elements, CaseFold};
pub use has_duplicates::has_duplicates;
pub use is_anagram::is_anagram;
pub use is_sorted::is_sorted;
pub use read_words::{open_text_reader, words_file_to_list, words_from_reader};
pub use remove_duplicates::remove_duplicates;
pub use sort_elements::{sort_elements, sorted_copy};
pub use toggle_case::{toggle_case, words_file_to_toggle_case};
