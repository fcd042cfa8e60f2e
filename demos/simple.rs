use listcraft::{bisect, tokens_to_inverted_index, DefaultTokenCleaner, TextFileSummary};

fn main() {
    env_logger::init();

    let text = "Call me Ishmael. Some years ago--never mind how long precisely--having little or no money in my purse";
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let (word_frequencies, char_frequencies) =
        tokens_to_inverted_index(&tokens, &DefaultTokenCleaner);

    let summary = TextFileSummary::from_inverted_index("<inline>", &word_frequencies, &char_frequencies);
    println!("{}", summary);

    let words: Vec<String> = word_frequencies.keys().cloned().collect();
    let target = "ishmael".to_string();

    // Unsorted keys are sorted internally; the index refers to that order
    match bisect(&words, 0, words.len() - 1, &target) {
        Some(index) => println!("\"{}\" found at index {}", target, index),
        None => println!("\"{}\" not found", target),
    }
}
