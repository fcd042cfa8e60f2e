use crate::constants::{LETTER_FREQUENCY_CSV_HEADERS, LOWER_CASE_LABEL, UPPER_CASE_LABEL};
use crate::models::{tokens_to_inverted_index, AppendStrategy, DefaultTokenCleaner};
use crate::types::{CharFrequencyMap, Frequency, WordFrequencyMap};
use crate::utils::words_file_to_list;
use crate::Error;
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Count of a single character, relative to all counted characters.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterFrequency {
    pub character: char,
    pub count: Frequency,
    pub total: Frequency,
    pub percentage: f64,
}

impl fmt::Display for LetterFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_frequency_line(f, self.character, self.count, self.total)
    }
}

/// Word count and letter frequency statistics of a text file.
///
/// Letter statistics are case-sensitive. Non-alphabetic characters count
/// toward the total but belong to neither the upper nor the lower case group.
#[derive(Debug, Clone, PartialEq)]
pub struct TextFileSummary {
    pub file_name: String,
    pub word_count: Frequency,
    /// Ordered by character.
    pub letter_frequencies: Vec<LetterFrequency>,
    pub upper_case_count: Frequency,
    pub lower_case_count: Frequency,
    pub total_char_count: Frequency,
}

impl TextFileSummary {
    pub fn from_inverted_index(
        file_name: &str,
        word_frequencies: &WordFrequencyMap,
        char_frequencies: &CharFrequencyMap,
    ) -> Self {
        let word_count: Frequency = word_frequencies.values().sum();

        let sorted_char_frequencies = sort_char_frequencies(char_frequencies);
        let total_char_count: Frequency = sorted_char_frequencies.values().sum();

        let mut letter_frequencies = Vec::with_capacity(sorted_char_frequencies.len());
        let mut upper_case_count = 0;
        let mut lower_case_count = 0;

        for (&character, &count) in &sorted_char_frequencies {
            letter_frequencies.push(LetterFrequency {
                character,
                count,
                total: total_char_count,
                percentage: percentage(count, total_char_count),
            });

            if character.is_alphabetic() {
                if character.is_uppercase() {
                    upper_case_count += count;
                } else {
                    lower_case_count += count;
                }
            }
        }

        Self {
            file_name: file_name.to_string(),
            word_count,
            letter_frequencies,
            upper_case_count,
            lower_case_count,
            total_char_count,
        }
    }

    pub fn upper_case_percentage(&self) -> f64 {
        percentage(self.upper_case_count, self.total_char_count)
    }

    pub fn lower_case_percentage(&self) -> f64 {
        percentage(self.lower_case_count, self.total_char_count)
    }

    /// Writes the per-character counts as `character,count,percentage` rows,
    /// ready to be charted.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), Error> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(LETTER_FREQUENCY_CSV_HEADERS)?;
        for letter_frequency in &self.letter_frequencies {
            csv_writer.write_record(&[
                letter_frequency.character.to_string(),
                letter_frequency.count.to_string(),
                format!("{:.2}", letter_frequency.percentage),
            ])?;
        }
        csv_writer.flush()?;

        Ok(())
    }

    pub fn write_csv_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        self.write_csv(File::create(path)?)
    }
}

impl fmt::Display for TextFileSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "***** SUMMARY OF TEXT FILE: {} *****", self.file_name)?;
        writeln!(f, "    WORD COUNT: {}", self.word_count)?;
        writeln!(f, "    LETTER FREQUENCY:")?;
        writeln!(f, "        ALL:")?;
        for letter_frequency in &self.letter_frequencies {
            writeln!(f, "\t\t\t{}", letter_frequency)?;
        }
        writeln!(f)?;

        write!(f, "\t")?;
        write_frequency_line(f, UPPER_CASE_LABEL, self.upper_case_count, self.total_char_count)?;
        writeln!(f)?;

        write!(f, "\t")?;
        write_frequency_line(f, LOWER_CASE_LABEL, self.lower_case_count, self.total_char_count)?;
        writeln!(f)
    }
}

/// Re-keys a character index so it iterates in character order.
pub fn sort_char_frequencies(char_frequencies: &CharFrequencyMap) -> BTreeMap<char, Frequency> {
    char_frequencies
        .iter()
        .map(|(&character, &count)| (character, count))
        .collect()
}

/// Reads a text file and summarizes its word count and letter frequencies.
///
/// Returns the summary along with the word and character indexes it was
/// built from.
pub fn summarize_text_file<P: AsRef<Path>>(
    path: P,
) -> Result<(TextFileSummary, WordFrequencyMap, CharFrequencyMap), Error> {
    let tokens = words_file_to_list(&path, AppendStrategy::ExtendSingleton)?;

    let (word_frequencies, char_frequencies) =
        tokens_to_inverted_index(&tokens, &DefaultTokenCleaner);

    let summary = TextFileSummary::from_inverted_index(
        &path.as_ref().display().to_string(),
        &word_frequencies,
        &char_frequencies,
    );

    Ok((summary, word_frequencies, char_frequencies))
}

fn percentage(count: Frequency, total: Frequency) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

fn write_frequency_line(
    f: &mut fmt::Formatter<'_>,
    label: impl fmt::Display,
    count: Frequency,
    total: Frequency,
) -> fmt::Result {
    write!(
        f,
        "{}:\t{}\t(/{})\t\t{:.2}%",
        label,
        count,
        total,
        percentage(count, total)
    )
}
