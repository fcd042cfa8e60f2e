use crate::constants::GZIP_FILE_EXTENSION;
use crate::models::AppendStrategy;
use crate::types::Token;
use crate::Error;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Opens a text file for line-oriented reading.
///
/// Files ending in `.gz` are decompressed on the fly.
pub fn open_text_reader<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>, Error> {
    let path = path.as_ref();
    let file = File::open(path)?;

    let is_gzipped = path
        .extension()
        .map_or(false, |ext| ext == GZIP_FILE_EXTENSION);

    if is_gzipped {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Splits every line of `reader` on whitespace and collects the tokens,
/// growing the list with the given `strategy`.
pub fn words_from_reader<R: BufRead>(
    reader: R,
    strategy: AppendStrategy,
) -> Result<Vec<Token>, Error> {
    let mut words: Vec<Token> = Vec::new();

    for line in reader.lines() {
        let line = line?;

        for word in line.split_whitespace() {
            match strategy {
                AppendStrategy::PushMethod => words.push(word.trim().to_string()),
                // Builds a throwaway singleton list for every token
                AppendStrategy::ExtendSingleton => words.extend(vec![word.to_string()]),
            }
        }
    }

    Ok(words)
}

/// Reads the whitespace-delimited tokens of a (possibly gzipped) text file.
pub fn words_file_to_list<P: AsRef<Path>>(
    path: P,
    strategy: AppendStrategy,
) -> Result<Vec<Token>, Error> {
    words_from_reader(open_text_reader(path)?, strategy)
}
