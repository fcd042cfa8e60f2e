use flate2::write::GzEncoder;
use flate2::Compression;
use listcraft::{DefaultTokenCleaner, Token, TokenCleaner};
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
pub mod constants;
use constants::{MOBY_SMALL_FILE_NAME, TEST_FILES_DIRECTORY};

/// Path to a file inside the test fixture directory.
pub fn test_file_path(file_name: &str) -> PathBuf {
    Path::new(TEST_FILES_DIRECTORY).join(file_name)
}

pub fn moby_small_path() -> PathBuf {
    test_file_path(MOBY_SMALL_FILE_NAME)
}

/// A scratch path in the system temp directory, unique per test process and name.
///
/// Any file left over from a previous run is removed.
pub fn temp_output_path(file_name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "listcraft-{}-{}",
        std::process::id(),
        file_name
    ));
    let _ = fs::remove_file(&path);
    path
}

/// Writes `contents` to a fresh scratch file and returns its path.
pub fn write_temp_file(file_name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = temp_output_path(file_name);
    fs::write(&path, contents)?;
    Ok(path)
}

/// Writes a gzip-compressed copy of `source` to a fresh scratch file ending in `.gz`.
pub fn write_gzip_copy(source: &Path, file_name: &str) -> io::Result<PathBuf> {
    let path = temp_output_path(&format!("{}.gz", file_name));

    let mut encoder = GzEncoder::new(File::create(&path)?, Compression::default());
    encoder.write_all(&fs::read(source)?)?;
    encoder.finish()?;

    Ok(path)
}

/// Cleaned words of `tokens`, using the default cleaner.
pub fn cleaned_words(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter_map(|token| DefaultTokenCleaner.clean(Some(token.as_str())))
        .collect()
}
