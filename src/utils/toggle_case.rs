use crate::Error;
use log::info;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Swaps the case of every alphabetic character; everything else is kept.
///
/// # Example
/// ```
/// use listcraft::toggle_case;
///
/// assert_eq!(toggle_case("Call me Ishmael."), "cALL ME iSHMAEL.");
/// ```
pub fn toggle_case(text: &str) -> String {
    let mut toggled = String::with_capacity(text.len());

    for c in text.chars() {
        if c.is_alphabetic() {
            if c.is_uppercase() {
                toggled.extend(c.to_lowercase());
            } else {
                toggled.extend(c.to_uppercase());
            }
        } else {
            toggled.push(c);
        }
    }

    toggled
}

/// Writes a case-toggled copy of `input_path` to `output_path`, line by line.
pub fn words_file_to_toggle_case<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
) -> Result<(), Error> {
    let mut reader = BufReader::new(File::open(input_path.as_ref())?);
    let mut writer = BufWriter::new(File::create(output_path.as_ref())?);

    // `read_line` keeps the line terminator, so the output mirrors the input layout
    let mut line = String::new();
    while reader.read_line(&mut line)? > 0 {
        writer.write_all(toggle_case(&line).as_bytes())?;
        line.clear();
    }
    writer.flush()?;

    info!("{} file written", output_path.as_ref().display());

    Ok(())
}
