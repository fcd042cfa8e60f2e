/// Added to measured durations so ratios between them never divide by zero.
pub const EPSILON: f64 = 1e-15;

pub const N_ITERATIONS: usize = 100_000;

pub const N_DAYS_IN_YEAR: u16 = 365;

pub const N_DEFAULT_CLASS_SIZE: usize = 23;

// Displayed in pairs, so this should be an even number > 0
pub const N_SIM_SERIES: u32 = 6;

pub const S_ADD_SINGLETON_LIST_IDIOM: &str = "t += [x] idiom";

pub const S_LIST_APPEND_METHOD: &str = "List.append() method";

pub const UPPER_CASE_LABEL: &str = "UPPER-CASE";

pub const LOWER_CASE_LABEL: &str = "LOWER-CASE";

pub const QUIT_MESSAGE: &str = "THAT'S ALL FOLKS!  Thanks for playing.  Bye bye.";

/// File extension which marks a word list as gzip-compressed.
pub const GZIP_FILE_EXTENSION: &str = "gz";

pub const LETTER_FREQUENCY_CSV_HEADERS: [&str; 3] = ["character", "count", "percentage"];
