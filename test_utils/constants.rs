pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

pub const MOBY_SMALL_FILE_NAME: &str = "mobysmall.txt";
