use listcraft::{toggle_case, words_file_to_toggle_case, Error};
use std::fs;
use test_utils::{moby_small_path, temp_output_path, write_temp_file};

#[cfg(test)]
mod toggle_case_tests {
    use super::*;

    #[test]
    fn test_swaps_letters_only() {
        assert_eq!(toggle_case("Call me Ishmael."), "cALL ME iSHMAEL.");
        assert_eq!(toggle_case("1851 -- Moby-Dick!"), "1851 -- mOBY-dICK!");
        assert_eq!(toggle_case(""), "");
    }

    #[test]
    fn test_non_ascii_letters() {
        assert_eq!(toggle_case("Éte café"), "éTE CAFÉ");
    }

    #[test]
    fn test_toggling_twice_restores_ascii_text() {
        let text = fs::read_to_string(moby_small_path()).unwrap();
        assert_eq!(toggle_case(&toggle_case(&text)), text);
    }

    #[test]
    fn test_file_layout_is_preserved() {
        let input = write_temp_file("toggle_in.txt", "Hello World\r\n\nno trailing NEWLINE")
            .expect("Failed to write input file");
        let output = temp_output_path("toggle_out.txt");

        words_file_to_toggle_case(&input, &output).expect("Failed to toggle file");

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "hELLO wORLD\r\n\nNO TRAILING newline"
        );

        let _ = fs::remove_file(input);
        let _ = fs::remove_file(output);
    }

    #[test]
    fn test_missing_input_is_an_io_error() {
        let output = temp_output_path("toggle_never_written.txt");
        let result = words_file_to_toggle_case("tests/test_files/does_not_exist.txt", &output);

        assert!(matches!(result, Err(Error::IoError(_))));
        assert!(!output.exists());
    }
}
