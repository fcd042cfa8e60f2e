use listcraft::{
    benchmark_words_file_to_list, run_benchmark_words_file_to_list_series, words_file_to_list,
    AppendBenchmarkConfig, AppendStrategy, Error, DEFAULT_APPEND_BENCHMARK_CONFIG,
};
use std::fs;
use test_utils::{moby_small_path, write_gzip_copy};

#[cfg(test)]
mod word_list_tests {
    use super::*;

    #[test]
    fn test_strategies_read_the_same_words() {
        let pushed = words_file_to_list(moby_small_path(), AppendStrategy::PushMethod).unwrap();
        let extended =
            words_file_to_list(moby_small_path(), AppendStrategy::ExtendSingleton).unwrap();

        assert_eq!(pushed, extended);
        assert_eq!(pushed.first().map(String::as_str), Some("Call"));
        assert_eq!(pushed.last().map(String::as_str), Some("me."));
    }

    #[test]
    fn test_gzipped_file_reads_the_same_words() {
        let gzipped = write_gzip_copy(&moby_small_path(), "words_moby").unwrap();

        let plain = words_file_to_list(moby_small_path(), AppendStrategy::PushMethod).unwrap();
        let compressed = words_file_to_list(&gzipped, AppendStrategy::PushMethod).unwrap();

        assert_eq!(plain, compressed);

        let _ = fs::remove_file(gzipped);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = words_file_to_list("tests/test_files/missing.txt", AppendStrategy::PushMethod);
        assert!(matches!(result, Err(Error::IoError(_))));
    }
}

#[cfg(test)]
mod append_benchmark_tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(DEFAULT_APPEND_BENCHMARK_CONFIG.n_sims, 100_000);
        assert!(!DEFAULT_APPEND_BENCHMARK_CONFIG.debug);
    }

    #[test]
    fn test_single_benchmark_returns_positive_duration() {
        let (elapsed, words) =
            benchmark_words_file_to_list(moby_small_path(), AppendStrategy::ExtendSingleton)
                .unwrap();

        assert!(elapsed > 0.0);
        assert!(!words.is_empty());
    }

    #[test]
    fn test_series_accounts_for_every_iteration() {
        let config = AppendBenchmarkConfig {
            n_sims: 5,
            debug: true,
        };
        let summary = run_benchmark_words_file_to_list_series(moby_small_path(), &config).unwrap();

        assert_eq!(summary.n_sims, 5);
        assert_eq!(summary.push_method_wins + summary.extend_singleton_wins, 5);
        assert!((summary.push_method_ratio() + summary.extend_singleton_ratio() - 1.0).abs() < 1e-12);
        assert!(summary.to_string().starts_with("Out of 5 iterations"));
    }

    #[test]
    fn test_zero_iterations_is_rejected() {
        let config = AppendBenchmarkConfig {
            n_sims: 0,
            debug: false,
        };
        let result = run_benchmark_words_file_to_list_series(moby_small_path(), &config);

        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_strategy_labels() {
        assert_eq!(AppendStrategy::PushMethod.to_string(), "List.append() method");
        assert_eq!(AppendStrategy::ExtendSingleton.to_string(), "t += [x] idiom");
    }
}
