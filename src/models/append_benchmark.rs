use crate::constants::EPSILON;
use crate::models::{AppendBenchmarkConfig, AppendStrategy};
use crate::types::Token;
use crate::utils::words_file_to_list;
use crate::Error;
use log::{debug, info};
use std::fmt;
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppendBenchmarkSummary {
    pub n_sims: usize,
    pub push_method_wins: usize,
    pub extend_singleton_wins: usize,
}

impl AppendBenchmarkSummary {
    pub fn push_method_ratio(&self) -> f64 {
        self.push_method_wins as f64 / self.n_sims as f64
    }

    pub fn extend_singleton_ratio(&self) -> f64 {
        1.0 - self.push_method_ratio()
    }
}

impl fmt::Display for AppendBenchmarkSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Out of {} iterations, {} was more efficient {:.0}% of the time, while {} was more efficient {:.0}% of the time.",
            self.n_sims,
            AppendStrategy::PushMethod,
            self.push_method_ratio() * 100.0,
            AppendStrategy::ExtendSingleton,
            self.extend_singleton_ratio() * 100.0
        )
    }
}

/// Reads `path` into a word list with `strategy`, returning the elapsed
/// seconds (never zero) along with the words.
pub fn benchmark_words_file_to_list<P: AsRef<Path>>(
    path: P,
    strategy: AppendStrategy,
) -> Result<(f64, Vec<Token>), Error> {
    let started_at = Instant::now();
    let words = words_file_to_list(&path, strategy)?;
    let elapsed = started_at.elapsed().as_secs_f64() + EPSILON;

    debug!(
        "Read '{}' with {} in {} seconds",
        path.as_ref().display(),
        strategy,
        elapsed
    );

    Ok((elapsed, words))
}

/// Times both append strategies against each other `config.n_sims` times.
///
/// A tie counts as a win for [`AppendStrategy::PushMethod`].
pub fn run_benchmark_words_file_to_list_series<P: AsRef<Path>>(
    path: P,
    config: &AppendBenchmarkConfig,
) -> Result<AppendBenchmarkSummary, Error> {
    if config.n_sims == 0 {
        return Err(Error::InvalidArgument(
            "Benchmark requires at least one iteration".to_string(),
        ));
    }

    info!("Running {} words_file_to_list() iterations...", config.n_sims);

    let mut summary = AppendBenchmarkSummary {
        n_sims: config.n_sims,
        push_method_wins: 0,
        extend_singleton_wins: 0,
    };

    for _ in 0..config.n_sims {
        let (push_elapsed, _) = benchmark_words_file_to_list(&path, AppendStrategy::PushMethod)?;
        let (extend_elapsed, _) =
            benchmark_words_file_to_list(&path, AppendStrategy::ExtendSingleton)?;

        let (winner, efficiency_factor) = if extend_elapsed < push_elapsed {
            summary.extend_singleton_wins += 1;
            (AppendStrategy::ExtendSingleton, push_elapsed / extend_elapsed)
        } else {
            summary.push_method_wins += 1;
            (AppendStrategy::PushMethod, extend_elapsed / push_elapsed)
        };

        if config.debug {
            debug!("{} is {} more efficient!", winner, efficiency_factor);
        }
    }

    info!("DONE: {}", summary);

    Ok(summary)
}
