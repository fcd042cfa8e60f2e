use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use listcraft::constants::{N_ITERATIONS, N_SIM_SERIES, QUIT_MESSAGE};
use listcraft::{
    bisect, has_duplicates, is_anagram, run_benchmark_words_file_to_list_series, str_to_list,
    summarize_text_file, words_file_to_list, words_file_to_toggle_case, AppendBenchmarkConfig,
    AppendStrategy, BirthdayParadoxConfig, BirthdayParadoxSimulator,
    DEFAULT_BIRTHDAY_PARADOX_CONFIG,
};
use log::error;
use std::fs;
use std::path::PathBuf;

/// Small list, search, and text-frequency algorithms
#[derive(Parser)]
#[command(name = "listcraft")]
#[command(version)]
#[command(about = "Bisection search, word/letter frequencies, and the birthday paradox")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize word count and letter frequencies of a text file
    Summarize {
        /// Text file to summarize (`.gz` files are decompressed)
        file: PathBuf,

        /// Also write the summary text to this file
        #[arg(long)]
        summary_out: Option<PathBuf>,

        /// Also write per-character counts as CSV to this file
        #[arg(long)]
        csv_out: Option<PathBuf>,
    },

    /// Search a file's word list for a word
    ///
    /// The reported index refers to the sorted word list.
    Bisect {
        file: PathBuf,
        target: String,
    },

    /// Estimate the birthday paradox probability with series of simulations
    Birthday {
        /// Runs 10^1 through 10^N simulations
        #[arg(long, default_value_t = N_SIM_SERIES)]
        powers: u32,

        #[arg(long, default_value_t = DEFAULT_BIRTHDAY_PARADOX_CONFIG.class_size)]
        class_size: usize,

        #[arg(long)]
        leap_year: bool,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Compare `push` against extending with a singleton list when reading a file
    Benchmark {
        file: PathBuf,

        #[arg(short, long, default_value_t = N_ITERATIONS)]
        iterations: usize,

        /// Log every iteration's winner
        #[arg(long)]
        debug: bool,
    },

    /// Write a copy of a file with the case of every letter swapped
    ToggleCase {
        input: PathBuf,
        output: PathBuf,
    },

    /// Check whether two words are anagrams of each other
    Anagram {
        first: String,
        second: String,

        #[arg(long)]
        case_sensitive: bool,
    },

    /// Check whether any of the given words repeats
    Duplicates {
        #[arg(required = true)]
        words: Vec<String>,

        #[arg(long)]
        ignore_case: bool,
    },
}

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(e) = run(cli.command) {
        error!("{:#}", e);
        std::process::exit(1);
    }

    println!("\n{}\n", QUIT_MESSAGE);
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Summarize {
            file,
            summary_out,
            csv_out,
        } => {
            let (summary, _, _) = summarize_text_file(&file)
                .with_context(|| format!("Failed to summarize {}", file.display()))?;
            println!("{}", summary);

            if let Some(summary_out) = summary_out {
                fs::write(&summary_out, summary.to_string())
                    .with_context(|| format!("Failed to write {}", summary_out.display()))?;
                println!("{} file written", summary_out.display());
            }

            if let Some(csv_out) = csv_out {
                summary
                    .write_csv_file(&csv_out)
                    .with_context(|| format!("Failed to write {}", csv_out.display()))?;
                println!("{} file written", csv_out.display());
            }
        }

        Commands::Bisect { file, target } => {
            let words = words_file_to_list(&file, AppendStrategy::ExtendSingleton)
                .with_context(|| format!("Failed to read {}", file.display()))?;

            let result = match words.len() {
                0 => None,
                n => bisect(&words, 0, n - 1, &target),
            };

            match result {
                Some(index) => println!("'{}' found at index {} of the sorted word list", target, index),
                None => println!("'{}' not found", target),
            }
        }

        Commands::Birthday {
            powers,
            class_size,
            leap_year,
            seed,
        } => {
            let config = BirthdayParadoxConfig {
                class_size,
                is_leap_year: leap_year,
                seed,
            };
            let mut simulator = BirthdayParadoxSimulator::new(&config);

            for result in simulator.run_series(powers) {
                println!("# sims = {}, p = {}", result.n_sims, result.probability);
            }
        }

        Commands::Benchmark {
            file,
            iterations,
            debug,
        } => {
            let config = AppendBenchmarkConfig {
                n_sims: iterations,
                debug,
            };
            let summary = run_benchmark_words_file_to_list_series(&file, &config)
                .with_context(|| format!("Failed to benchmark {}", file.display()))?;
            println!("{}", summary);
        }

        Commands::ToggleCase { input, output } => {
            words_file_to_toggle_case(&input, &output)
                .with_context(|| format!("Failed to toggle case of {}", input.display()))?;
            println!("{} file written", output.display());
        }

        Commands::Anagram {
            first,
            second,
            case_sensitive,
        } => {
            let result = is_anagram(&str_to_list(&first), &str_to_list(&second), !case_sensitive);
            println!("is_anagram({:?}, {:?}): {}", first, second, result);
        }

        Commands::Duplicates { words, ignore_case } => {
            println!("has_duplicates({:?}): {}", words, has_duplicates(&words, ignore_case));
        }
    }

    Ok(())
}
