use crate::constants::{N_DEFAULT_CLASS_SIZE, N_ITERATIONS};
use crate::models::{AppendBenchmarkConfig, BirthdayParadoxConfig};

pub const DEFAULT_BIRTHDAY_PARADOX_CONFIG: &BirthdayParadoxConfig = &BirthdayParadoxConfig {
    class_size: N_DEFAULT_CLASS_SIZE,
    is_leap_year: false,
    seed: None,
};

pub const DEFAULT_APPEND_BENCHMARK_CONFIG: &AppendBenchmarkConfig = &AppendBenchmarkConfig {
    n_sims: N_ITERATIONS,
    debug: false,
};
