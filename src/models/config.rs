#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthdayParadoxConfig {
    pub class_size: usize,
    pub is_leap_year: bool,
    /// Seed for the simulation RNG. `None` draws one from the OS.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppendBenchmarkConfig {
    pub n_sims: usize,
    /// Logs every iteration's timings at `debug` level when set.
    pub debug: bool,
}
