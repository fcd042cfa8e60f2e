use crate::constants::N_DAYS_IN_YEAR;
use crate::models::BirthdayParadoxConfig;
use crate::types::Birthday;
use crate::utils::has_duplicates;
use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

#[derive(Debug, Clone, PartialEq)]
pub struct BirthdayParadoxResult {
    pub n_sims: usize,
    pub class_size: usize,
    /// Share of simulated classes with at least one shared birthday.
    pub probability: f64,
    /// `(simulation index, running probability after that simulation)`.
    pub convergence: Vec<(usize, f64)>,
}

/// Monte-Carlo estimator for the birthday paradox.
pub struct BirthdayParadoxSimulator {
    config: BirthdayParadoxConfig,
    rng: ChaCha20Rng,
}

impl BirthdayParadoxSimulator {
    pub fn new(config: &BirthdayParadoxConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        };

        Self {
            config: *config,
            rng,
        }
    }

    pub fn config(&self) -> &BirthdayParadoxConfig {
        &self.config
    }

    pub fn days_in_year(&self) -> u16 {
        if self.config.is_leap_year {
            N_DAYS_IN_YEAR + 1
        } else {
            N_DAYS_IN_YEAR
        }
    }

    /// Draws one birthday per student, uniformly over the days of the year.
    pub fn draw_birthdays(&mut self) -> Vec<Birthday> {
        let days_in_year = self.days_in_year();

        (0..self.config.class_size)
            .map(|_| self.rng.gen_range(1..=days_in_year))
            .collect()
    }

    /// Runs `n_sims` simulated classes and reports how often a birthday was shared.
    pub fn run(&mut self, n_sims: usize) -> BirthdayParadoxResult {
        info!(
            "Running {} Birthday Paradox simulations on a class size of {} students...",
            n_sims, self.config.class_size
        );

        let mut n_dups = 0usize;
        let mut convergence = Vec::with_capacity(n_sims);

        for i_sim in 0..n_sims {
            let birthdays = self.draw_birthdays();
            if has_duplicates(&birthdays, false) {
                n_dups += 1;
            }
            convergence.push((i_sim, n_dups as f64 / (i_sim + 1) as f64));
        }

        let probability = if n_sims == 0 {
            0.0
        } else {
            n_dups as f64 / n_sims as f64
        };

        info!(
            "DONE: The probability that at least 2 students from a class size of {} have the same birthday converged to {} after {} simulations.",
            self.config.class_size, probability, n_sims
        );

        BirthdayParadoxResult {
            n_sims,
            class_size: self.config.class_size,
            probability,
            convergence,
        }
    }

    /// Runs 10, 100, ... 10^`n_powers_of_ten` simulations, one result per power.
    pub fn run_series(&mut self, n_powers_of_ten: u32) -> Vec<BirthdayParadoxResult> {
        (1..=n_powers_of_ten)
            .map(|exponent| self.run(10usize.pow(exponent)))
            .collect()
    }
}

/// Closed-form probability that at least two of `class_size` people share a
/// birthday, assuming `days_in_year` equally likely days.
pub fn exact_birthday_probability(class_size: usize, days_in_year: u16) -> f64 {
    let days = days_in_year as f64;

    let p_all_unique: f64 = (0..class_size)
        .map(|i| (days - i as f64).max(0.0) / days)
        .product();

    1.0 - p_all_unique
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_probability_for_default_class() {
        let p = exact_birthday_probability(23, 365);
        assert!((p - 0.5073).abs() < 1e-3, "p = {}", p);
    }

    #[test]
    fn test_exact_probability_edge_sizes() {
        assert_eq!(exact_birthday_probability(0, 365), 0.0);
        assert_eq!(exact_birthday_probability(1, 365), 0.0);
        assert_eq!(exact_birthday_probability(366, 365), 1.0);
    }
}
