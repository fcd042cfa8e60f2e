use listcraft::{
    exact_birthday_probability, BirthdayParadoxConfig, BirthdayParadoxSimulator,
    DEFAULT_BIRTHDAY_PARADOX_CONFIG,
};

fn seeded_config(seed: u64) -> BirthdayParadoxConfig {
    BirthdayParadoxConfig {
        seed: Some(seed),
        ..*DEFAULT_BIRTHDAY_PARADOX_CONFIG
    }
}

#[cfg(test)]
mod birthday_paradox_tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(DEFAULT_BIRTHDAY_PARADOX_CONFIG.class_size, 23);
        assert!(!DEFAULT_BIRTHDAY_PARADOX_CONFIG.is_leap_year);
        assert_eq!(DEFAULT_BIRTHDAY_PARADOX_CONFIG.seed, None);
    }

    #[test]
    fn test_birthdays_fall_within_the_year() {
        let mut simulator = BirthdayParadoxSimulator::new(&BirthdayParadoxConfig {
            class_size: 500,
            is_leap_year: true,
            seed: Some(7),
        });
        assert_eq!(simulator.days_in_year(), 366);

        let birthdays = simulator.draw_birthdays();
        assert_eq!(birthdays.len(), 500);
        assert!(birthdays.iter().all(|&day| (1..=366).contains(&day)));
    }

    #[test]
    fn test_same_seed_gives_same_result() {
        let first = BirthdayParadoxSimulator::new(&seeded_config(42)).run(1_000);
        let second = BirthdayParadoxSimulator::new(&seeded_config(42)).run(1_000);

        assert_eq!(first, second);
    }

    #[test]
    fn test_convergence_tracks_every_simulation() {
        let result = BirthdayParadoxSimulator::new(&seeded_config(1)).run(250);

        assert_eq!(result.n_sims, 250);
        assert_eq!(result.class_size, 23);
        assert_eq!(result.convergence.len(), 250);
        assert_eq!(result.convergence.first().map(|point| point.0), Some(0));

        let (_, last_ratio) = result.convergence[249];
        assert_eq!(last_ratio, result.probability);
        assert!(result
            .convergence
            .iter()
            .all(|(_, ratio)| (0.0..=1.0).contains(ratio)));
    }

    #[test]
    fn test_estimate_approaches_exact_probability() {
        let result = BirthdayParadoxSimulator::new(&seeded_config(2024)).run(20_000);
        let exact = exact_birthday_probability(23, 365);

        assert!(
            (result.probability - exact).abs() < 0.03,
            "estimate {} too far from {}",
            result.probability,
            exact
        );
    }

    #[test]
    fn test_degenerate_class_sizes() {
        let mut lonely = BirthdayParadoxSimulator::new(&BirthdayParadoxConfig {
            class_size: 1,
            is_leap_year: false,
            seed: Some(3),
        });
        assert_eq!(lonely.run(100).probability, 0.0);

        let mut crowded = BirthdayParadoxSimulator::new(&BirthdayParadoxConfig {
            class_size: 367,
            is_leap_year: true,
            seed: Some(3),
        });
        assert_eq!(crowded.run(10).probability, 1.0);
    }

    #[test]
    fn test_zero_simulations() {
        let result = BirthdayParadoxSimulator::new(&seeded_config(5)).run(0);

        assert_eq!(result.probability, 0.0);
        assert!(result.convergence.is_empty());
    }

    #[test]
    fn test_series_runs_powers_of_ten() {
        let results = BirthdayParadoxSimulator::new(&seeded_config(9)).run_series(3);

        let n_sims: Vec<usize> = results.iter().map(|result| result.n_sims).collect();
        assert_eq!(n_sims, vec![10, 100, 1_000]);
    }
}
