use incomecalc::domain::frequency::Frequency;
use incomecalc::domain::income::{calculate_all_incomes, convert_to_yearly};
use rand::Rng;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn test_yearly_matches_independent_normalisation() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let amount = rng.gen_range(0.0..=999_999_999.0);
        for frequency in Frequency::ALL {
            let result = calculate_all_incomes(amount, frequency).unwrap();
            let expected = match frequency {
                Frequency::Hourly => amount * 40.0 * 52.0,
                Frequency::Daily => amount * 5.0 * 52.0,
                Frequency::Weekly => amount * 52.0,
                Frequency::Biweekly => amount * 26.0,
                Frequency::Monthly => amount * 12.0,
                Frequency::Yearly => amount,
            };
            assert!(close(result.yearly, expected), "{frequency}: {amount}");
            assert_eq!(result.yearly, convert_to_yearly(amount, frequency));
        }
    }
}

#[test]
fn test_round_trip_reproduces_amount() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let amount = rng.gen_range(0.0..=999_999_999.0);
        for frequency in Frequency::ALL {
            let result = calculate_all_incomes(amount, frequency).unwrap();
            assert!(
                close(result.get(frequency), amount),
                "{frequency}: {amount} came back as {}",
                result.get(frequency)
            );
        }
    }
}

#[test]
fn test_results_are_consistent_with_each_other() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let amount = rng.gen_range(0.0..=10_000.0);
        let result = calculate_all_incomes(amount, Frequency::Weekly).unwrap();
        assert!(close(result.biweekly, result.weekly * 2.0));
        assert!(close(result.weekly, result.daily * 5.0));
        assert!(close(result.daily, result.hourly * 8.0));
        assert!(close(result.yearly, result.monthly * 12.0));
    }
}

#[test]
fn test_engine_is_deterministic() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let amount = rng.gen_range(0.0..=999_999_999.0);
        for frequency in Frequency::ALL {
            let first = calculate_all_incomes(amount, frequency).unwrap();
            let second = calculate_all_incomes(amount, frequency).unwrap();
            for f in Frequency::ALL {
                assert_eq!(first.get(f).to_bits(), second.get(f).to_bits());
            }
        }
    }
}
