//! Statistical checks on the shuffle behind cards and draw pools.

use bingo_engine::core::MAX_NUMBER;
use bingo_engine::{DrawPool, GameRng};

const TRIALS: usize = 3000;

/// Chi-square statistic of observed counts against a uniform expectation.
fn chi_square(counts: &[u32], expected: f64) -> f64 {
    counts
        .iter()
        .map(|&c| {
            let diff = f64::from(c) - expected;
            diff * diff / expected
        })
        .sum()
}

/// Each pool position should see every number about equally often.
#[test]
fn test_pool_positions_are_uniform() {
    let n = usize::from(MAX_NUMBER);
    let mut counts = vec![vec![0u32; n]; n];
    let mut rng = GameRng::new(2024);

    for _ in 0..TRIALS {
        let mut pool = DrawPool::new(&mut rng);
        let mut position = 0;
        while let Ok(number) = pool.draw() {
            counts[position][usize::from(number) - 1] += 1;
            position += 1;
        }
        assert_eq!(position, n);
    }

    // 74 degrees of freedom: mean 74, sd ~12.2
    let expected = TRIALS as f64 / n as f64;
    let mut total = 0.0;
    for (position, row) in counts.iter().enumerate() {
        let stat = chi_square(row, expected);
        assert!(stat < 160.0, "position {position} looks biased: chi2 = {stat:.1}");
        total += stat;
    }

    // Sum over 75 positions: mean 5550, sd ~105
    assert!((5000.0..6100.0).contains(&total), "overall chi2 = {total:.1}");
}

/// The first draw should not favour any column.
#[test]
fn test_first_draw_column_balance() {
    let mut per_column = [0u32; 5];
    let mut rng = GameRng::new(99);

    for _ in 0..TRIALS {
        let first = DrawPool::new(&mut rng).peek().unwrap();
        per_column[usize::from((first - 1) / 15)] += 1;
    }

    // 4 degrees of freedom; 25 is far in the tail
    let stat = chi_square(&per_column, TRIALS as f64 / 5.0);
    assert!(stat < 25.0, "column counts {per_column:?}, chi2 = {stat:.1}");
}
