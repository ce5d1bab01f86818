//! Roulette-wheel selection.
//!
//! Fitness values are normalized into a cumulative probability table; each
//! draw `r ∈ [0, 1)` picks the chromosome whose slice of the table contains
//! `r`. Selection probability is proportional to fitness.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Population;
use crate::error::{GaError, Result};
use crate::random::RandomSource;

/// Cumulative selection probabilities for one generation.
///
/// Holds `P + 1` non-decreasing entries: `table[0] = 0` and
/// `table[i + 1] = table[i] + fitness_i / total`.
#[derive(Debug, Clone, PartialEq)]
pub struct CumulativeTable {
    table: Vec<f64>,
}

impl CumulativeTable {
    /// Builds the table from per-chromosome fitness values.
    ///
    /// Fails with [`GaError::DegenerateFitness`] if `fitness` is empty,
    /// contains a negative or non-finite value, or sums to zero.
    pub fn from_fitness(fitness: &[f64]) -> Result<Self> {
        if fitness.is_empty() {
            return Err(GaError::DegenerateFitness(
                "cannot select from empty population".into(),
            ));
        }
        if let Some((i, f)) = fitness
            .iter()
            .enumerate()
            .find(|(_, f)| !f.is_finite() || **f < 0.0)
        {
            return Err(GaError::DegenerateFitness(format!(
                "fitness[{i}] = {f} is not a finite non-negative value"
            )));
        }

        let total: f64 = fitness.iter().sum();
        if !(total > 0.0 && total.is_finite()) {
            return Err(GaError::DegenerateFitness(format!(
                "total fitness {total} cannot be normalized"
            )));
        }

        let mut table = Vec::with_capacity(fitness.len() + 1);
        let mut cumulative = 0.0;
        table.push(cumulative);
        for &f in fitness {
            cumulative += f / total;
            table.push(cumulative);
        }
        Ok(Self { table })
    }

    /// The raw table, `P + 1` entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.table
    }

    /// Number of selectable chromosomes (`P`).
    pub fn len(&self) -> usize {
        self.table.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maps a draw `r ∈ [0, 1)` to a chromosome index.
    ///
    /// Finds the smallest `k` with `table[k] > r` and returns `k - 1`,
    /// clamped to `[0, P - 1]` so that rounding in the last entry cannot
    /// push the result out of range.
    pub fn index_for(&self, r: f64) -> usize {
        let k = self.table.partition_point(|&p| p <= r);
        k.saturating_sub(1).min(self.len() - 1)
    }

    /// Draws one index.
    pub fn select<S: RandomSource + ?Sized>(&self, rng: &mut S) -> usize {
        self.index_for(rng.next_unit())
    }
}

/// Builds the next population by `P` independent roulette draws with
/// replacement.
///
/// # Panics
/// Panics if `table` was not built for a population of the same size.
pub fn roulette_select<S: RandomSource + ?Sized>(
    population: &Population,
    table: &CumulativeTable,
    rng: &mut S,
) -> Population {
    assert_eq!(
        population.len(),
        table.len(),
        "cumulative table does not match population size"
    );
    (0..population.len())
        .map(|_| population.chromosomes()[table.select(rng)].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::types::Chromosome;
    use crate::random::testing::ScriptedSource;
    use crate::random::RngSource;

    fn make_population(n: usize) -> Population {
        (0..n).map(|i| Chromosome::new(vec![i as i64])).collect()
    }

    #[test]
    fn test_table_shape() {
        let table = CumulativeTable::from_fitness(&[0.5, 0.25, 0.25]).unwrap();
        let t = table.as_slice();
        assert_eq!(t.len(), 4);
        assert_eq!(t[0], 0.0);
        assert!((t[1] - 0.5).abs() < 1e-12);
        assert!((t[2] - 0.75).abs() < 1e-12);
        assert!((t[3] - 1.0).abs() < 1e-9);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_table_non_decreasing() {
        let fitness = [1.0 / 9.0, 1.0, 0.2, 1.0 / 31.0, 0.5, 1.0 / 1000.0];
        let table = CumulativeTable::from_fitness(&fitness).unwrap();
        for w in table.as_slice().windows(2) {
            assert!(w[1] >= w[0], "table must be non-decreasing: {:?}", table);
        }
        assert!((table.as_slice()[fitness.len()] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_index_for_boundaries() {
        let table = CumulativeTable::from_fitness(&[1.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(table.index_for(0.0), 0);
        assert_eq!(table.index_for(0.2499), 0);
        assert_eq!(table.index_for(0.25), 1);
        assert_eq!(table.index_for(0.6), 2);
        assert_eq!(table.index_for(0.999_999_999), 3);
    }

    #[test]
    fn test_index_clamped_when_last_entry_rounds_low() {
        // Hand-built table whose last entry falls short of 1.0.
        let table = CumulativeTable {
            table: vec![0.0, 0.5, 0.999_999],
        };
        assert_eq!(table.index_for(0.999_999_5), 1);
    }

    #[test]
    fn test_zero_fitness_never_selected() {
        let table = CumulativeTable::from_fitness(&[1.0, 0.0, 1.0]).unwrap();
        let mut rng = RngSource::seeded(42);
        for _ in 0..10_000 {
            assert_ne!(table.select(&mut rng), 1);
        }
    }

    #[test]
    fn test_single_individual() {
        let table = CumulativeTable::from_fitness(&[0.3]).unwrap();
        let mut rng = RngSource::seeded(42);
        for _ in 0..100 {
            assert_eq!(table.select(&mut rng), 0);
        }
    }

    #[test]
    fn test_proportional_selection() {
        let table = CumulativeTable::from_fitness(&[0.1, 0.6, 0.3]).unwrap();
        let mut rng = RngSource::seeded(42);

        let mut counts = [0u32; 3];
        let n = 20_000;
        for _ in 0..n {
            counts[table.select(&mut rng)] += 1;
        }
        let share = |c: u32| c as f64 / n as f64;
        assert!((share(counts[0]) - 0.1).abs() < 0.02, "counts: {counts:?}");
        assert!((share(counts[1]) - 0.6).abs() < 0.02, "counts: {counts:?}");
        assert!((share(counts[2]) - 0.3).abs() < 0.02, "counts: {counts:?}");
    }

    #[test]
    fn test_degenerate_inputs_rejected() {
        assert!(matches!(
            CumulativeTable::from_fitness(&[]),
            Err(GaError::DegenerateFitness(_))
        ));
        assert!(matches!(
            CumulativeTable::from_fitness(&[0.0, 0.0]),
            Err(GaError::DegenerateFitness(_))
        ));
        assert!(CumulativeTable::from_fitness(&[1.0, f64::NAN]).is_err());
        assert!(CumulativeTable::from_fitness(&[1.0, -0.5]).is_err());
        assert!(CumulativeTable::from_fitness(&[f64::INFINITY]).is_err());
    }

    #[test]
    fn test_roulette_select_scripted() {
        let pop = make_population(4);
        let table = CumulativeTable::from_fitness(&[1.0, 1.0, 1.0, 1.0]).unwrap();
        let mut rng = ScriptedSource::new(&[0.9, 0.1, 0.1, 0.5], &[]);

        let next = roulette_select(&pop, &table, &mut rng);
        let picked: Vec<i64> = next.iter().map(|c| c.genes()[0]).collect();
        assert_eq!(picked, vec![3, 0, 0, 2]);
        assert!(rng.is_exhausted());
    }

    #[test]
    fn test_roulette_select_keeps_size() {
        let pop = make_population(7);
        let table =
            CumulativeTable::from_fitness(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7]).unwrap();
        let mut rng = RngSource::seeded(3);
        for _ in 0..50 {
            assert_eq!(roulette_select(&pop, &table, &mut rng).len(), 7);
        }
    }

    #[test]
    #[should_panic(expected = "cumulative table does not match population size")]
    fn test_roulette_select_size_mismatch_panics() {
        let pop = make_population(3);
        let table = CumulativeTable::from_fitness(&[1.0, 1.0]).unwrap();
        let mut rng = RngSource::seeded(1);
        roulette_select(&pop, &table, &mut rng);
    }
}
