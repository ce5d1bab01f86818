//! Integer-vector genetic operators.
//!
//! Initialization, crossover and mutation for chromosomes whose genes are
//! integers in `[0, target]`. All operators draw from a caller-supplied
//! [`RandomSource`], so a run is reproducible from its seed.
//!
//! # Initialization
//!
//! - [`initialize_population`]: every gene uniform in `[0, target]`
//!
//! # Crossover
//!
//! - [`crossover_pool`]: choose which chromosomes take part
//! - [`single_point_crossover`]: swap tails of two chromosomes
//! - [`recombine`]: pool, pair in order, and cross each pair
//!
//! # Mutation
//!
//! - [`mutation_count`]: `round(rate · P · N)`
//! - [`mutate`]: overwrite random (chromosome, position) slots
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

use super::types::{Chromosome, LinearEquation, Population};
use crate::error::{GaError, Result};
use crate::random::RandomSource;

// ============================================================================
// Initialization
// ============================================================================

/// Creates `size` random chromosomes for `problem`.
///
/// Genes are drawn chromosome by chromosome, position by position, each
/// uniform in `[0, target]`.
pub fn initialize_population<S: RandomSource + ?Sized>(
    problem: &LinearEquation,
    size: usize,
    rng: &mut S,
) -> Result<Population> {
    if size < 1 {
        return Err(GaError::Config(
            "population_size must be at least 1".into(),
        ));
    }
    let n = problem.chromosome_len();
    let target = problem.target();

    Ok((0..size)
        .map(|_| {
            let genes = (0..n).map(|_| rng.next_in_range(0, target)).collect();
            Chromosome::new(genes)
        })
        .collect())
}

// ============================================================================
// Crossover
// ============================================================================

/// One crossover applied by [`recombine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossoverRecord {
    pub first: usize,
    pub second: usize,
    /// Genes at positions `>= point` were swapped.
    pub point: usize,
}

/// Indices that join the crossover pool.
///
/// One `[0, 1)` draw per position, in order; position `i` is included when
/// its draw is below `rate`.
pub fn crossover_pool<S: RandomSource + ?Sized>(
    population_size: usize,
    rate: f64,
    rng: &mut S,
) -> Vec<usize> {
    (0..population_size)
        .filter(|_| rng.next_unit() < rate)
        .collect()
}

/// Swaps the genes at positions `>= point` between `a` and `b`.
///
/// `point == len` swaps nothing.
///
/// # Panics
/// Panics if the chromosomes have different lengths or `point > len`.
pub fn single_point_crossover(a: &mut Chromosome, b: &mut Chromosome, point: usize) {
    assert_eq!(a.len(), b.len(), "parents must have equal length");
    assert!(point <= a.len(), "crossover point {point} beyond chromosome length");
    a.genes_mut()[point..].swap_with_slice(&mut b.genes_mut()[point..]);
}

/// Single-point crossover on a random subset of `population`, in place.
///
/// Pool members are paired by encounter order; an unpaired last member is
/// left untouched. Each pair draws its point uniformly from `[1, N]`.
/// All pool draws happen before any point draw.
pub fn recombine<S: RandomSource + ?Sized>(
    population: &mut Population,
    rate: f64,
    rng: &mut S,
) -> Vec<CrossoverRecord> {
    let pool = crossover_pool(population.len(), rate, rng);
    let mut records = Vec::with_capacity(pool.len() / 2);

    for pair in pool.chunks_exact(2) {
        let (first, second) = (pair[0], pair[1]);
        let (a, b) = population.pair_mut(first, second);
        let n = a.len();
        let point = rng.next_in_range(1, n as i64) as usize;
        single_point_crossover(a, b, point);
        records.push(CrossoverRecord {
            first,
            second,
            point,
        });
    }

    records
}

// ============================================================================
// Mutation
// ============================================================================

/// One gene overwrite applied by [`mutate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MutationRecord {
    pub chromosome: usize,
    pub position: usize,
    pub value: i64,
}

/// Number of mutation events per generation: `round(rate · P · N)`.
///
/// Uses [`f64::round`], which rounds half away from zero.
pub fn mutation_count(rate: f64, population_size: usize, chromosome_len: usize) -> usize {
    let total_genes = (population_size * chromosome_len) as f64;
    (rate * total_genes).round().max(0.0) as usize
}

/// Applies `count` independent point mutations, in place.
///
/// Each event draws a chromosome index, then a position, then a new value in
/// `[0, target]`. Events may hit the same slot; the later write wins.
///
/// An empty population has no slots to write, so nothing is drawn and no
/// records are returned regardless of `count`.
pub fn mutate<S: RandomSource + ?Sized>(
    population: &mut Population,
    count: usize,
    problem: &LinearEquation,
    rng: &mut S,
) -> Vec<MutationRecord> {
    let p = population.len();
    let n = problem.chromosome_len();
    if p == 0 {
        return Vec::new();
    }

    (0..count)
        .map(|_| {
            let chromosome = rng.next_index(p);
            let position = rng.next_index(n);
            let value = rng.next_in_range(0, problem.target());
            population.chromosomes_mut()[chromosome].genes_mut()[position] = value;
            MutationRecord {
                chromosome,
                position,
                value,
            }
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
