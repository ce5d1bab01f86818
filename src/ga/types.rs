//! Core data types: chromosomes, populations and the equation they solve.
//!
//! A [`LinearEquation`] fixes the coefficients and the target value for the
//! whole run. A [`Chromosome`] is one candidate vector of genes and a
//! [`Population`] is the ordered set of candidates in one generation.

use crate::error::{GaError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One candidate solution: an ordered sequence of integer genes.
///
/// The length always equals the coefficient count of the equation it was
/// created for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Chromosome {
    genes: Vec<i64>,
}

impl Chromosome {
    pub fn new(genes: Vec<i64>) -> Self {
        Self { genes }
    }

    pub fn genes(&self) -> &[i64] {
        &self.genes
    }

    pub fn genes_mut(&mut self) -> &mut [i64] {
        &mut self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn into_genes(self) -> Vec<i64> {
        self.genes
    }
}

impl From<Vec<i64>> for Chromosome {
    fn from(genes: Vec<i64>) -> Self {
        Self::new(genes)
    }
}

/// The ordered collection of chromosomes making up one generation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Population {
    chromosomes: Vec<Chromosome>,
}

impl Population {
    pub fn new(chromosomes: Vec<Chromosome>) -> Self {
        Self { chromosomes }
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }

    pub fn chromosomes(&self) -> &[Chromosome] {
        &self.chromosomes
    }

    pub fn chromosomes_mut(&mut self) -> &mut [Chromosome] {
        &mut self.chromosomes
    }

    pub fn get(&self, index: usize) -> Option<&Chromosome> {
        self.chromosomes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Chromosome> {
        self.chromosomes.iter()
    }

    /// Mutable references to two distinct chromosomes.
    ///
    /// # Panics
    /// Panics if `a == b` or either index is out of bounds.
    pub fn pair_mut(&mut self, a: usize, b: usize) -> (&mut Chromosome, &mut Chromosome) {
        assert_ne!(a, b, "pair_mut requires distinct indices");
        if a < b {
            let (head, tail) = self.chromosomes.split_at_mut(b);
            (&mut head[a], &mut tail[0])
        } else {
            let (head, tail) = self.chromosomes.split_at_mut(a);
            (&mut tail[0], &mut head[b])
        }
    }

    pub fn into_chromosomes(self) -> Vec<Chromosome> {
        self.chromosomes
    }
}

impl FromIterator<Chromosome> for Population {
    fn from_iter<T: IntoIterator<Item = Chromosome>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Chromosome;
    type IntoIter = std::slice::Iter<'a, Chromosome>;

    fn into_iter(self) -> Self::IntoIter {
        self.chromosomes.iter()
    }
}

/// The equation `Σ gene_i · coefficient_i = target` being solved.
///
/// # Examples
///
/// ```
/// use u_lineq::ga::{Chromosome, LinearEquation};
///
/// let eq = LinearEquation::new(vec![1, 2, 3, 4], 30).unwrap();
/// let c = Chromosome::new(vec![4, 1, 0, 6]);
/// assert_eq!(eq.weighted_sum(&c), 30);
/// assert_eq!(eq.fitness(&c), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinearEquation {
    coefficients: Vec<i64>,
    target: i64,
}

impl LinearEquation {
    /// Creates the equation.
    ///
    /// Fails if there are no coefficients or the target is negative.
    pub fn new(coefficients: Vec<i64>, target: i64) -> Result<Self> {
        if coefficients.is_empty() {
            return Err(GaError::Config(
                "chromosome length must be at least 1 (no coefficients given)".into(),
            ));
        }
        if target < 0 {
            return Err(GaError::Config(format!(
                "target value must be non-negative, got {target}"
            )));
        }
        Ok(Self {
            coefficients,
            target,
        })
    }

    pub fn coefficients(&self) -> &[i64] {
        &self.coefficients
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    /// Number of genes per chromosome.
    pub fn chromosome_len(&self) -> usize {
        self.coefficients.len()
    }

    /// `Σ gene_i · coefficient_i`.
    ///
    /// Accumulated in `i128` so that any `i64` target and coefficients are
    /// representable; sums beyond the `i128` range saturate.
    pub fn weighted_sum(&self, chromosome: &Chromosome) -> i128 {
        chromosome
            .genes()
            .iter()
            .zip(&self.coefficients)
            .map(|(&g, &c)| i128::from(g) * i128::from(c))
            .fold(0i128, i128::saturating_add)
    }

    /// Fitness in `(0, 1]`: `1 / (1 + |target - weighted_sum|)`.
    ///
    /// Equals `1.0` exactly when the chromosome solves the equation.
    pub fn fitness(&self, chromosome: &Chromosome) -> f64 {
        let diff = i128::from(self.target).saturating_sub(self.weighted_sum(chromosome));
        1.0 / (1.0 + diff.unsigned_abs() as f64)
    }

    pub fn is_solution(&self, chromosome: &Chromosome) -> bool {
        self.weighted_sum(chromosome) == i128::from(self.target)
    }
}

/// Fitness of every chromosome, in population order.
pub fn evaluate_population(problem: &LinearEquation, population: &Population) -> Vec<f64> {
    population.iter().map(|c| problem.fitness(c)).collect()
}
