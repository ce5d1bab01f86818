//! GA evolutionary loop execution.
//!
//! [`EvolutionController`] owns the population and drives one generation at
//! a time: evaluation → roulette selection → crossover → mutation → commit.
//! [`GaRunner`] wraps it for the common "seed, run, collect" case.

use super::config::GaConfig;
use super::operators::{initialize_population, mutate, mutation_count, recombine};
use super::selection::{roulette_select, CumulativeTable};
use super::types::{evaluate_population, Chromosome, LinearEquation, Population};
use crate::error::{GaError, Result};
use crate::random::{RandomSource, RngSource};
use log::{debug, info, trace};

/// Lifecycle of an [`EvolutionController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// Population initialized, no generation run yet.
    Idle,
    /// `generation` generations completed so far.
    Running { generation: usize },
    /// All configured generations completed.
    Done,
}

/// Summary of one completed generation.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationStats {
    /// 1-based index of the generation just completed.
    pub generation: usize,

    /// Best fitness of the population that entered this generation.
    pub best_fitness: f64,

    /// Mean fitness of the population that entered this generation.
    pub mean_fitness: f64,

    /// Number of chromosome pairs crossed.
    pub crossovers: usize,

    /// Number of gene overwrites.
    pub mutations: usize,
}

/// Final state of a run, handed to reporting.
#[derive(Debug, Clone)]
pub struct EvolutionResult {
    /// The population after the last generation.
    pub population: Population,

    /// `Σ gene_i · coefficient_i` per chromosome, in population order.
    pub weighted_sums: Vec<i128>,

    /// Fitness per chromosome, in population order.
    pub fitness: Vec<f64>,

    /// Fittest chromosome of the final population (first one on ties).
    pub best: Chromosome,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Target value of the solved equation.
    pub target: i64,
}

impl EvolutionResult {
    fn from_population(
        problem: &LinearEquation,
        population: Population,
        generations: usize,
    ) -> Self {
        let weighted_sums: Vec<i128> = population
            .iter()
            .map(|c| problem.weighted_sum(c))
            .collect();
        let fitness = evaluate_population(problem, &population);
        let best_idx = argmax(&fitness);
        Self {
            best: population.chromosomes()[best_idx].clone(),
            best_fitness: fitness[best_idx],
            weighted_sums,
            fitness,
            population,
            generations,
            target: problem.target(),
        }
    }

    /// Chromosomes of the final population that solve the equation exactly.
    pub fn solutions(&self) -> impl Iterator<Item = &Chromosome> + '_ {
        self.population
            .iter()
            .zip(&self.weighted_sums)
            .filter(move |(_, sum)| **sum == i128::from(self.target))
            .map(|(c, _)| c)
    }

    /// Whether any final chromosome solves the equation exactly.
    pub fn is_solved(&self) -> bool {
        self.solutions().next().is_some()
    }
}

/// Drives the generation loop for one [`LinearEquation`].
///
/// # Usage
///
/// ```
/// use u_lineq::ga::{EvolutionController, GaConfig, LinearEquation};
/// use u_lineq::random::RngSource;
///
/// let problem = LinearEquation::new(vec![1, 2, 3, 4], 30).unwrap();
/// let config = GaConfig::default().with_max_generations(100);
/// let mut ctrl =
///     EvolutionController::new(&problem, config, RngSource::seeded(42)).unwrap();
/// let result = ctrl.run().unwrap();
/// assert_eq!(result.population.len(), 6);
/// assert_eq!(result.generations, 100);
/// ```
pub struct EvolutionController<'a, S: RandomSource> {
    problem: &'a LinearEquation,
    config: GaConfig,
    rng: S,
    population: Population,
    generation: usize,
    state: ControllerState,
    mutations_per_generation: usize,
}

impl<'a, S: RandomSource> EvolutionController<'a, S> {
    /// Validates `config` and builds the initial population.
    ///
    /// Fails with [`GaError::Config`] before any generation runs if the
    /// configuration is invalid.
    pub fn new(problem: &'a LinearEquation, config: GaConfig, mut rng: S) -> Result<Self> {
        config.validate()?;
        let population = initialize_population(problem, config.population_size, &mut rng)?;
        let mutations_per_generation = mutation_count(
            config.mutation_rate,
            config.population_size,
            problem.chromosome_len(),
        );
        Ok(Self {
            problem,
            config,
            rng,
            population,
            generation: 0,
            state: ControllerState::Idle,
            mutations_per_generation,
        })
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Generations completed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Runs exactly one generation and commits the new population.
    ///
    /// Returns [`GaError::AlreadyFinished`] once `max_generations`
    /// generations have completed; [`run`](Self::run) can still be called to
    /// collect the result.
    pub fn step(&mut self) -> Result<GenerationStats> {
        if self.state == ControllerState::Done
            || self.generation >= self.config.max_generations
        {
            return Err(GaError::AlreadyFinished);
        }

        let fitness = evaluate_population(self.problem, &self.population);
        let table = CumulativeTable::from_fitness(&fitness)?;

        let mut next = roulette_select(&self.population, &table, &mut self.rng);
        let crossovers = recombine(&mut next, self.config.crossover_rate, &mut self.rng);
        let mutations = mutate(
            &mut next,
            self.mutations_per_generation,
            self.problem,
            &mut self.rng,
        );

        self.population = next;
        self.generation += 1;
        let generation = self.generation;
        self.state = ControllerState::Running { generation };

        trace!(
            "generation {generation}: crossovers={crossovers:?} mutations={mutations:?}"
        );

        let best_fitness = fitness.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let mean_fitness = fitness.iter().sum::<f64>() / fitness.len() as f64;
        Ok(GenerationStats {
            generation,
            best_fitness,
            mean_fitness,
            crossovers: crossovers.len(),
            mutations: mutations.len(),
        })
    }

    /// Runs all configured generations and returns the final result.
    pub fn run(&mut self) -> Result<EvolutionResult> {
        self.run_with_observer(|_| {})
    }

    /// Like [`run`](Self::run), calling `observer` after every generation.
    pub fn run_with_observer<F>(&mut self, mut observer: F) -> Result<EvolutionResult>
    where
        F: FnMut(&GenerationStats),
    {
        if self.state == ControllerState::Done {
            return Err(GaError::AlreadyFinished);
        }

        let max_generations = self.config.max_generations;
        info!(
            "evolving {} chromosomes of {} genes for {} generations (target {})",
            self.population.len(),
            self.problem.chromosome_len(),
            max_generations,
            self.problem.target()
        );

        while self.generation < max_generations {
            let stats = self.step()?;
            if self.config.log_interval > 0 && stats.generation % self.config.log_interval == 0 {
                debug!(
                    "generation {}/{}: best fitness {:.6}, mean fitness {:.6}",
                    stats.generation, max_generations, stats.best_fitness, stats.mean_fitness
                );
            }
            observer(&stats);
        }
        self.state = ControllerState::Done;

        let result =
            EvolutionResult::from_population(self.problem, self.population.clone(), self.generation);
        info!(
            "finished {} generations: best fitness {:.6}, {} exact solution(s)",
            result.generations,
            result.best_fitness,
            result.solutions().count()
        );
        Ok(result)
    }
}

/// Executes a full GA run with a generator seeded from the config.
///
/// # Usage
///
/// ```
/// use u_lineq::ga::{GaConfig, GaRunner, LinearEquation};
///
/// let problem = LinearEquation::new(vec![1, 2, 3, 4], 30).unwrap();
/// let config = GaConfig::default().with_max_generations(200).with_seed(7);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// println!("best fitness: {}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with `config.seed`, or an entropy seed when unset.
    pub fn run(problem: &LinearEquation, config: &GaConfig) -> Result<EvolutionResult> {
        let rng = match config.seed {
            Some(seed) => RngSource::seeded(seed),
            None => RngSource::from_entropy(),
        };
        EvolutionController::new(problem, config.clone(), rng)?.run()
    }
}

/// Index of the largest value, first one on ties.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
