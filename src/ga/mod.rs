//! Genetic Algorithm for integer linear equations.
//!
//! Searches for a gene vector `g` with `Σ g_i · c_i = target` for fixed
//! coefficients `c`. Each generation runs a fixed pipeline over a
//! constant-size population:
//!
//! 1. **Evaluation**: `fitness = 1 / (1 + |target - Σ g_i · c_i|)`
//! 2. **Selection**: roulette wheel over a cumulative probability table
//! 3. **Crossover**: single-point tail swap on a random subset, paired in order
//! 4. **Mutation**: `round(rate · P · N)` random gene overwrites
//!
//! # Key Types
//!
//! - [`LinearEquation`]: Coefficients and target (the problem)
//! - [`Chromosome`] / [`Population`]: Candidate solutions
//! - [`GaConfig`]: Algorithm parameters (population size, rates, generations)
//! - [`EvolutionController`]: Owns the population and steps generations
//! - [`GaRunner`]: Seeds a generator and runs to completion
//! - [`EvolutionResult`]: Final population with weighted sums
//!
//! # Submodules
//!
//! - [`operators`]: Initialization, crossover and mutation operators
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{ControllerState, EvolutionController, EvolutionResult, GaRunner, GenerationStats};
pub use selection::{roulette_select, CumulativeTable};
pub use types::{evaluate_population, Chromosome, LinearEquation, Population};
