//! Genetic-algorithm solver for integer linear equations.
//!
//! Given fixed integer coefficients `c` and a non-negative target `t`, the
//! solver evolves integer gene vectors `g` (each gene in `[0, t]`) towards
//! `Σ g_i · c_i = t`:
//!
//! - **[`ga`]**: Population model, roulette selection, single-point
//!   crossover, point mutation, and the generation controller.
//! - **[`random`]**: The injectable random source every operator draws from.
//! - **[`report`]**: Plain-text population listings.
//!
//! # Example
//!
//! ```
//! use u_lineq::ga::{GaConfig, GaRunner, LinearEquation};
//!
//! let problem = LinearEquation::new(vec![1, 2, 3, 4], 30)?;
//! let config = GaConfig::default().with_max_generations(1_000).with_seed(42);
//! let result = GaRunner::run(&problem, &config)?;
//! assert_eq!(result.population.len(), config.population_size);
//! # Ok::<(), u_lineq::GaError>(())
//! ```

pub mod error;
pub mod ga;
pub mod random;
pub mod report;

pub use error::{GaError, Result};
