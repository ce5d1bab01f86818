//! Error types shared across the crate.

use thiserror::Error;

/// Errors produced while configuring or running the solver.
#[derive(Error, Debug)]
pub enum GaError {
    /// Invalid problem or algorithm parameters, detected before any
    /// generation runs.
    #[error("configuration error: {0}")]
    Config(String),

    /// Fitness values cannot be normalized into a probability table.
    #[error("degenerate fitness: {0}")]
    DegenerateFitness(String),

    /// The controller already completed its configured generations.
    #[error("evolution already finished")]
    AlreadyFinished,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GaError>;
