//! Error types.
//!
//! The evolutionary loop itself cannot fail once started; every error
//! here is raised while validating inputs before a run.

use thiserror::Error;

/// Result alias using [`KnapsackError`].
pub type Result<T> = std::result::Result<T, KnapsackError>;

/// Errors raised while building a problem or validating a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnapsackError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("iterations must be at least 1")]
    NoIterations,

    #[error("elitism_count ({elitism_count}) exceeds population_size ({population_size})")]
    ElitismTooLarge {
        elitism_count: usize,
        population_size: usize,
    },

    #[error("{name} must be in [0, 1], got {value}")]
    InvalidMutationRate { name: &'static str, value: f64 },

    #[error("catalog needs at least 2 projects for crossover, got {0}")]
    CatalogTooSmall(usize),

    #[error("catalog {field} total overflows u64")]
    CatalogOverflow { field: &'static str },

    #[error("invalid bit {found:?} at position {position}, expected '0' or '1'")]
    InvalidBit { found: char, position: usize },
}
