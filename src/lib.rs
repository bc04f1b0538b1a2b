//! Budget-constrained project selection with a genetic algorithm.
//!
//! Chooses a subset of investment projects, each with a fixed cost and
//! benefit, maximizing total benefit under a single budget cap (the 0/1
//! knapsack problem). The search is heuristic: a small generational GA
//! with elitism, roulette-wheel selection, single-point crossover, and
//! annealed bit-flip mutation.
//!
//! - [`KnapsackProblem`]: immutable catalog + budget, and the fitness function
//! - [`Individual`]: one bit per project
//! - [`GaConfig`]: population size, iterations, elitism, mutation schedule
//! - [`KnapsackRunner`]: executes the generational loop
//!
//! # Example
//!
//! ```
//! use u_knapsack::{GaConfig, KnapsackProblem, KnapsackRunner};
//!
//! let problem = KnapsackProblem::investment_portfolio();
//! let result = KnapsackRunner::run(&problem, &GaConfig::default().with_seed(7))?;
//! assert!(result.best_fitness <= 380_000);
//! # Ok::<(), u_knapsack::KnapsackError>(())
//! ```
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Martello & Toth (1990), *Knapsack Problems: Algorithms and Computer Implementations*

mod config;
mod error;
mod individual;
pub mod operators;
mod problem;
pub mod random;
mod runner;
mod selection;

pub use config::{AnnealingSchedule, GaConfig};
pub use error::{KnapsackError, Result};
pub use individual::Individual;
pub use operators::{bit_flip_mutation, crossover_at, single_point_crossover};
pub use problem::{KnapsackProblem, Project, PORTFOLIO_BUDGET, PORTFOLIO_PROJECTS};
pub use runner::{find_best, initial_population, GaResult, GenerationStats, KnapsackRunner};
pub use selection::{select_parent_indices, select_parents};
