//! GA configuration and mutation-rate annealing.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{KnapsackError, Result};

/// How the mutation rate moves from its initial to its final value.
///
/// Both schedules are linear in the generation number `g` (1-indexed)
/// and start at `initial_mutation_rate` on generation 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnnealingSchedule {
    /// `rate(g) = initial - (g - 1) / iterations * (initial - final)`.
    ///
    /// The interpolation factor counts completed generations, so the last
    /// generation stops one step short of `final_mutation_rate`.
    #[default]
    PreviousGeneration,

    /// `rate(g) = initial - (g - 1) / (iterations - 1) * (initial - final)`.
    ///
    /// Reaches `final_mutation_rate` exactly on the last generation.
    /// With a single iteration the rate stays at `initial_mutation_rate`.
    Inclusive,
}

/// Configuration for the knapsack GA.
///
/// # Defaults
///
/// ```
/// use u_knapsack::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.iterations, 10);
/// assert_eq!(config.elitism_count, 2);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_knapsack::{AnnealingSchedule, GaConfig};
///
/// let config = GaConfig::default()
///     .with_population_size(40)
///     .with_iterations(25)
///     .with_mutation_rates(0.3, 0.01)
///     .with_annealing(AnnealingSchedule::Inclusive)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals in every generation.
    pub population_size: usize,

    /// Number of generations to run.
    pub iterations: usize,

    /// Number of top individuals copied unchanged into the next generation.
    pub elitism_count: usize,

    /// Per-bit flip probability on the first generation.
    pub initial_mutation_rate: f64,

    /// Per-bit flip probability the schedule anneals towards.
    pub final_mutation_rate: f64,

    /// Interpolation rule between the two mutation rates.
    pub annealing: AnnealingSchedule,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            iterations: 10,
            elitism_count: 2,
            initial_mutation_rate: 0.2,
            final_mutation_rate: 0.05,
            annealing: AnnealingSchedule::default(),
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets how many elites survive each generation.
    pub fn with_elitism_count(mut self, n: usize) -> Self {
        self.elitism_count = n;
        self
    }

    /// Sets the initial and final mutation rates.
    pub fn with_mutation_rates(mut self, initial: f64, final_rate: f64) -> Self {
        self.initial_mutation_rate = initial;
        self.final_mutation_rate = final_rate;
        self
    }

    /// Sets the annealing schedule.
    pub fn with_annealing(mut self, annealing: AnnealingSchedule) -> Self {
        self.annealing = annealing;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Mutation rate for generation `generation` (1-indexed).
    pub fn mutation_rate(&self, generation: usize) -> f64 {
        let done = generation.saturating_sub(1) as f64;
        let span = match self.annealing {
            AnnealingSchedule::PreviousGeneration => self.iterations as f64,
            AnnealingSchedule::Inclusive => self.iterations.saturating_sub(1) as f64,
        };
        if span <= 0.0 {
            return self.initial_mutation_rate;
        }
        let delta = self.initial_mutation_rate - self.final_mutation_rate;
        (self.initial_mutation_rate - done / span * delta).clamp(0.0, 1.0)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(KnapsackError::PopulationTooSmall(self.population_size));
        }
        if self.iterations == 0 {
            return Err(KnapsackError::NoIterations);
        }
        if self.elitism_count > self.population_size {
            return Err(KnapsackError::ElitismTooLarge {
                elitism_count: self.elitism_count,
                population_size: self.population_size,
            });
        }
        for (name, value) in [
            ("initial_mutation_rate", self.initial_mutation_rate),
            ("final_mutation_rate", self.final_mutation_rate),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(KnapsackError::InvalidMutationRate { name, value });
            }
        }
        Ok(())
    }
}
