//! Generational loop.
//!
//! [`KnapsackRunner`] orchestrates the evolutionary process:
//! initialization → ranking → elitism → selection → crossover → mutation → repeat.

use crate::config::GaConfig;
use crate::error::Result;
use crate::individual::Individual;
use crate::operators::{mutate_owned, single_point_crossover};
use crate::problem::KnapsackProblem;
use crate::random::rng_from_seed;
use crate::selection::select_parents;
use rand::Rng;
use std::cmp::Reverse;
use tracing::{debug, info, instrument};

/// Summary of one completed generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation number, starting at 1.
    pub generation: usize,

    /// Mutation rate applied to this generation's offspring.
    pub mutation_rate: f64,

    /// Best individual (first occurrence among ties).
    pub best: Individual,

    /// Fitness of `best`.
    pub best_fitness: u64,

    /// Mean fitness over the population.
    pub mean_fitness: f64,

    /// Number of individuals within budget.
    pub feasible_count: usize,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The randomly generated starting population.
    pub initial_population: Vec<Individual>,

    /// Population after the last generation.
    pub final_population: Vec<Individual>,

    /// Best individual of the final population.
    pub best: Individual,

    /// Fitness of `best` (its total benefit).
    pub best_fitness: u64,

    /// Number of generations executed.
    pub generations: usize,

    /// Per-generation statistics, in order.
    pub history: Vec<GenerationStats>,
}

/// Executes the knapsack GA.
///
/// # Usage
///
/// ```
/// use u_knapsack::{GaConfig, KnapsackProblem, KnapsackRunner};
///
/// let problem = KnapsackProblem::investment_portfolio();
/// let config = GaConfig::default().with_seed(42);
/// let result = KnapsackRunner::run(&problem, &config).unwrap();
///
/// assert_eq!(result.final_population.len(), config.population_size);
/// assert!(problem.is_feasible(&result.best) || result.best_fitness == 0);
/// ```
pub struct KnapsackRunner;

impl KnapsackRunner {
    /// Runs the GA with an RNG seeded from `config.seed`.
    pub fn run(problem: &KnapsackProblem, config: &GaConfig) -> Result<GaResult> {
        let mut rng = rng_from_seed(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`.
    ///
    /// `config.seed` is ignored.
    #[instrument(level = "debug", skip_all, fields(
        projects = problem.len(),
        budget = problem.budget(),
        population_size = config.population_size,
        iterations = config.iterations,
    ))]
    pub fn run_with_rng<R: Rng>(
        problem: &KnapsackProblem,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult> {
        config.validate()?;

        let initial_population = initial_population(problem, config.population_size, rng);
        info!("initial population");
        for individual in &initial_population {
            info!(
                individual = %individual,
                fitness = problem.fitness(individual),
                "member"
            );
        }

        let mut population = initial_population.clone();
        let mut history = Vec::with_capacity(config.iterations);

        for generation in 1..=config.iterations {
            population = Self::evolve_generation(problem, config, &population, generation, rng);

            let stats = generation_stats(problem, config, &population, generation);
            info!(
                generation,
                best = %stats.best,
                fitness = stats.best_fitness,
                "best of generation"
            );
            debug!(
                generation,
                mutation_rate = stats.mutation_rate,
                mean_fitness = stats.mean_fitness,
                feasible = stats.feasible_count,
                "generation summary"
            );
            history.push(stats);
        }

        let best = find_best(problem, &population).clone();
        let best_fitness = problem.fitness(&best);

        Ok(GaResult {
            initial_population,
            final_population: population,
            best,
            best_fitness,
            generations: config.iterations,
            history,
        })
    }

    /// Produces generation `generation` (1-indexed) from `population`.
    ///
    /// The result starts with unmutated copies of the top
    /// `config.elitism_count` individuals by fitness, followed by mutated
    /// offspring, and always has exactly `config.population_size` members.
    ///
    /// # Panics
    /// Panics if `population` is empty while offspring are needed.
    pub fn evolve_generation<R: Rng>(
        problem: &KnapsackProblem,
        config: &GaConfig,
        population: &[Individual],
        generation: usize,
        rng: &mut R,
    ) -> Vec<Individual> {
        let mutation_rate = config.mutation_rate(generation);

        // Stable sort: equal-fitness individuals keep their relative order.
        let mut ranked = population.to_vec();
        ranked.sort_by_cached_key(|ind| Reverse(problem.fitness(ind)));

        let elite_count = config.elitism_count.min(ranked.len());
        let mut next_gen: Vec<Individual> = ranked[..elite_count].to_vec();

        while next_gen.len() < config.population_size {
            let (parent1, parent2) = select_parents(problem, &ranked, rng);
            let (child1, child2) = single_point_crossover(parent1, parent2, rng);
            next_gen.push(mutate_owned(child1, mutation_rate, rng));
            next_gen.push(mutate_owned(child2, mutation_rate, rng));
        }

        next_gen.truncate(config.population_size);
        next_gen
    }
}

/// Creates `size` random individuals for `problem`.
pub fn initial_population<R: Rng>(
    problem: &KnapsackProblem,
    size: usize,
    rng: &mut R,
) -> Vec<Individual> {
    (0..size).map(|_| problem.create_individual(rng)).collect()
}

/// Finds the individual with the highest fitness.
///
/// Ties go to the earliest individual.
///
/// # Panics
/// Panics if `population` is empty.
pub fn find_best<'a>(problem: &KnapsackProblem, population: &'a [Individual]) -> &'a Individual {
    let mut iter = population.iter();
    let mut best = iter.next().expect("population must not be empty");
    let mut best_fitness = problem.fitness(best);
    for ind in iter {
        let f = problem.fitness(ind);
        if f > best_fitness {
            best = ind;
            best_fitness = f;
        }
    }
    best
}

fn generation_stats(
    problem: &KnapsackProblem,
    config: &GaConfig,
    population: &[Individual],
    generation: usize,
) -> GenerationStats {
    let best = find_best(problem, population).clone();
    let fitnesses: Vec<u64> = population.iter().map(|ind| problem.fitness(ind)).collect();
    let total: u128 = fitnesses.iter().map(|&f| u128::from(f)).sum();
    let mean_fitness = total as f64 / fitnesses.len() as f64;
    let feasible_count = population.iter().filter(|ind| problem.is_feasible(ind)).count();

    GenerationStats {
        generation,
        mutation_rate: config.mutation_rate(generation),
        best_fitness: problem.fitness(&best),
        best,
        mean_fitness,
        feasible_count,
    }
}

// ============================================================================
// Tests
// ============================================================================
