//! Fitness-proportionate (roulette wheel) parent selection.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::individual::Individual;
use crate::problem::KnapsackProblem;
use rand::Rng;
use tracing::debug;

/// Selects two parent indices by roulette wheel.
///
/// Each index is drawn independently, with replacement, with probability
/// `fitness / total_fitness`. The wheel is spun with an integer threshold
/// in `[0, total_fitness)`, so zero-fitness individuals are never drawn
/// while any individual has positive fitness.
///
/// When the total fitness is zero (every individual infeasible or empty),
/// one index is drawn uniformly and returned as both parents.
///
/// # Panics
/// Panics if `population` is empty.
pub fn select_parent_indices<R: Rng>(
    problem: &KnapsackProblem,
    population: &[Individual],
    rng: &mut R,
) -> (usize, usize) {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let fitnesses: Vec<u64> = population.iter().map(|ind| problem.fitness(ind)).collect();
    // u128: population_size * u64::MAX cannot overflow
    let total: u128 = fitnesses.iter().map(|&f| u128::from(f)).sum();

    if total == 0 {
        let idx = rng.random_range(0..population.len());
        debug!(index = idx, "zero total fitness, selecting one parent uniformly");
        return (idx, idx);
    }

    let first = spin(&fitnesses, total, rng);
    let second = spin(&fitnesses, total, rng);
    (first, second)
}

/// Selects two parents by roulette wheel. See [`select_parent_indices`].
///
/// # Examples
///
/// ```
/// use u_knapsack::{select_parents, Individual, KnapsackProblem};
/// use u_knapsack::random::create_rng;
///
/// let problem = KnapsackProblem::investment_portfolio();
/// let population: Vec<Individual> = ["1111111", "0000001"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
///
/// // the first individual is over budget, so only the second can be drawn
/// let (a, b) = select_parents(&problem, &population, &mut create_rng(1));
/// assert_eq!(a, &population[1]);
/// assert_eq!(b, &population[1]);
/// ```
pub fn select_parents<'a, R: Rng>(
    problem: &KnapsackProblem,
    population: &'a [Individual],
    rng: &mut R,
) -> (&'a Individual, &'a Individual) {
    let (i, j) = select_parent_indices(problem, population, rng);
    (&population[i], &population[j])
}

/// One spin of the wheel. `total` must be the positive sum of `weights`.
fn spin<R: Rng>(weights: &[u64], total: u128, rng: &mut R) -> usize {
    let threshold = rng.random_range(0..total);
    let mut cumulative = 0u128;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += u128::from(w);
        if cumulative > threshold {
            return i;
        }
    }
    unreachable!("threshold below total always lands on a slot")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::Project;
    use crate::random::create_rng;

    fn population(bits: &[&str]) -> Vec<Individual> {
        bits.iter().map(|s| s.parse().unwrap()).collect()
    }

    #[test]
    fn test_roulette_proportional() {
        // fitnesses 1, 3 -> expected shares 25% / 75%
        let problem =
            KnapsackProblem::new(vec![Project::new(1, 1), Project::new(1, 3)], 10).unwrap();
        let pop = population(&["10", "01"]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 2];
        let n = 10_000;
        for _ in 0..n {
            let (a, b) = select_parent_indices(&problem, &pop, &mut rng);
            counts[a] += 1;
            counts[b] += 1;
        }
        let share = counts[1] as f64 / (2 * n) as f64;
        assert!(
            (share - 0.75).abs() < 0.03,
            "expected ~75% for the fitter individual, got {share:.3} ({counts:?})"
        );
    }

    #[test]
    fn test_zero_fitness_never_selected() {
        let problem = KnapsackProblem::investment_portfolio();
        // over budget, empty, feasible
        let pop = population(&["1111111", "0000000", "0010000"]);
        let mut rng = create_rng(42);

        for _ in 0..1000 {
            let (a, b) = select_parent_indices(&problem, &pop, &mut rng);
            assert_eq!((a, b), (2, 2));
        }
    }

    #[test]
    fn test_all_infeasible_falls_back_to_same_parent() {
        let problem = KnapsackProblem::investment_portfolio();
        let pop = population(&["1111111", "1111110", "0111111", "1110111"]);
        assert!(pop.iter().all(|ind| problem.fitness(ind) == 0));
        let mut rng = create_rng(42);

        let mut seen = [false; 4];
        for _ in 0..1000 {
            let (a, b) = select_parents(&problem, &pop, &mut rng);
            assert!(pop.contains(a));
            assert_eq!(a, b);
            let (i, j) = select_parent_indices(&problem, &pop, &mut rng);
            assert_eq!(i, j);
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s), "fallback should be uniform: {seen:?}");
    }

    #[test]
    fn test_draws_with_replacement() {
        let problem = KnapsackProblem::investment_portfolio();
        let pop = population(&["1000000", "0010000"]);
        let mut rng = create_rng(42);

        let same = (0..1000)
            .map(|_| select_parent_indices(&problem, &pop, &mut rng))
            .filter(|(a, b)| a == b)
            .count();
        assert!(same > 0, "identical parents must be possible");
        assert!(same < 1000, "distinct parents must be possible");
    }

    #[test]
    fn test_total_fitness_beyond_u64() {
        // each feasible individual scores u64::MAX; their sum needs more than 64 bits
        let problem = KnapsackProblem::new(
            vec![Project::new(0, u64::MAX), Project::new(1, 0)],
            u64::MAX,
        )
        .unwrap();
        let pop = population(&["10", "10", "01"]);
        let mut rng = create_rng(42);

        let mut counts = [0u32; 3];
        for _ in 0..1000 {
            let (a, b) = select_parent_indices(&problem, &pop, &mut rng);
            counts[a] += 1;
            counts[b] += 1;
        }
        assert_eq!(counts[2], 0, "zero-fitness individual must not be drawn");
        assert!(counts[0] > 0 && counts[1] > 0, "{counts:?}");
    }

    #[test]
    fn test_single_individual() {
        let problem = KnapsackProblem::investment_portfolio();
        let mut rng = create_rng(42);
        let pop = population(&["0000001"]);
        assert_eq!(select_parent_indices(&problem, &pop, &mut rng), (0, 0));
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let problem = KnapsackProblem::investment_portfolio();
        let mut rng = create_rng(42);
        select_parent_indices(&problem, &[], &mut rng);
    }
}
