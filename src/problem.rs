//! Project catalog, budget, and fitness evaluation.
//!
//! [`KnapsackProblem`] is the immutable problem definition handed to the
//! runner. It owns the project catalog and the budget cap, and scores
//! candidate selections.

use crate::error::{KnapsackError, Result};
use crate::individual::Individual;
use rand::Rng;

/// An investment project with a fixed cost and benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Project {
    pub cost: u64,
    pub benefit: u64,
}

impl Project {
    /// Creates a project from its cost and benefit.
    pub const fn new(cost: u64, benefit: u64) -> Self {
        Self { cost, benefit }
    }
}

/// Budget-constrained project selection (0/1 knapsack).
///
/// Fitness is the total benefit of the selected projects when their total
/// cost fits the budget, and zero otherwise. Infeasible selections are not
/// repaired or partially penalized.
///
/// # Examples
///
/// ```
/// use u_knapsack::{Individual, KnapsackProblem};
///
/// let problem = KnapsackProblem::investment_portfolio();
/// let pick: Individual = "1010110".parse().unwrap();
/// assert_eq!(problem.total_cost(&pick), 185_000);
/// assert_eq!(problem.fitness(&pick), 355_000);
///
/// let everything: Individual = "1111111".parse().unwrap();
/// assert_eq!(problem.fitness(&everything), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackProblem {
    projects: Vec<Project>,
    budget: u64,
}

/// The seven-project catalog used by [`KnapsackProblem::investment_portfolio`].
pub const PORTFOLIO_PROJECTS: [Project; 7] = [
    Project::new(50_000, 90_000),
    Project::new(45_000, 70_000),
    Project::new(50_000, 100_000),
    Project::new(30_000, 60_000),
    Project::new(45_000, 85_000),
    Project::new(40_000, 80_000),
    Project::new(30_000, 50_000),
];

/// Budget cap used by [`KnapsackProblem::investment_portfolio`].
pub const PORTFOLIO_BUDGET: u64 = 200_000;

impl KnapsackProblem {
    /// Creates a problem from a catalog and a budget.
    ///
    /// Single-point crossover needs an interior split point, so the catalog
    /// must contain at least two projects. The costs and the benefits of the
    /// whole catalog must each sum within `u64`, which keeps every subset
    /// total exact.
    pub fn new(projects: Vec<Project>, budget: u64) -> Result<Self> {
        if projects.len() < 2 {
            return Err(KnapsackError::CatalogTooSmall(projects.len()));
        }
        let checked_total = |field: &'static str, value: fn(&Project) -> u64| {
            projects
                .iter()
                .try_fold(0u64, |acc, p| acc.checked_add(value(p)))
                .ok_or(KnapsackError::CatalogOverflow { field })
        };
        checked_total("cost", |p| p.cost)?;
        checked_total("benefit", |p| p.benefit)?;
        Ok(Self { projects, budget })
    }

    /// The fixed seven-project portfolio with a budget of 200 000.
    pub fn investment_portfolio() -> Self {
        Self {
            projects: PORTFOLIO_PROJECTS.to_vec(),
            budget: PORTFOLIO_BUDGET,
        }
    }

    /// The project catalog, in chromosome order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Budget cap on the total cost of a selection.
    pub fn budget(&self) -> u64 {
        self.budget
    }

    /// Number of projects in the catalog (the chromosome length).
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` if the catalog has no projects.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Creates a random selection with one uniform bit per project.
    pub fn create_individual<R: Rng>(&self, rng: &mut R) -> Individual {
        Individual::random(self.len(), rng)
    }

    /// Iterates over the projects selected by `individual`.
    ///
    /// `individual` must carry exactly one bit per project; debug builds
    /// assert it.
    fn selected<'a>(&'a self, individual: &'a Individual) -> impl Iterator<Item = &'a Project> {
        debug_assert_eq!(
            individual.len(),
            self.len(),
            "individual length must match catalog size"
        );
        self.projects
            .iter()
            .zip(individual.bits())
            .filter_map(|(project, &on)| on.then_some(project))
    }

    /// Sum of the costs of the selected projects.
    pub fn total_cost(&self, individual: &Individual) -> u64 {
        self.selected(individual).map(|p| p.cost).sum()
    }

    /// Sum of the benefits of the selected projects, ignoring the budget.
    pub fn total_benefit(&self, individual: &Individual) -> u64 {
        self.selected(individual).map(|p| p.benefit).sum()
    }

    /// Whether the selection fits within the budget.
    pub fn is_feasible(&self, individual: &Individual) -> bool {
        self.total_cost(individual) <= self.budget
    }

    /// Fitness of a selection: total benefit if feasible, else 0.
    pub fn fitness(&self, individual: &Individual) -> u64 {
        if self.is_feasible(individual) {
            self.total_benefit(individual)
        } else {
            0
        }
    }
}
