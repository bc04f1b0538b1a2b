use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use u_knapsack::{GaConfig, KnapsackProblem, KnapsackRunner};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let problem = KnapsackProblem::investment_portfolio();
    let config = GaConfig::default();
    info!(
        projects = problem.len(),
        budget = problem.budget(),
        population_size = config.population_size,
        iterations = config.iterations,
        "starting project selection"
    );

    let result = KnapsackRunner::run(&problem, &config)?;

    info!(
        solution = %result.best,
        projects = ?result.best.selected_indices(),
        total_cost = problem.total_cost(&result.best),
        total_benefit = result.best_fitness,
        "final best solution"
    );
    Ok(())
}
