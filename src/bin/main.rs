use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{crate_version, Parser};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use env_logger::Builder;

use simplex_dictionary::algorithm::OptimizationResult;
use simplex_dictionary::algorithm::two_phase::solver::Configuration;
use simplex_dictionary::algorithm::two_phase::strategy::pivot_rule::EnteringMethod;
use simplex_dictionary::algorithm::two_phase::TwoPhase;
use simplex_dictionary::io::display::WriterObserver;
use simplex_dictionary::io::import;

/// Solve a linear program with the dictionary simplex method, showing every pivot.
#[derive(Parser)]
#[command(version = crate_version!())]
struct Opts {
    /// File containing the problem description
    problem_file: PathBuf,
    /// Rule used to select the entering variable: first, greatest or most-advantageous
    #[arg(long, default_value_t = EnteringMethod::First)]
    method: EnteringMethod,
    /// Don't switch to Bland's rule on degenerate pivots; the algorithm might cycle
    #[arg(long)]
    no_bland: bool,
    /// Don't print the dictionaries, only the result
    #[arg(long)]
    no_display: bool,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    Builder::new().filter_level(opts.verbose.log_level_filter()).init();

    let problem = import(&opts.problem_file)
        .with_context(|| format!("Reading problem file {:?}", opts.problem_file))?;

    let mut driver = TwoPhase::new(Configuration { method: opts.method, bland: !opts.no_bland });
    if !opts.no_display {
        driver.register(WriterObserver::new(io::stdout()));
    }

    let outcome = driver.solve(problem.initial_dictionary())
        .context("Solving the problem")?;

    match outcome.result {
        OptimizationResult::FiniteOptimum(solution) => {
            println!("Optimal solution found.");
            println!("Objective value: {}", solution.objective_value());
            for variable in 1..=problem.nr_variables() {
                println!("x{} = {}", variable, solution.value(variable));
            }
        },
        OptimizationResult::Infeasible => println!("Problem is not feasible."),
        OptimizationResult::Unbounded => println!("Problem is unbounded."),
    }
    println!("{}", driver.statistics());

    Ok(())
}
