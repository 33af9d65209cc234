//! Command-line interface for the Yatra itinerary planner.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use yatra_core::{Planner, PlannerKind};
use yatra_planner_exhaustive::ExhaustivePlanner;
use yatra_planner_greedy::GreedyPlanner;

mod catalog;
mod compare;
mod error;
mod plan;
mod render;

pub use error::CliError;

use catalog::{CatalogArgs, run_catalog_with};
use compare::{CompareArgs, run_compare_with};
use plan::{PlanArgs, run_plan_with};

pub(crate) const ARG_CATALOG: &str = "catalog";
pub(crate) const ARG_BUDGET: &str = "budget";
pub(crate) const ARG_TIME_BUDGET: &str = "time-budget";
pub(crate) const ARG_INTERESTS: &str = "interests";
pub(crate) const ARG_PLANNER: &str = "planner";
pub(crate) const ARG_FORMAT: &str = "format";

/// Run the Yatra CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Plan(args) => run_plan_with(args, &mut stdout),
        Command::Compare(args) => run_compare_with(args, &mut stdout),
        Command::Catalog(args) => run_catalog_with(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "yatra",
    about = "Plan sightseeing itineraries under a budget and a time limit",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Plan one itinerary with the chosen planner.
    Plan(PlanArgs),
    /// Run both planners on the same request and report the differences.
    Compare(CompareArgs),
    /// List the sites in the catalog.
    Catalog(CatalogArgs),
}

/// Construct the planner registered for `kind`.
pub(crate) fn planner_for(kind: PlannerKind) -> Box<dyn Planner> {
    match kind {
        PlannerKind::Greedy => Box::new(GreedyPlanner::new()),
        PlannerKind::Exhaustive => Box::new(ExhaustivePlanner::new()),
    }
}

#[cfg(test)]
mod tests;
