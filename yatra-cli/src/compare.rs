//! Compare command: run both planners on one request.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use yatra_core::{ItineraryComparison, PlanRequest, Planner};
use yatra_planner_exhaustive::ExhaustivePlanner;
use yatra_planner_greedy::GreedyPlanner;

use crate::catalog::load_catalog;
use crate::plan::resolve_request;
use crate::render::{OutputFormat, write_comparison};
use crate::{ARG_BUDGET, ARG_CATALOG, ARG_FORMAT, ARG_INTERESTS, ARG_TIME_BUDGET, CliError};

/// CLI arguments for the `compare` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan the same request with the greedy and the exhaustive \
                 planner, then report both itineraries and how they differ \
                 in stops, cost, time and score.",
    about = "Compare the greedy and exhaustive planners"
)]
#[ortho_config(prefix = "YATRA")]
pub(crate) struct CompareArgs {
    /// Path to a JSON catalog file. Defaults to the built-in catalog.
    #[arg(long = ARG_CATALOG, value_name = "path")]
    #[serde(default)]
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Spending limit in currency units (default 1000).
    #[arg(long = ARG_BUDGET, value_name = "amount")]
    #[serde(default)]
    pub(crate) budget: Option<u32>,
    /// Hours available for visits and travel (default 8).
    #[arg(long = ARG_TIME_BUDGET, value_name = "hours")]
    #[serde(default)]
    pub(crate) time_budget: Option<f64>,
    /// Comma-separated interest tags (default "culture,heritage").
    #[arg(long = ARG_INTERESTS, value_name = "tags")]
    #[serde(default)]
    pub(crate) interests: Option<String>,
    /// Output format (default text).
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl CompareArgs {
    fn into_config(self) -> Result<CompareConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        CompareConfig::try_from(merged)
    }
}

/// Resolved `compare` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CompareConfig {
    pub(crate) catalog: Option<Utf8PathBuf>,
    pub(crate) request: PlanRequest,
    pub(crate) format: OutputFormat,
}

impl TryFrom<CompareArgs> for CompareConfig {
    type Error = CliError;

    fn try_from(args: CompareArgs) -> Result<Self, Self::Error> {
        let request = resolve_request(args.budget, args.time_budget, args.interests.as_deref())?;
        Ok(Self {
            catalog: args.catalog,
            request,
            format: args.format.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_compare_with(args: CompareArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let catalog = load_catalog(config.catalog.as_deref())?;
    let request = &config.request;

    let greedy = GreedyPlanner::new().plan(&catalog, request);
    let exhaustive = ExhaustivePlanner::new().plan(&catalog, request);
    let comparison = ItineraryComparison::between(&greedy, &exhaustive, &request.interests);
    log::debug!("comparison verdict: {}", comparison.verdict.describe());

    write_comparison(
        writer,
        config.format,
        &greedy,
        &exhaustive,
        &comparison,
        &request.interests,
    )
}
