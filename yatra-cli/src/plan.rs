//! Plan command implementation for the Yatra CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use yatra_core::{InterestSet, PlanRequest, PlannerKind};

use crate::catalog::load_catalog;
use crate::render::{OutputFormat, write_plan};
use crate::{
    ARG_BUDGET, ARG_CATALOG, ARG_FORMAT, ARG_INTERESTS, ARG_PLANNER, ARG_TIME_BUDGET, CliError,
    planner_for,
};

pub(crate) const DEFAULT_BUDGET: u32 = 1000;
pub(crate) const DEFAULT_TIME_BUDGET_HOURS: f64 = 8.0;
pub(crate) const DEFAULT_INTERESTS: &str = "culture,heritage";

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a sightseeing itinerary that fits both a spending \
                 budget and a time budget. Values can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Plan an itinerary"
)]
#[ortho_config(prefix = "YATRA")]
pub(crate) struct PlanArgs {
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
    /// Planner to run: greedy or exhaustive (default greedy).
    #[arg(long = ARG_PLANNER, value_name = "name")]
    #[serde(default)]
    pub(crate) planner: Option<PlannerKind>,
    /// Output format (default text).
    #[arg(long = ARG_FORMAT, value_enum, value_name = "format")]
    #[serde(default)]
    pub(crate) format: Option<OutputFormat>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PlanConfig {
    /// Catalog file, or `None` for the built-in catalog.
    pub(crate) catalog: Option<Utf8PathBuf>,
    /// Validated request.
    pub(crate) request: PlanRequest,
    pub(crate) planner: PlannerKind,
    pub(crate) format: OutputFormat,
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request = resolve_request(args.budget, args.time_budget, args.interests.as_deref())?;
        Ok(Self {
            catalog: args.catalog,
            request,
            planner: args.planner.unwrap_or_default(),
            format: args.format.unwrap_or_default(),
        })
    }
}

/// Apply request defaults and validate the result.
pub(crate) fn resolve_request(
    budget: Option<u32>,
    time_budget: Option<f64>,
    interests: Option<&str>,
) -> Result<PlanRequest, CliError> {
    let interests = parse_interests(interests.unwrap_or(DEFAULT_INTERESTS))?;
    let request = PlanRequest::new(
        budget.unwrap_or(DEFAULT_BUDGET),
        time_budget.unwrap_or(DEFAULT_TIME_BUDGET_HOURS),
        interests,
    );
    request
        .validate()
        .map_err(|source| CliError::InvalidRequest { source })?;
    Ok(request)
}

fn parse_interests(raw: &str) -> Result<InterestSet, CliError> {
    InterestSet::parse(raw.split(',')).map_err(|source| CliError::InvalidInterests {
        field: ARG_INTERESTS,
        source,
    })
}

pub(crate) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let catalog = load_catalog(config.catalog.as_deref())?;
    let planner = planner_for(config.planner);
    log::debug!(
        "planning with {} for budget {} over {}h (interests: {})",
        planner.kind(),
        config.request.budget,
        config.request.time_budget_hours,
        config.request.interests
    );
    let itinerary = planner.plan(&catalog, &config.request);
    write_plan(writer, config.format, &itinerary, &config.request.interests)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
