//! Text and JSON rendering of catalogs, itineraries and comparisons.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;
use yatra_core::{Catalog, InterestSet, Itinerary, ItineraryComparison, Leg, Site};

use crate::CliError;

/// How command output is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum OutputFormat {
    /// Human-readable report.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// JSON view of one planned itinerary.
#[derive(Debug, Serialize)]
struct PlanOutput<'r, 'a> {
    label: &'static str,
    #[serde(flatten)]
    itinerary: &'r Itinerary<'a>,
    route_distance: f64,
    score: f64,
}

impl<'r, 'a> PlanOutput<'r, 'a> {
    fn new(itinerary: &'r Itinerary<'a>, interests: &InterestSet) -> Self {
        Self {
            label: itinerary.kind().label(),
            itinerary,
            route_distance: itinerary.distance(),
            score: itinerary.score(interests),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompareOutput<'r, 'a> {
    greedy: PlanOutput<'r, 'a>,
    exhaustive: PlanOutput<'r, 'a>,
    comparison: &'r ItineraryComparison,
}

pub(crate) fn write_plan(
    writer: &mut dyn Write,
    format: OutputFormat,
    itinerary: &Itinerary<'_>,
    interests: &InterestSet,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(writer, &PlanOutput::new(itinerary, interests)),
        OutputFormat::Text => {
            write_plan_text(writer, itinerary, interests).map_err(CliError::WriteOutput)
        }
    }
}

pub(crate) fn write_comparison(
    writer: &mut dyn Write,
    format: OutputFormat,
    greedy: &Itinerary<'_>,
    exhaustive: &Itinerary<'_>,
    comparison: &ItineraryComparison,
    interests: &InterestSet,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(
            writer,
            &CompareOutput {
                greedy: PlanOutput::new(greedy, interests),
                exhaustive: PlanOutput::new(exhaustive, interests),
                comparison,
            },
        ),
        OutputFormat::Text => {
            write_comparison_text(writer, greedy, exhaustive, comparison, interests)
                .map_err(CliError::WriteOutput)
        }
    }
}

pub(crate) fn write_catalog(
    writer: &mut dyn Write,
    format: OutputFormat,
    catalog: &Catalog,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => write_json(writer, catalog),
        OutputFormat::Text => write_catalog_text(writer, catalog).map_err(CliError::WriteOutput),
    }
}

fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerializeOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

fn write_plan_text(
    writer: &mut dyn Write,
    itinerary: &Itinerary<'_>,
    interests: &InterestSet,
) -> std::io::Result<()> {
    writeln!(writer, "{} itinerary", itinerary.kind().label())?;
    if itinerary.is_empty() {
        writeln!(writer, "  No itinerary fits the budget and time limits.")?;
    }
    let arrivals = std::iter::once(None).chain(itinerary.legs().map(Some));
    for (position, (site, leg)) in itinerary.sites().iter().zip(arrivals).enumerate() {
        writeln!(writer, "  {}. {}", position + 1, site.name)?;
        if let Some(leg) = leg {
            write_leg(writer, &leg)?;
        }
        writeln!(writer, "     {}", describe_site(site))?;
    }
    writeln!(
        writer,
        "Summary: {} stops, total cost {}, total time {:.2} h, distance {:.4} deg, score {:.2}",
        itinerary.len(),
        itinerary.total_cost(),
        itinerary.total_time(),
        itinerary.distance(),
        itinerary.score(interests)
    )
}

fn write_leg(writer: &mut dyn Write, leg: &Leg<'_>) -> std::io::Result<()> {
    writeln!(
        writer,
        "     travel {:.4} deg ({:.2} h) from {}",
        leg.distance, leg.travel_hours, leg.from.name
    )
}

fn write_comparison_text(
    writer: &mut dyn Write,
    greedy: &Itinerary<'_>,
    exhaustive: &Itinerary<'_>,
    comparison: &ItineraryComparison,
    interests: &InterestSet,
) -> std::io::Result<()> {
    write_plan_text(writer, greedy, interests)?;
    writeln!(writer)?;
    write_plan_text(writer, exhaustive, interests)?;
    writeln!(writer)?;
    writeln!(writer, "Comparison")?;
    let count = comparison.site_count_difference;
    writeln!(writer, "  site count difference: {count}")?;
    writeln!(writer, "  cost difference: {}", comparison.cost_difference)?;
    writeln!(writer, "  time difference: {:.2} h", comparison.time_difference)?;
    writeln!(writer, "  score gap: {:.2}", comparison.score_gap)?;
    writeln!(writer, "  verdict: {}", comparison.verdict.describe())
}

fn write_catalog_text(writer: &mut dyn Write, catalog: &Catalog) -> std::io::Result<()> {
    writeln!(writer, "{} sites", catalog.len())?;
    for site in catalog.iter() {
        writeln!(writer, "  {}", site.name)?;
        writeln!(writer, "     {}", describe_site(site))?;
    }
    Ok(())
}

fn describe_site(site: &Site) -> String {
    let tags = site
        .tags
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "fee {} | open {}-{} | tags {} | at {:.4}, {:.4}",
        site.entry_fee,
        site.hours.open,
        site.hours.close,
        if tags.is_empty() { "none" } else { tags.as_str() },
        site.latitude(),
        site.longitude()
    )
}
