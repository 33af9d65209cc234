//! Proptest strategies and invariant checks for planner property tests.
//!
//! Catalogs are clustered around the Kathmandu valley so travel legs stay in
//! the same range as real data, and names are unique by construction.

use std::collections::HashSet;

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use super::INTEREST_POOL;
use crate::{InterestSet, Itinerary, Site, Tags};

fn tag_subset() -> impl Strategy<Value = Vec<String>> {
    proptest::sample::subsequence(INTEREST_POOL.to_vec(), 0..=3)
        .prop_map(|tags| tags.into_iter().map(str::to_owned).collect())
}

/// Strategy for a single site with a placeholder name.
fn site_strategy() -> impl Strategy<Value = Site> {
    (27.60_f64..27.80_f64, 85.20_f64..85.45_f64, 0_u32..=800, tag_subset()).prop_map(
        |(latitude, longitude, fee, tags)| {
            Site::new("", latitude, longitude, fee, tags.into_iter().collect::<Tags>())
        },
    )
}

/// Strategy for a catalog of `min_count..=max_count` uniquely named sites.
pub fn catalog_strategy(min_count: usize, max_count: usize) -> impl Strategy<Value = Vec<Site>> {
    proptest::collection::vec(site_strategy(), min_count..=max_count).prop_map(|sites| {
        sites
            .into_iter()
            .enumerate()
            .map(|(index, mut site)| {
                site.name = format!("site-{index}");
                site
            })
            .collect()
    })
}

/// Strategy for a non-empty interest set.
pub fn interests_strategy() -> impl Strategy<Value = InterestSet> {
    proptest::sample::subsequence(INTEREST_POOL.to_vec(), 1..=3)
        .prop_map(|names| names.into_iter().collect())
}

/// Check the budget invariants every planner result must satisfy.
///
/// # Errors
///
/// Returns an error if the cost disagrees with the stops, either budget is
/// exceeded, or a stop repeats.
pub fn assert_within_budgets(
    itinerary: &Itinerary<'_>,
    budget: u32,
    time_budget_hours: f64,
) -> Result<(), TestCaseError> {
    let fees: u64 = itinerary
        .sites()
        .iter()
        .map(|site| u64::from(site.entry_fee))
        .sum();
    prop_assert_eq!(itinerary.total_cost(), fees);
    prop_assert!(itinerary.total_cost() <= u64::from(budget));
    prop_assert!(
        itinerary.is_empty() || itinerary.total_time() <= time_budget_hours,
        "itinerary takes {}h of {}h",
        itinerary.total_time(),
        time_budget_hours
    );
    let unique: HashSet<&str> = itinerary
        .sites()
        .iter()
        .map(|site| site.name.as_str())
        .collect();
    prop_assert_eq!(unique.len(), itinerary.len(), "stops repeat");
    Ok(())
}
