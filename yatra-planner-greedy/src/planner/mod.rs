//! `GreedyPlanner` implementation: rank, fill, then repair the route.

use std::cmp::Ordering;

use yatra_core::routing::order_nearest_neighbour;
use yatra_core::scoring::{FIRST_LEG_ESTIMATE_HOURS, VISIT_DURATION_HOURS, site_score, travel_time};
use yatra_core::{InterestSet, Itinerary, PlanRequest, Planner, PlannerKind, Site};

/// Rank-and-fill planner with nearest-neighbour route repair.
///
/// # Examples
/// ```
/// use yatra_core::{InterestSet, PlanRequest, Planner, Site, Tags};
/// use yatra_planner_greedy::GreedyPlanner;
///
/// let catalog = vec![
///     Site::new("Temple", 27.71, 85.34, 100, Tags::from(["culture".to_owned()])),
///     Site::new("Hills", 27.66, 85.24, 700, Tags::from(["nature".to_owned()])),
/// ];
/// let request = PlanRequest::new(500, 8.0, ["culture"].into_iter().collect::<InterestSet>());
///
/// let itinerary = GreedyPlanner::new().plan(&catalog, &request);
/// assert_eq!(itinerary.site_names(), vec!["Temple"]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPlanner;

impl GreedyPlanner {
    /// Construct a greedy planner.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Planner for GreedyPlanner {
    fn kind(&self) -> PlannerKind {
        PlannerKind::Greedy
    }

    fn plan<'a>(&self, catalog: &'a [Site], request: &PlanRequest) -> Itinerary<'a> {
        greedy_plan(
            catalog,
            request.budget,
            request.time_budget_hours,
            &request.interests,
        )
    }
}

/// Plan an itinerary greedily.
///
/// Returns an empty itinerary when nothing fits, when the catalog is empty,
/// or when no interest was requested.
///
/// # Examples
/// ```
/// use yatra_core::{InterestSet, Site};
/// use yatra_planner_greedy::greedy_plan;
///
/// let catalog = vec![Site::with_empty_tags("Ring Road", 27.7, 85.3, 0)];
/// let itinerary = greedy_plan(&catalog, 1000, 8.0, &InterestSet::new());
/// assert!(itinerary.is_empty());
/// ```
#[must_use]
pub fn greedy_plan<'a>(
    catalog: &'a [Site],
    budget: u32,
    time_budget_hours: f64,
    interests: &InterestSet,
) -> Itinerary<'a> {
    if interests.is_empty() {
        log::debug!("no interests requested; returning an empty greedy itinerary");
        return Itinerary::empty(PlannerKind::Greedy);
    }

    let ranked = rank_sites(catalog, interests);
    let mut selection = select_within_budgets(&ranked, budget, time_budget_hours);
    log::debug!(
        "greedy selected {} of {} sites before route repair",
        selection.len(),
        catalog.len()
    );

    while !selection.is_empty() {
        let itinerary = Itinerary::new(PlannerKind::Greedy, order_nearest_neighbour(&selection));
        if itinerary.total_time() <= time_budget_hours {
            return itinerary;
        }
        if let Some(dropped) = selection.pop() {
            log::debug!(
                "routed itinerary takes {:.3}h of {time_budget_hours}h; dropping '{}'",
                itinerary.total_time(),
                dropped.name
            );
        }
    }
    Itinerary::empty(PlannerKind::Greedy)
}

/// Sites sorted by descending [`site_score`]; ties keep catalog order.
pub(crate) fn rank_sites<'a>(catalog: &'a [Site], interests: &InterestSet) -> Vec<&'a Site> {
    let mut scored: Vec<(&Site, f64)> = catalog
        .iter()
        .map(|site| (site, site_score(site, interests)))
        .collect();
    // `sort_by` is stable, which is what keeps catalog order on ties.
    scored.sort_by(|(_, lhs), (_, rhs)| rhs.partial_cmp(lhs).unwrap_or(Ordering::Equal));
    scored.into_iter().map(|(site, _)| site).collect()
}

/// Walk `ranked` once, accepting every site that fits the remaining pools.
///
/// Time is estimated incrementally from the last accepted site, which can
/// differ from the routed order the repair loop later evaluates.
#[expect(
    clippy::float_arithmetic,
    reason = "incremental time estimates are floating-point hours"
)]
pub(crate) fn select_within_budgets<'a>(
    ranked: &[&'a Site],
    budget: u32,
    time_budget_hours: f64,
) -> Vec<&'a Site> {
    let mut remaining_budget = budget;
    let mut remaining_time = time_budget_hours;
    let mut selection: Vec<&Site> = Vec::new();
    for &site in ranked {
        let travel = selection
            .last()
            .map_or(FIRST_LEG_ESTIMATE_HOURS, |previous| travel_time(previous, site));
        let needed = VISIT_DURATION_HOURS + travel;
        if site.entry_fee <= remaining_budget && needed <= remaining_time {
            log::trace!(
                "accepted '{}' (fee {}, {needed:.3}h)",
                site.name,
                site.entry_fee
            );
            remaining_budget -= site.entry_fee;
            remaining_time -= needed;
            selection.push(site);
        } else {
            log::trace!(
                "skipped '{}' (fee {} of {remaining_budget} left, {needed:.3}h of {remaining_time:.3}h left)",
                site.name,
                site.entry_fee
            );
        }
    }
    selection
}
