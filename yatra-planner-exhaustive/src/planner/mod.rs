//! `ExhaustivePlanner` implementation: score every affordable subset of the
//! leading catalog sites along its fastest visiting order.

use yatra_core::scoring::{route_time, selection_score, total_cost};
use yatra_core::{InterestSet, Itinerary, PlanRequest, Planner, PlannerKind, Site};

use crate::enumerate::{Combinations, next_permutation};

/// Default number of leading catalog sites the search considers.
///
/// The search visits `Σ C(n, r)·r!` orders, which is 1,956 for six sites and
/// grows factorially beyond that.
pub const MAX_EXHAUSTIVE_SITES: usize = 6;

/// Configuration for [`ExhaustivePlanner`].
#[derive(Debug, Clone)]
pub struct ExhaustivePlannerConfig {
    /// How many leading catalog sites to search over.
    pub max_sites: usize,
}

impl Default for ExhaustivePlannerConfig {
    fn default() -> Self {
        Self {
            max_sites: MAX_EXHAUSTIVE_SITES,
        }
    }
}

/// Bounded exhaustive planner.
///
/// Only the first [`ExhaustivePlannerConfig::max_sites`] catalog sites are
/// considered. Within that window the result is optimal for the selection
/// score: interest points less the cost penalty.
///
/// # Examples
/// ```
/// use yatra_core::{InterestSet, PlanRequest, Planner, Site, Tags};
/// use yatra_planner_exhaustive::ExhaustivePlanner;
///
/// let culture = || Tags::from(["culture".to_owned()]);
/// let catalog = vec![
///     Site::new("Temple", 0.0, 0.0, 100, culture()),
///     Site::new("Stupa", 0.0, 0.05, 200, culture()),
///     Site::new("Palace", 0.0, 5.0, 50, culture()),
/// ];
/// let request = PlanRequest::new(300, 8.0, ["culture"].into_iter().collect::<InterestSet>());
///
/// let itinerary = ExhaustivePlanner::new().plan(&catalog, &request);
/// assert_eq!(itinerary.site_names(), vec!["Temple", "Stupa"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExhaustivePlanner {
    config: ExhaustivePlannerConfig,
}

impl ExhaustivePlanner {
    /// Construct a planner using default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ExhaustivePlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    #[must_use]
    pub const fn with_config(config: ExhaustivePlannerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ExhaustivePlannerConfig {
        &self.config
    }
}

impl Planner for ExhaustivePlanner {
    fn kind(&self) -> PlannerKind {
        PlannerKind::Exhaustive
    }

    fn plan<'a>(&self, catalog: &'a [Site], request: &PlanRequest) -> Itinerary<'a> {
        search(
            catalog,
            request.budget,
            request.time_budget_hours,
            &request.interests,
            self.config.max_sites,
        )
    }
}

/// Plan an itinerary by exhaustive search over the first
/// [`MAX_EXHAUSTIVE_SITES`] catalog sites.
///
/// Returns an empty itinerary when no subset fits both budgets, when the
/// catalog is empty, or when no interest was requested.
///
/// # Examples
/// ```
/// use yatra_core::{InterestSet, Site};
/// use yatra_planner_exhaustive::exhaustive_plan;
///
/// let catalog = vec![Site::with_empty_tags("Ring Road", 27.7, 85.3, 0)];
/// assert!(exhaustive_plan(&catalog, 1000, 1.0, &InterestSet::new()).is_empty());
/// ```
#[must_use]
pub fn exhaustive_plan<'a>(
    catalog: &'a [Site],
    budget: u32,
    time_budget_hours: f64,
    interests: &InterestSet,
) -> Itinerary<'a> {
    search(
        catalog,
        budget,
        time_budget_hours,
        interests,
        MAX_EXHAUSTIVE_SITES,
    )
}

/// Best candidate found so far.
struct Best<'a> {
    score: f64,
    route: Vec<&'a Site>,
}

fn search<'a>(
    catalog: &'a [Site],
    budget: u32,
    time_budget_hours: f64,
    interests: &InterestSet,
    max_sites: usize,
) -> Itinerary<'a> {
    if interests.is_empty() {
        log::debug!("no interests requested; returning an empty exhaustive itinerary");
        return Itinerary::empty(PlannerKind::Exhaustive);
    }

    let candidates: Vec<&Site> = catalog.iter().take(max_sites).collect();
    if catalog.len() > candidates.len() {
        log::debug!(
            "exhaustive search limited to the first {} of {} sites",
            candidates.len(),
            catalog.len()
        );
    }

    let mut best: Option<Best<'a>> = None;
    let mut subsets_evaluated = 0_usize;
    let mut feasible = 0_usize;
    for size in 1..=candidates.len() {
        for indices in Combinations::new(candidates.len(), size) {
            let subset: Vec<&Site> = indices
                .iter()
                .filter_map(|&index| candidates.get(index).copied())
                .collect();
            subsets_evaluated += 1;
            if total_cost(&subset) > u64::from(budget) {
                continue;
            }
            let (route, hours) = fastest_route(&subset);
            if hours > time_budget_hours {
                log::trace!("subset of {size} needs {hours:.3}h; over the time budget");
                continue;
            }
            feasible += 1;
            let score = selection_score(&subset, interests);
            if best.as_ref().is_none_or(|current| score > current.score) {
                best = Some(Best { score, route });
            }
        }
    }

    log::debug!(
        "exhaustive search evaluated {subsets_evaluated} subsets, {feasible} feasible"
    );
    best.map_or_else(
        || Itinerary::empty(PlannerKind::Exhaustive),
        |found| Itinerary::new(PlannerKind::Exhaustive, found.route),
    )
}

/// The visiting order of `subset` with the least total time.
///
/// Orders are tried lexicographically by position in `subset`, and only a
/// strictly faster order replaces the current one.
pub(crate) fn fastest_route<'a>(subset: &[&'a Site]) -> (Vec<&'a Site>, f64) {
    let mut order: Vec<usize> = (0..subset.len()).collect();
    let mut best_route = subset.to_vec();
    let mut best_hours = route_time(subset);
    while next_permutation(&mut order) {
        let route: Vec<&Site> = order
            .iter()
            .filter_map(|&index| subset.get(index).copied())
            .collect();
        let hours = route_time(&route);
        if hours < best_hours {
            best_hours = hours;
            best_route = route;
        }
    }
    (best_route, best_hours)
}

#[cfg(test)]
mod tests;
