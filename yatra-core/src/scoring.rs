//! Scoring and time arithmetic shared by every planner.
//!
//! Distances are planar: latitude and longitude are treated as Cartesian
//! coordinates and the result is expressed in coordinate-degrees. Travel
//! time is a fixed multiple of that distance.

use crate::{InterestSet, Site};

/// Points awarded per tag shared between a site and the interests.
pub const INTEREST_WEIGHT: u32 = 10;

/// Hours spent at every visited site.
pub const VISIT_DURATION_HOURS: f64 = 2.0;

/// Hours of travel per coordinate-degree of distance.
pub const TRAVEL_HOURS_PER_DEGREE: f64 = 20.0;

/// Entry fee units that cost one point of score.
pub const COST_PENALTY_DIVISOR: f64 = 100.0;

/// Travel estimate charged to the first site a greedy walk accepts.
pub const FIRST_LEG_ESTIMATE_HOURS: f64 = 0.5;

/// Planar Euclidean distance between two sites in coordinate-degrees.
///
/// # Examples
/// ```
/// use yatra_core::{Site, scoring::distance};
///
/// let a = Site::with_empty_tags("a", 0.0, 0.0, 0);
/// let b = Site::with_empty_tags("b", 3.0, 4.0, 0);
/// assert_eq!(distance(&a, &b), 5.0);
/// ```
pub fn distance(a: &Site, b: &Site) -> f64 {
    let dlat = a.latitude() - b.latitude();
    let dlon = a.longitude() - b.longitude();
    (dlat * dlat + dlon * dlon).sqrt()
}

/// Hours needed to travel between two sites.
pub fn travel_time(a: &Site, b: &Site) -> f64 {
    distance(a, b) * TRAVEL_HOURS_PER_DEGREE
}

/// Shared tag count multiplied by [`INTEREST_WEIGHT`].
///
/// # Examples
/// ```
/// use yatra_core::{InterestSet, Site, Tags, scoring::interest_score};
///
/// let site = Site::new(
///     "Swayambhunath Stupa",
///     27.7149,
///     85.2906,
///     200,
///     Tags::from(["culture".to_owned(), "heritage".to_owned()]),
/// );
/// let interests: InterestSet = ["culture", "heritage", "nature"].into_iter().collect();
/// assert_eq!(interest_score(&site, &interests), 20);
/// assert_eq!(interest_score(&site, &InterestSet::new()), 0);
/// ```
pub fn interest_score(site: &Site, interests: &InterestSet) -> u32 {
    let overlap = u32::try_from(interests.overlap(&site.tags)).unwrap_or(u32::MAX);
    overlap.saturating_mul(INTEREST_WEIGHT)
}

/// Score deducted for an entry fee or a summed cost.
///
/// Exact for costs below 2^53.
pub fn cost_penalty(cost: u64) -> f64 {
    cost as f64 / COST_PENALTY_DIVISOR
}

/// Ranking score for a single site: interest points less the fee penalty.
///
/// May be negative for expensive sites that match nothing.
pub fn site_score(site: &Site, interests: &InterestSet) -> f64 {
    f64::from(interest_score(site, interests)) - cost_penalty(u64::from(site.entry_fee))
}

/// Total hours for visiting `sites` in the given order.
///
/// Every site costs [`VISIT_DURATION_HOURS`], and each consecutive pair adds
/// its [`travel_time`]. An empty route takes no time.
///
/// # Examples
/// ```
/// use yatra_core::{Site, scoring::route_time};
///
/// let a = Site::with_empty_tags("a", 0.0, 0.0, 0);
/// let b = Site::with_empty_tags("b", 0.0, 0.1, 0);
/// let hours = route_time(&[&a, &b]);
/// assert!((hours - 6.0).abs() < 1e-9);
/// assert_eq!(route_time(&[]), 0.0);
/// ```
pub fn route_time(sites: &[&Site]) -> f64 {
    let visits = sites.len() as f64 * VISIT_DURATION_HOURS;
    sites
        .windows(2)
        .fold(visits, |total, pair| match pair {
            [from, to] => total + travel_time(from, to),
            _ => total,
        })
}

/// Sum of entry fees.
pub fn total_cost(sites: &[&Site]) -> u64 {
    sites.iter().map(|site| u64::from(site.entry_fee)).sum()
}

/// Score of a whole selection: summed interest points less the penalty on
/// the summed cost.
///
/// Both planners and the comparison report rank selections with this value.
pub fn selection_score(sites: &[&Site], interests: &InterestSet) -> f64 {
    let interest: u64 = sites
        .iter()
        .map(|site| u64::from(interest_score(site, interests)))
        .sum();
    interest as f64 - cost_penalty(total_cost(sites))
}
