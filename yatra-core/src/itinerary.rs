//! Itineraries: ordered visits with derived totals.

use crate::routing::route_distance;
use crate::scoring::{distance, route_time, selection_score, total_cost, travel_time};
use crate::{InterestSet, PlannerKind, Site};

/// An ordered visiting sequence drawn from one catalog.
///
/// Totals are computed once from the sequence at construction and cannot
/// drift from it; the sequence itself is never mutated afterwards.
///
/// # Examples
/// ```
/// use yatra_core::{Itinerary, PlannerKind, Site};
///
/// let a = Site::with_empty_tags("a", 0.0, 0.0, 100);
/// let b = Site::with_empty_tags("b", 0.0, 0.1, 50);
/// let itinerary = Itinerary::new(PlannerKind::Greedy, vec![&a, &b]);
///
/// assert_eq!(itinerary.len(), 2);
/// assert_eq!(itinerary.total_cost(), 150);
/// assert!((itinerary.total_time() - 6.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Itinerary<'a> {
    #[cfg_attr(feature = "serde", serde(rename = "planner"))]
    kind: PlannerKind,
    sites: Vec<&'a Site>,
    total_cost: u64,
    total_time: f64,
}

/// One travel leg between consecutive stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg<'a> {
    /// Stop the leg departs from.
    pub from: &'a Site,
    /// Stop the leg arrives at.
    pub to: &'a Site,
    /// Planar distance in coordinate-degrees.
    pub distance: f64,
    /// Travel hours for the leg.
    pub travel_hours: f64,
}

impl<'a> Itinerary<'a> {
    /// Build an itinerary visiting `sites` in order.
    pub fn new(kind: PlannerKind, sites: Vec<&'a Site>) -> Self {
        let total_cost = total_cost(&sites);
        let total_time = route_time(&sites);
        Self {
            kind,
            sites,
            total_cost,
            total_time,
        }
    }

    /// The "no solution" itinerary.
    ///
    /// # Examples
    /// ```
    /// use yatra_core::{Itinerary, PlannerKind};
    ///
    /// let itinerary = Itinerary::empty(PlannerKind::Exhaustive);
    /// assert!(itinerary.is_empty());
    /// assert_eq!(itinerary.total_time(), 0.0);
    /// assert_eq!(itinerary.kind().label(), "Brute Force");
    /// ```
    pub fn empty(kind: PlannerKind) -> Self {
        Self::new(kind, Vec::new())
    }

    /// Planner that produced this itinerary.
    pub const fn kind(&self) -> PlannerKind {
        self.kind
    }

    /// Stops in visiting order.
    pub fn sites(&self) -> &[&'a Site] {
        &self.sites
    }

    /// Names of the stops in visiting order.
    pub fn site_names(&self) -> Vec<&'a str> {
        self.sites.iter().map(|site| site.name.as_str()).collect()
    }

    /// Sum of entry fees.
    pub const fn total_cost(&self) -> u64 {
        self.total_cost
    }

    /// Visit and travel hours.
    pub const fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Summed leg distance in coordinate-degrees.
    pub fn distance(&self) -> f64 {
        route_distance(&self.sites)
    }

    /// Interest points less the cost penalty, as the planners rank it.
    pub fn score(&self, interests: &InterestSet) -> f64 {
        selection_score(&self.sites, interests)
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.sites.len()
    }

    /// Whether the itinerary has no stops.
    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    /// Travel legs between consecutive stops.
    pub fn legs(&self) -> impl Iterator<Item = Leg<'a>> + '_ {
        self.sites.windows(2).filter_map(|pair| match *pair {
            [from, to] => Some(Leg {
                from,
                to,
                distance: distance(from, to),
                travel_hours: travel_time(from, to),
            }),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn totals_follow_sequence() {
        let a = Site::with_empty_tags("a", 0.0, 0.0, 100);
        let b = Site::with_empty_tags("b", 0.3, 0.4, 200);
        let itinerary = Itinerary::new(PlannerKind::Exhaustive, vec![&b, &a]);
        assert_eq!(itinerary.site_names(), vec!["b", "a"]);
        assert_eq!(itinerary.total_cost(), 300);
        assert!((itinerary.total_time() - 14.0).abs() < 1e-9);
    }

    #[rstest]
    fn legs_pair_consecutive_stops() {
        let a = Site::with_empty_tags("a", 0.0, 0.0, 0);
        let b = Site::with_empty_tags("b", 0.0, 0.1, 0);
        let c = Site::with_empty_tags("c", 0.1, 0.1, 0);
        let itinerary = Itinerary::new(PlannerKind::Greedy, vec![&a, &b, &c]);
        let legs: Vec<_> = itinerary.legs().collect();
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].from.name, "a");
        assert_eq!(legs[1].to.name, "c");
        assert!((legs[1].travel_hours - 2.0).abs() < 1e-9);
        assert!((itinerary.distance() - 0.2).abs() < 1e-9);
    }

    #[rstest]
    fn single_stop_has_no_legs() {
        let a = Site::with_empty_tags("a", 0.0, 0.0, 0);
        let itinerary = Itinerary::new(PlannerKind::Greedy, vec![&a]);
        assert_eq!(itinerary.legs().count(), 0);
        assert_eq!(itinerary.distance(), 0.0);
        assert_eq!(itinerary.total_time(), 2.0);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn serialises_with_planner_name() {
        let a = Site::with_empty_tags("a", 1.0, 2.0, 10);
        let itinerary = Itinerary::new(PlannerKind::Greedy, vec![&a]);
        let value = serde_json::to_value(&itinerary).expect("itinerary should encode");
        assert_eq!(value["planner"], "greedy");
        assert_eq!(value["total_cost"], 10);
        assert_eq!(value["sites"][0]["name"], "a");
    }
}
