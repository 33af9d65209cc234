//! Side-by-side comparison of a greedy and an exhaustive itinerary.

use crate::{InterestSet, Itinerary};

/// Which itinerary covers more ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum Verdict {
    /// The greedy itinerary visits at least as many sites.
    GreedyMatchesOrBeats,
    /// The exhaustive itinerary visits more sites.
    ExhaustiveVisitsMore,
}

impl Verdict {
    /// One-line summary for reports.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::GreedyMatchesOrBeats => "greedy found equal or more spots",
            Self::ExhaustiveVisitsMore => "brute force found more spots",
        }
    }
}

/// Differences between two itineraries planned for the same request.
///
/// # Examples
/// ```
/// use yatra_core::{InterestSet, Itinerary, ItineraryComparison, PlannerKind, Site, Verdict};
///
/// let a = Site::with_empty_tags("a", 0.0, 0.0, 100);
/// let greedy = Itinerary::new(PlannerKind::Greedy, vec![&a]);
/// let exhaustive = Itinerary::empty(PlannerKind::Exhaustive);
///
/// let report = ItineraryComparison::between(&greedy, &exhaustive, &InterestSet::new());
/// assert_eq!(report.site_count_difference, 1);
/// assert_eq!(report.cost_difference, 100);
/// assert_eq!(report.verdict, Verdict::GreedyMatchesOrBeats);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ItineraryComparison {
    /// Greedy stop count less exhaustive stop count.
    pub site_count_difference: i64,
    /// Absolute difference in total cost.
    pub cost_difference: u64,
    /// Absolute difference in total hours.
    pub time_difference: f64,
    /// Score of the greedy itinerary.
    pub greedy_score: f64,
    /// Score of the exhaustive itinerary.
    pub exhaustive_score: f64,
    /// Exhaustive score less greedy score.
    pub score_gap: f64,
    /// Which itinerary visits more sites.
    pub verdict: Verdict,
}

impl ItineraryComparison {
    /// Compare two itineraries scored against the same interests.
    pub fn between(
        greedy: &Itinerary<'_>,
        exhaustive: &Itinerary<'_>,
        interests: &InterestSet,
    ) -> Self {
        let greedy_len = i64::try_from(greedy.len()).unwrap_or(i64::MAX);
        let exhaustive_len = i64::try_from(exhaustive.len()).unwrap_or(i64::MAX);
        let greedy_score = greedy.score(interests);
        let exhaustive_score = exhaustive.score(interests);
        let verdict = if greedy.len() >= exhaustive.len() {
            Verdict::GreedyMatchesOrBeats
        } else {
            Verdict::ExhaustiveVisitsMore
        };
        Self {
            site_count_difference: greedy_len - exhaustive_len,
            cost_difference: greedy.total_cost().abs_diff(exhaustive.total_cost()),
            time_difference: (greedy.total_time() - exhaustive.total_time()).abs(),
            greedy_score,
            exhaustive_score,
            score_gap: exhaustive_score - greedy_score,
            verdict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PlannerKind, Site, Tags};
    use rstest::rstest;

    #[rstest]
    fn exhaustive_visiting_more_is_reported() {
        let a = Site::new("a", 0.0, 0.0, 100, Tags::from(["culture".to_owned()]));
        let b = Site::new("b", 0.0, 0.1, 300, Tags::from(["culture".to_owned()]));
        let interests: InterestSet = ["culture"].into_iter().collect();
        let greedy = Itinerary::new(PlannerKind::Greedy, vec![&a]);
        let exhaustive = Itinerary::new(PlannerKind::Exhaustive, vec![&a, &b]);

        let report = ItineraryComparison::between(&greedy, &exhaustive, &interests);

        assert_eq!(report.site_count_difference, -1);
        assert_eq!(report.cost_difference, 300);
        assert!((report.time_difference - 4.0).abs() < 1e-9);
        assert!((report.greedy_score - 9.0).abs() < 1e-9);
        assert!((report.exhaustive_score - 16.0).abs() < 1e-9);
        assert!((report.score_gap - 7.0).abs() < 1e-9);
        assert_eq!(report.verdict, Verdict::ExhaustiveVisitsMore);
        assert_eq!(report.verdict.describe(), "brute force found more spots");
    }

    #[rstest]
    fn equal_counts_favour_greedy() {
        let greedy = Itinerary::empty(PlannerKind::Greedy);
        let exhaustive = Itinerary::empty(PlannerKind::Exhaustive);
        let report = ItineraryComparison::between(&greedy, &exhaustive, &InterestSet::new());
        assert_eq!(report.verdict, Verdict::GreedyMatchesOrBeats);
        assert_eq!(report.score_gap, 0.0);
    }
}
