//! The planner seam: requests, planner identities and the `Planner` trait.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{InterestSet, Itinerary, Site};

/// Which algorithm produced an itinerary.
///
/// # Examples
/// ```
/// use yatra_core::PlannerKind;
///
/// let kind: PlannerKind = "exhaustive".parse()?;
/// assert_eq!(kind, PlannerKind::Exhaustive);
/// assert_eq!(kind.label(), "Brute Force");
/// assert_eq!(PlannerKind::Greedy.to_string(), "greedy");
/// # Ok::<(), yatra_core::ParsePlannerKindError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PlannerKind {
    /// Rank-and-fill heuristic with route repair.
    #[default]
    Greedy,
    /// Bounded exhaustive search.
    Exhaustive,
}

impl PlannerKind {
    /// Machine name, as accepted by [`FromStr`].
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Exhaustive => "exhaustive",
        }
    }

    /// Human-readable label for reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Greedy => "Greedy Heuristic",
            Self::Exhaustive => "Brute Force",
        }
    }
}

impl fmt::Display for PlannerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a planner name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown planner '{value}', expected one of: greedy, exhaustive")]
pub struct ParsePlannerKindError {
    /// The rejected input.
    pub value: String,
}

impl FromStr for PlannerKind {
    type Err = ParsePlannerKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "greedy" => Ok(Self::Greedy),
            "exhaustive" | "brute-force" => Ok(Self::Exhaustive),
            _ => Err(ParsePlannerKindError {
                value: s.to_owned(),
            }),
        }
    }
}

/// Parameters for a planning request.
///
/// # Examples
/// ```
/// use yatra_core::{InterestSet, PlanRequest};
///
/// let request = PlanRequest {
///     budget: 1000,
///     time_budget_hours: 8.0,
///     interests: ["culture", "heritage"].into_iter().collect::<InterestSet>(),
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// Spending limit in currency units.
    pub budget: u32,
    /// Hours available for visits and travel.
    pub time_budget_hours: f64,
    /// Categories the visitor wants to see.
    pub interests: InterestSet,
}

/// Errors returned by [`PlanRequest::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PlanRequestValidationError {
    /// The time budget was NaN or infinite.
    #[error("time budget must be a finite number of hours")]
    NonFiniteTimeBudget,
    /// The time budget was below zero.
    #[error("time budget must not be negative (got {hours})")]
    NegativeTimeBudget {
        /// The rejected value.
        hours: f64,
    },
}

impl PlanRequest {
    /// Construct a request.
    pub const fn new(budget: u32, time_budget_hours: f64, interests: InterestSet) -> Self {
        Self {
            budget,
            time_budget_hours,
            interests,
        }
    }

    /// Validate the request before handing it to a planner.
    ///
    /// # Errors
    /// Returns [`PlanRequestValidationError`] when the time budget is not a
    /// finite, non-negative number of hours.
    pub fn validate(&self) -> Result<(), PlanRequestValidationError> {
        if !self.time_budget_hours.is_finite() {
            return Err(PlanRequestValidationError::NonFiniteTimeBudget);
        }
        if self.time_budget_hours < 0.0 {
            return Err(PlanRequestValidationError::NegativeTimeBudget {
                hours: self.time_budget_hours,
            });
        }
        Ok(())
    }
}

/// Build an itinerary from a catalog under a request's constraints.
///
/// Planners never fail: an empty [`Itinerary`] is the "no solution" value.
/// They assume a request that passed [`PlanRequest::validate`].
/// Planners must be `Send + Sync` so one instance can serve many threads.
pub trait Planner: Send + Sync {
    /// Identity reported on the returned itineraries.
    fn kind(&self) -> PlannerKind;

    /// Plan an itinerary that borrows its stops from `catalog`.
    fn plan<'a>(&self, catalog: &'a [Site], request: &PlanRequest) -> Itinerary<'a>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct FirstSitePlanner;

    impl Planner for FirstSitePlanner {
        fn kind(&self) -> PlannerKind {
            PlannerKind::Greedy
        }

        fn plan<'a>(&self, catalog: &'a [Site], request: &PlanRequest) -> Itinerary<'a> {
            match catalog.first() {
                Some(site) if site.entry_fee <= request.budget => {
                    Itinerary::new(self.kind(), vec![site])
                }
                _ => Itinerary::empty(self.kind()),
            }
        }
    }

    #[rstest]
    #[case(500, 1)]
    #[case(50, 0)]
    fn planner_trait_objects_borrow_the_catalog(#[case] budget: u32, #[case] stops: usize) {
        let catalog = vec![Site::with_empty_tags("a", 0.0, 0.0, 100)];
        let planner: Box<dyn Planner> = Box::new(FirstSitePlanner);
        let request = PlanRequest::new(budget, 8.0, InterestSet::new());
        assert_eq!(planner.plan(&catalog, &request).len(), stops);
    }

    #[rstest]
    #[case("greedy", PlannerKind::Greedy)]
    #[case(" Exhaustive ", PlannerKind::Exhaustive)]
    #[case("brute-force", PlannerKind::Exhaustive)]
    fn parses_planner_names(#[case] input: &str, #[case] expected: PlannerKind) {
        assert_eq!(input.parse::<PlannerKind>(), Ok(expected));
    }

    #[rstest]
    fn rejects_unknown_planner() {
        let err = "genetic".parse::<PlannerKind>().expect_err("unknown name");
        assert_eq!(err.value, "genetic");
    }

    #[rstest]
    #[case(f64::NAN, PlanRequestValidationError::NonFiniteTimeBudget)]
    #[case(f64::INFINITY, PlanRequestValidationError::NonFiniteTimeBudget)]
    #[case(-1.0, PlanRequestValidationError::NegativeTimeBudget { hours: -1.0 })]
    fn validate_rejects_bad_time_budgets(
        #[case] hours: f64,
        #[case] expected: PlanRequestValidationError,
    ) {
        let request = PlanRequest::new(100, hours, InterestSet::new());
        assert_eq!(request.validate(), Err(expected));
    }

    #[rstest]
    #[case(0.0)]
    #[case(8.0)]
    fn validate_accepts_non_negative_budgets(#[case] hours: f64) {
        let request = PlanRequest::new(100, hours, InterestSet::new());
        assert!(request.validate().is_ok());
    }
}
