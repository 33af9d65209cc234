//! Facade crate for the Yatra itinerary planner.
//!
//! This crate re-exports the core domain types and exposes the greedy and
//! exhaustive planners behind feature flags.

#![forbid(unsafe_code)]

pub use yatra_core::{
    Catalog, CatalogError, InterestSet, InterestSetError, Itinerary, ItineraryComparison, Leg,
    OpeningHours, ParsePlannerKindError, PlanRequest, PlanRequestValidationError, Planner,
    PlannerKind, Site, Tags, Verdict,
};

#[cfg(feature = "planner-greedy")]
pub use yatra_planner_greedy::{GreedyPlanner, greedy_plan};

#[cfg(feature = "planner-exhaustive")]
pub use yatra_planner_exhaustive::{
    ExhaustivePlanner, ExhaustivePlannerConfig, MAX_EXHAUSTIVE_SITES, exhaustive_plan,
};
