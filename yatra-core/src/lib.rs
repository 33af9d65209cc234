//! Core domain types for the Yatra sightseeing planner.
//!
//! Sites are loaded once into a [`Catalog`] and then only borrowed:
//! planners select and reorder `&Site` values into an [`Itinerary`] whose
//! totals are derived from its stops. Everything here is synchronous and
//! side-effect free apart from `log` output, so planner calls over a shared
//! catalog are safe from any thread.
//!
//! Infeasible requests are never errors. An empty itinerary is the "no
//! solution" value; typed errors are reserved for malformed input such as
//! duplicate site names or a non-finite time budget.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod compare;
pub mod interests;
pub mod itinerary;
pub mod planner;
pub mod routing;
pub mod scoring;
pub mod site;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use catalog::{Catalog, CatalogError};
pub use compare::{ItineraryComparison, Verdict};
pub use interests::{InterestSet, InterestSetError};
pub use itinerary::{Itinerary, Leg};
pub use planner::{
    ParsePlannerKindError, PlanRequest, PlanRequestValidationError, Planner, PlannerKind,
};
pub use site::{OpeningHours, Site, Tags};
