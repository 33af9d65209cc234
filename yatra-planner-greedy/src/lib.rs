//! Greedy itinerary planner for Yatra.
//!
//! This crate provides [`GreedyPlanner`], the fast default implementation of
//! the [`Planner`](yatra_core::Planner) trait, and the free function
//! [`greedy_plan`]. Sites are ranked once by interest score less a fee
//! penalty, accepted in rank order while both budgets hold, and then routed
//! with the nearest-neighbour heuristic. If the routed itinerary overruns
//! the time budget the lowest-ranked pick is dropped and the route rebuilt.
//!
//! The planner runs in `O(n log n + k·n²)` for a catalog of `n` sites and
//! `k` repair rounds, and makes no optimality claim.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod planner;

pub use planner::{GreedyPlanner, greedy_plan};
