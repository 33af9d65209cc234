//! Exhaustive itinerary planner for Yatra.
//!
//! This crate provides [`ExhaustivePlanner`], a reference implementation of
//! the [`Planner`](yatra_core::Planner) trait, and the free function
//! [`exhaustive_plan`]. It searches every affordable subset of the leading
//! catalog sites, routes each along its fastest visiting order, and keeps
//! the feasible subset with the highest selection score.
//!
//! The search is `O(2ⁿ · n!)` in the number of sites considered, so it is
//! capped at [`MAX_EXHAUSTIVE_SITES`] by default. It serves as an optimality
//! baseline for the greedy planner on small catalogs.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod enumerate;
mod planner;

pub use planner::{
    ExhaustivePlanner, ExhaustivePlannerConfig, MAX_EXHAUSTIVE_SITES, exhaustive_plan,
};
