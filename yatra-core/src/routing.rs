//! Nearest-neighbour route ordering.
//!
//! Ordering is O(n²) and deterministic. It makes no optimality claim; the
//! exhaustive planner is the place to look for shortest routes.

use log::trace;

use crate::Site;
use crate::scoring::distance;

/// Order `sites` by repeatedly visiting the closest unvisited one.
///
/// The first input site is always the first stop. Among equally close
/// candidates the earliest in input order wins. The result is a permutation
/// of the input and never contains sites that were not passed in.
///
/// # Examples
/// ```
/// use yatra_core::{Site, routing::order_nearest_neighbour};
///
/// let start = Site::with_empty_tags("start", 0.0, 0.0, 0);
/// let far = Site::with_empty_tags("far", 0.0, 3.0, 0);
/// let near = Site::with_empty_tags("near", 0.0, 1.0, 0);
///
/// let route = order_nearest_neighbour(&[&start, &far, &near]);
/// let names: Vec<_> = route.iter().map(|site| site.name.as_str()).collect();
/// assert_eq!(names, vec!["start", "near", "far"]);
/// ```
pub fn order_nearest_neighbour<'a>(sites: &[&'a Site]) -> Vec<&'a Site> {
    let Some((&seed, rest)) = sites.split_first() else {
        return Vec::new();
    };
    let mut remaining = rest.to_vec();
    let mut route = Vec::with_capacity(sites.len());
    route.push(seed);
    let mut current = seed;
    while let Some(index) = nearest_index(current, &remaining) {
        let next = remaining.remove(index);
        trace!(
            "route step {} -> {} ({:.4} deg)",
            current.name,
            next.name,
            distance(current, next)
        );
        route.push(next);
        current = next;
    }
    route
}

/// Index of the candidate closest to `from`; ties keep the earliest.
fn nearest_index(from: &Site, candidates: &[&Site]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let d = distance(from, candidate);
        match best {
            Some((_, best_distance)) if d >= best_distance => {}
            _ => best = Some((index, d)),
        }
    }
    best.map(|(index, _)| index)
}

/// Summed leg distance along `sites` in the given order.
pub fn route_distance(sites: &[&Site]) -> f64 {
    sites
        .windows(2)
        .map(|pair| match pair {
            [from, to] => distance(from, to),
            _ => 0.0,
        })
        .sum()
}
