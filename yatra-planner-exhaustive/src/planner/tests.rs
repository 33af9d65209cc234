//! Tests for the `ExhaustivePlanner`.

use std::collections::BTreeSet;

use super::*;
use rstest::{fixture, rstest};
use yatra_core::test_support::{culture_and_heritage, kathmandu_request, kathmandu_valley, tagged_site};

#[fixture]
fn catalog() -> Vec<Site> {
    kathmandu_valley()
}

fn name_set<'a>(itinerary: &Itinerary<'a>) -> BTreeSet<&'a str> {
    itinerary.site_names().into_iter().collect()
}

#[rstest]
fn kathmandu_scenario_finds_the_best_subset(catalog: Vec<Site>) {
    let request = kathmandu_request();
    let itinerary = ExhaustivePlanner::new().plan(&catalog, &request);

    assert_eq!(
        name_set(&itinerary),
        BTreeSet::from([
            "Kathmandu Durbar Square",
            "Pashupatinath Temple",
            "Swayambhunath Stupa",
        ])
    );
    // Kathmandu Durbar Square sits between the other two.
    assert_eq!(itinerary.site_names()[1], "Kathmandu Durbar Square");
    assert_eq!(itinerary.total_cost(), 400);
    assert!((itinerary.total_time() - 7.227).abs() < 1e-3);
    assert!((itinerary.score(&request.interests) - 46.0).abs() < 1e-9);
    assert_eq!(itinerary.kind(), PlannerKind::Exhaustive);
}

#[rstest]
#[case(1000, 12.0, 4, 550, 64.5)]
#[case(300, 8.0, 2, 250, 37.5)]
#[case(1000, 4.5, 2, 300, 37.0)]
fn kathmandu_budgets_shape_the_result(
    catalog: Vec<Site>,
    #[case] budget: u32,
    #[case] hours: f64,
    #[case] stops: usize,
    #[case] cost: u64,
    #[case] score: f64,
) {
    let interests = culture_and_heritage();
    let itinerary = exhaustive_plan(&catalog, budget, hours, &interests);
    assert_eq!(itinerary.len(), stops);
    assert_eq!(itinerary.total_cost(), cost);
    assert!(itinerary.total_time() <= hours);
    assert!((itinerary.score(&interests) - score).abs() < 1e-9);
}

#[rstest]
fn fastest_route_keeps_first_order_on_ties() {
    let a = tagged_site("a", 0.0, 0.0, 0, &[]);
    let b = tagged_site("b", 0.0, 1.0, 0, &[]);
    let (route, hours) = fastest_route(&[&a, &b]);
    let names: Vec<_> = route.iter().map(|site| site.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert!((hours - 24.0).abs() < 1e-9);
}

#[rstest]
fn fastest_route_avoids_backtracking() {
    let west = tagged_site("west", 0.0, 0.0, 0, &[]);
    let east = tagged_site("east", 0.0, 0.2, 0, &[]);
    let middle = tagged_site("middle", 0.0, 0.1, 0, &[]);
    let (route, hours) = fastest_route(&[&middle, &west, &east]);
    let names: Vec<_> = route.iter().map(|site| site.name.as_str()).collect();
    assert_eq!(names, vec!["west", "middle", "east"]);
    assert!((hours - 10.0).abs() < 1e-9);
}

#[rstest]
fn only_leading_sites_are_searched() {
    let mut catalog: Vec<Site> = (0..6)
        .map(|index| tagged_site(&format!("filler-{index}"), 0.0, 0.0, 500, &["nature"]))
        .collect();
    catalog.push(tagged_site("hidden gem", 0.0, 0.0, 0, &["culture", "heritage"]));

    let itinerary = exhaustive_plan(&catalog, 1000, 8.0, &culture_and_heritage());
    assert!(!itinerary.site_names().contains(&"hidden gem"));

    let wider = ExhaustivePlanner::with_config(ExhaustivePlannerConfig { max_sites: 7 });
    let request = PlanRequest::new(1000, 8.0, culture_and_heritage());
    assert_eq!(wider.plan(&catalog, &request).site_names(), vec!["hidden gem"]);
}

#[rstest]
fn equal_scores_keep_the_earlier_single_site() {
    // Either site fits alone; together they exceed the budget.
    let catalog = vec![
        tagged_site("east", 0.0, 0.01, 100, &["culture"]),
        tagged_site("west", 0.0, 0.0, 100, &["culture"]),
    ];
    let interests: InterestSet = ["culture"].into_iter().collect();
    let itinerary = exhaustive_plan(&catalog, 150, 8.0, &interests);
    assert_eq!(itinerary.site_names(), vec!["east"]);
}

#[rstest]
fn equal_scores_keep_the_lexicographically_first_pair() {
    // Pairs containing "b" are too far apart to fit eight hours, so the
    // first feasible pair is (a, c), which ties with the later (a, d) and (c, d).
    let catalog = vec![
        tagged_site("a", 0.0, 0.0, 100, &["culture"]),
        tagged_site("b", 0.0, 0.3, 100, &["culture"]),
        tagged_site("c", 0.0, 0.01, 100, &["culture"]),
        tagged_site("d", 0.0, 0.02, 100, &["culture"]),
    ];
    let interests: InterestSet = ["culture"].into_iter().collect();
    let itinerary = exhaustive_plan(&catalog, 200, 8.0, &interests);
    assert_eq!(itinerary.site_names(), vec!["a", "c"]);
    assert!((itinerary.score(&interests) - 18.0).abs() < 1e-9);
}

#[rstest]
fn negative_scores_still_beat_no_plan() {
    let catalog = vec![tagged_site("pricey", 0.0, 0.0, 900, &["nature"])];
    let itinerary = exhaustive_plan(&catalog, 1000, 8.0, &culture_and_heritage());
    assert_eq!(itinerary.site_names(), vec!["pricey"]);
    assert!(itinerary.score(&culture_and_heritage()) < 0.0);
}

#[rstest]
#[case(0, 8.0)]
#[case(1000, 1.0)]
fn infeasible_budgets_yield_empty_itineraries(
    catalog: Vec<Site>,
    #[case] budget: u32,
    #[case] hours: f64,
) {
    assert!(exhaustive_plan(&catalog, budget, hours, &culture_and_heritage()).is_empty());
}

#[rstest]
fn empty_inputs_yield_empty_itineraries(catalog: Vec<Site>) {
    assert!(exhaustive_plan(&[], 1000, 8.0, &culture_and_heritage()).is_empty());
    assert!(exhaustive_plan(&catalog, 1000, 8.0, &InterestSet::new()).is_empty());
}

#[rstest]
fn default_config_searches_six_sites() {
    assert_eq!(ExhaustivePlanner::new().config().max_sites, MAX_EXHAUSTIVE_SITES);
    assert_eq!(MAX_EXHAUSTIVE_SITES, 6);
}
