//! Fixtures shared by unit, behaviour and property tests across the
//! workspace.

use crate::{InterestSet, PlanRequest, Site, Tags};

#[cfg(feature = "test-support")]
mod generate;
#[cfg(feature = "test-support")]
mod strategies;

#[cfg(feature = "test-support")]
pub use generate::{BENCHMARK_SEED, benchmark_interests, generate_catalog};
#[cfg(feature = "test-support")]
pub use strategies::{assert_within_budgets, catalog_strategy, interests_strategy};

/// Interest names generated sites and requests draw from.
pub const INTEREST_POOL: [&str; 6] = [
    "culture",
    "nature",
    "adventure",
    "religious",
    "heritage",
    "relaxation",
];

/// Build a site from a tag list.
pub fn tagged_site(name: &str, latitude: f64, longitude: f64, entry_fee: u32, tags: &[&str]) -> Site {
    Site::new(
        name,
        latitude,
        longitude,
        entry_fee,
        tags.iter().map(|tag| (*tag).to_owned()).collect::<Tags>(),
    )
}

/// The six Kathmandu valley sites, in catalog order.
pub fn kathmandu_valley() -> Vec<Site> {
    vec![
        tagged_site(
            "Pashupatinath Temple",
            27.7104,
            85.3488,
            100,
            &["culture", "religious"],
        )
        .with_hours("06:00", "18:00"),
        tagged_site(
            "Swayambhunath Stupa",
            27.7149,
            85.2906,
            200,
            &["culture", "heritage"],
        )
        .with_hours("07:00", "17:00"),
        tagged_site(
            "Garden of Dreams",
            27.7125,
            85.3170,
            150,
            &["nature", "relaxation"],
        )
        .with_hours("09:00", "21:00"),
        tagged_site(
            "Chandragiri Hills",
            27.6616,
            85.2458,
            700,
            &["nature", "adventure"],
        )
        .with_hours("09:00", "17:00"),
        tagged_site(
            "Kathmandu Durbar Square",
            27.7048,
            85.3076,
            100,
            &["culture", "heritage"],
        )
        .with_hours("10:00", "17:00"),
        tagged_site(
            "Bhaktapur Durbar Square",
            27.6722,
            85.4298,
            150,
            &["culture", "heritage"],
        )
        .with_hours("10:00", "17:00"),
    ]
}

/// Interests used by the Kathmandu valley scenario.
pub fn culture_and_heritage() -> InterestSet {
    ["culture", "heritage"].into_iter().collect()
}

/// Budget 1000, eight hours, culture and heritage.
pub fn kathmandu_request() -> PlanRequest {
    PlanRequest::new(1000, 8.0, culture_and_heritage())
}
