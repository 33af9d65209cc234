//! Sightseeing destinations.
//!
//! A [`Site`] is built once from catalog data and then only ever borrowed.
//! Planners select and reorder `&Site` values; they never clone or mutate
//! them.

use std::collections::BTreeSet;

use geo::Coord;

/// Interest categories attached to a site.
///
/// An ordered set keeps iteration, and therefore any tie-breaking that
/// depends on it, reproducible.
pub type Tags = BTreeSet<String>;

/// Informational opening window, e.g. `"06:00"` to `"18:00"`.
///
/// Planners do not check visits against these times.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OpeningHours {
    /// Opening time as wall-clock text.
    pub open: String,
    /// Closing time as wall-clock text.
    pub close: String,
}

impl OpeningHours {
    /// Construct an opening window from wall-clock strings.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// A destination worth visiting.
///
/// Coordinates use `x = longitude` and `y = latitude` and are treated as a
/// flat plane, so distances come out in coordinate-degrees.
///
/// # Examples
/// ```
/// use yatra_core::{Site, Tags};
///
/// let site = Site::new(
///     "Pashupatinath Temple",
///     27.7104,
///     85.3488,
///     100,
///     Tags::from(["culture".to_owned(), "religious".to_owned()]),
/// )
/// .with_hours("06:00", "18:00");
///
/// assert_eq!(site.entry_fee, 100);
/// assert_eq!(site.latitude(), 27.7104);
/// assert!(site.tags.contains("culture"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "SiteRecord", into = "SiteRecord")
)]
pub struct Site {
    /// Display name, unique within a catalog.
    pub name: String,
    /// Planar position.
    pub location: Coord<f64>,
    /// Entry fee in whole currency units.
    pub entry_fee: u32,
    /// Informational opening window.
    pub hours: OpeningHours,
    /// Interest categories.
    pub tags: Tags,
}

impl Site {
    /// Construct a site from its latitude and longitude.
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        entry_fee: u32,
        tags: Tags,
    ) -> Self {
        Self {
            name: name.into(),
            location: Coord {
                x: longitude,
                y: latitude,
            },
            entry_fee,
            hours: OpeningHours::default(),
            tags,
        }
    }

    /// Construct a site that matches no interests.
    ///
    /// # Examples
    /// ```
    /// use yatra_core::Site;
    ///
    /// let site = Site::with_empty_tags("Ring Road", 27.7, 85.3, 0);
    /// assert!(site.tags.is_empty());
    /// ```
    pub fn with_empty_tags(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
        entry_fee: u32,
    ) -> Self {
        Self::new(name, latitude, longitude, entry_fee, Tags::new())
    }

    /// Attach an opening window while returning `self` for chaining.
    #[must_use]
    pub fn with_hours(mut self, open: impl Into<String>, close: impl Into<String>) -> Self {
        self.hours = OpeningHours::new(open, close);
        self
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }
}

/// Flat record layout used by catalog files.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
struct SiteRecord {
    name: String,
    latitude: f64,
    longitude: f64,
    entry_fee: u32,
    #[serde(default)]
    open_time: String,
    #[serde(default)]
    close_time: String,
    #[serde(default)]
    tags: Tags,
}

#[cfg(feature = "serde")]
impl From<SiteRecord> for Site {
    fn from(record: SiteRecord) -> Self {
        Self::new(
            record.name,
            record.latitude,
            record.longitude,
            record.entry_fee,
            record.tags,
        )
        .with_hours(record.open_time, record.close_time)
    }
}

#[cfg(feature = "serde")]
impl From<Site> for SiteRecord {
    fn from(site: Site) -> Self {
        Self {
            latitude: site.latitude(),
            longitude: site.longitude(),
            name: site.name,
            entry_fee: site.entry_fee,
            open_time: site.hours.open,
            close_time: site.hours.close,
            tags: site.tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn coordinates_map_latitude_to_y() {
        let site = Site::with_empty_tags("Garden of Dreams", 27.7125, 85.3170, 150);
        assert_eq!(site.location.y, 27.7125);
        assert_eq!(site.location.x, 85.3170);
        assert_eq!(site.longitude(), 85.3170);
    }

    #[rstest]
    fn hours_default_to_blank() {
        let site = Site::with_empty_tags("Ring Road", 0.0, 0.0, 0);
        assert_eq!(site.hours, OpeningHours::default());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn decodes_catalog_record_layout() {
        let json = r#"{
            "name": "Chandragiri Hills",
            "latitude": 27.6616,
            "longitude": 85.2458,
            "entry_fee": 700,
            "open_time": "09:00",
            "close_time": "17:00",
            "tags": ["nature", "adventure"]
        }"#;
        let site: Site = serde_json::from_str(json).expect("record should decode");
        assert_eq!(site.name, "Chandragiri Hills");
        assert_eq!(site.latitude(), 27.6616);
        assert_eq!(site.hours, OpeningHours::new("09:00", "17:00"));
        assert_eq!(
            site.tags.iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["adventure", "nature"]
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn missing_optional_fields_default() {
        let json = r#"{"name": "Ring Road", "latitude": 1.0, "longitude": 2.0, "entry_fee": 0}"#;
        let site: Site = serde_json::from_str(json).expect("record should decode");
        assert!(site.tags.is_empty());
        assert!(site.hours.open.is_empty());
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn encodes_flat_record() {
        let site = Site::new(
            "Swayambhunath Stupa",
            27.7149,
            85.2906,
            200,
            Tags::from(["heritage".to_owned()]),
        )
        .with_hours("07:00", "17:00");
        let value = serde_json::to_value(&site).expect("site should encode");
        assert_eq!(value["latitude"], 27.7149);
        assert_eq!(value["longitude"], 85.2906);
        assert_eq!(value["open_time"], "07:00");
        assert_eq!(value["tags"][0], "heritage");
    }
}
