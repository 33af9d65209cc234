//! Site catalogs.
//!
//! A catalog owns its sites in load order. That order matters: it breaks
//! ranking ties in the greedy planner and bounds the exhaustive search.

use std::collections::BTreeSet;
use std::ops::Deref;

use thiserror::Error;

use crate::Site;

/// Errors returned by [`Catalog::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Two sites share a name.
    #[error("duplicate site name '{name}'")]
    DuplicateSite {
        /// The repeated name.
        name: String,
    },
    /// A site name was empty after trimming.
    #[error("site at position {index} has a blank name")]
    BlankName {
        /// Zero-based position of the offending site.
        index: usize,
    },
}

/// An ordered collection of uniquely named sites.
///
/// Dereferences to `[Site]` so it can be handed straight to a planner.
///
/// # Examples
/// ```
/// use yatra_core::{Catalog, CatalogError, Site};
///
/// let catalog = Catalog::new(vec![
///     Site::with_empty_tags("Garden of Dreams", 27.7125, 85.3170, 150),
///     Site::with_empty_tags("Chandragiri Hills", 27.6616, 85.2458, 700),
/// ])?;
/// assert_eq!(catalog.len(), 2);
/// assert!(catalog.find("Garden of Dreams").is_some());
///
/// let err = Catalog::new(vec![
///     Site::with_empty_tags("Garden of Dreams", 0.0, 0.0, 0),
///     Site::with_empty_tags("Garden of Dreams", 1.0, 1.0, 0),
/// ])
/// .unwrap_err();
/// assert_eq!(err, CatalogError::DuplicateSite { name: "Garden of Dreams".into() });
/// # Ok::<(), CatalogError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Site>", into = "Vec<Site>")
)]
pub struct Catalog {
    sites: Vec<Site>,
}

impl Catalog {
    /// Validate and construct a catalog.
    ///
    /// # Errors
    /// Returns [`CatalogError`] when a name is blank or repeated.
    pub fn new(sites: Vec<Site>) -> Result<Self, CatalogError> {
        let mut seen = BTreeSet::new();
        for (index, site) in sites.iter().enumerate() {
            if site.name.trim().is_empty() {
                return Err(CatalogError::BlankName { index });
            }
            if !seen.insert(site.name.as_str()) {
                return Err(CatalogError::DuplicateSite {
                    name: site.name.clone(),
                });
            }
        }
        Ok(Self { sites })
    }

    /// Look a site up by exact name.
    pub fn find(&self, name: &str) -> Option<&Site> {
        self.sites.iter().find(|site| site.name == name)
    }
}

impl Deref for Catalog {
    type Target = [Site];

    fn deref(&self) -> &Self::Target {
        &self.sites
    }
}

impl TryFrom<Vec<Site>> for Catalog {
    type Error = CatalogError;

    fn try_from(sites: Vec<Site>) -> Result<Self, Self::Error> {
        Self::new(sites)
    }
}

impl From<Catalog> for Vec<Site> {
    fn from(catalog: Catalog) -> Self {
        catalog.sites
    }
}
