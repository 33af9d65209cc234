//! Interest sets: the categories a visitor asked for.
//!
//! Names are compared verbatim against site tags, so callers that accept
//! free-form input should go through [`InterestSet::parse`], which
//! normalises case and whitespace.

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

/// Errors returned by [`InterestSet::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterestSetError {
    /// An interest name was empty after trimming.
    #[error("interest at position {index} is blank")]
    BlankInterest {
        /// Zero-based position of the offending name.
        index: usize,
    },
}

/// An ordered set of interest names.
///
/// # Examples
/// ```
/// use yatra_core::InterestSet;
///
/// let interests = InterestSet::new()
///     .with_interest("heritage")
///     .with_interest("culture");
/// assert!(interests.contains("culture"));
/// assert_eq!(interests.iter().collect::<Vec<_>>(), vec!["culture", "heritage"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct InterestSet(BTreeSet<String>);

impl InterestSet {
    /// Construct an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalise free-form interest names.
    ///
    /// Each name is trimmed and lower-cased. Duplicates collapse.
    ///
    /// # Errors
    /// Returns [`InterestSetError::BlankInterest`] when a name is empty
    /// after trimming.
    ///
    /// # Examples
    /// ```
    /// use yatra_core::{InterestSet, InterestSetError};
    ///
    /// let interests = InterestSet::parse([" Culture ", "HERITAGE"])?;
    /// assert!(interests.contains("culture"));
    /// assert!(interests.contains("heritage"));
    ///
    /// let err = InterestSet::parse(["nature", "  "]).unwrap_err();
    /// assert_eq!(err, InterestSetError::BlankInterest { index: 1 });
    /// # Ok::<(), InterestSetError>(())
    /// ```
    pub fn parse<I, S>(names: I) -> Result<Self, InterestSetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .enumerate()
            .map(|(index, name)| {
                let trimmed = name.as_ref().trim();
                if trimmed.is_empty() {
                    Err(InterestSetError::BlankInterest { index })
                } else {
                    Ok(trimmed.to_lowercase())
                }
            })
            .collect::<Result<BTreeSet<_>, _>>()
            .map(Self)
    }

    /// Add an interest while returning `self` for chaining.
    #[must_use]
    pub fn with_interest(mut self, name: impl Into<String>) -> Self {
        self.insert(name);
        self
    }

    /// Insert an interest name verbatim.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.0.insert(name.into())
    }

    /// Whether `name` is one of the requested interests.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    /// Number of distinct interests.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no interest was requested.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over interest names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Count the tags shared with `tags`.
    pub fn overlap(&self, tags: &BTreeSet<String>) -> usize {
        self.0.intersection(tags).count()
    }
}

impl<S: Into<String>> FromIterator<S> for InterestSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for InterestSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for name in &self.0 {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(&["culture"], &["culture"])]
    #[case(&["  Culture", "culture "], &["culture"])]
    #[case(&["Heritage", "NATURE"], &["heritage", "nature"])]
    fn parse_normalises_names(#[case] input: &[&str], #[case] expected: &[&str]) {
        let interests = InterestSet::parse(input).expect("names are valid");
        assert_eq!(interests.iter().collect::<Vec<_>>(), expected);
    }

    #[rstest]
    #[case(&[""], 0)]
    #[case(&["culture", "\t"], 1)]
    fn parse_rejects_blank_names(#[case] input: &[&str], #[case] index: usize) {
        let err = InterestSet::parse(input).expect_err("blank name");
        assert_eq!(err, InterestSetError::BlankInterest { index });
    }

    #[rstest]
    fn parse_accepts_empty_input() {
        let interests = InterestSet::parse(Vec::<String>::new()).expect("empty input");
        assert!(interests.is_empty());
    }

    #[rstest]
    fn overlap_counts_shared_tags() {
        let interests: InterestSet = ["culture", "heritage"].into_iter().collect();
        let tags = BTreeSet::from(["culture".to_owned(), "religious".to_owned()]);
        assert_eq!(interests.overlap(&tags), 1);
    }

    #[rstest]
    fn display_joins_sorted_names() {
        let interests: InterestSet = ["nature", "culture"].into_iter().collect();
        assert_eq!(interests.to_string(), "culture, nature");
        assert_eq!(InterestSet::new().to_string(), "");
    }
}
