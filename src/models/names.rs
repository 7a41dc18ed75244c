//! Worker name lists.
//!
//! Names are entered as free text, one per line or separated by commas.
//! Parsing keeps input order and does not deduplicate: two volunteers
//! can share a name.

use serde::{Deserialize, Serialize};

/// An ordered sequence of worker names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NameList(Vec<String>);

impl NameList {
    /// Creates a name list from already-clean names.
    pub fn new(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Names in input order.
    #[inline]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of names.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Joins names with `", "`, the form used to repopulate text inputs.
    pub fn join(&self) -> String {
        self.0.join(", ")
    }

    /// Consumes the list, returning the names.
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl From<Vec<String>> for NameList {
    fn from(names: Vec<String>) -> Self {
        Self(names)
    }
}

/// Parses free text into a name list.
///
/// Splits on any run of commas and/or newlines, trims each piece and
/// drops pieces that are empty after trimming. Blank input yields an
/// empty list.
///
/// # Example
///
/// ```
/// use shift_roster::models::parse_names;
///
/// let names = parse_names("Alice, Bob\n\n Carol ,,");
/// assert_eq!(names.as_slice(), ["Alice", "Bob", "Carol"]);
/// ```
pub fn parse_names(raw: &str) -> NameList {
    raw.split(|c| c == ',' || c == '\n')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect::<Vec<_>>()
        .into()
}
