//! The set of field names whose values are considered PII.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Canonical sensitive fields for user records.
pub const PII_FIELDS: &[&str] = &["name", "email", "phone", "ssn", "password"];

/// An ordered set of field names deemed sensitive.
///
/// Immutable once bound to a logger; shared read-only by every redaction
/// call on that logger. The order of insertion never affects redaction
/// output, since matching is by exact membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensitiveFieldSet(BTreeSet<String>);

impl SensitiveFieldSet {
    /// Build a field set from any collection of names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// An empty set. Redacting with it is a no-op.
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Whether `name` is an exact member of the set.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate field names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for SensitiveFieldSet {
    fn default() -> Self {
        Self::new(PII_FIELDS.iter().copied())
    }
}

impl<S: Into<String>> FromIterator<S> for SensitiveFieldSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
