//! Validation results
//!
//! A [`ValidationResult`] is an ordered list of [`AttrResult`]s, one per
//! attribute that failed at least one rule. Validity is derived from that
//! list, so `is_valid()` is true exactly when there are no results.
//!
//! With the `serde` feature the result serializes to the shape consumers
//! display:
//!
//! ```text
//! { "isValid": false,
//!   "results": [{ "attr": "name", "path": "name",
//!                 "errors": [{ "message": "Between 2 and 5", "key": "string-length" }] }] }
//! ```

use std::fmt;

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleFailure {
    /// Human-readable message
    pub message: String,
    /// Machine-readable failure category
    pub key: String,
}

impl RuleFailure {
    /// Create a failure entry.
    pub fn new(message: impl Into<String>, key: impl Into<String>) -> Self {
        RuleFailure {
            message: message.into(),
            key: key.into(),
        }
    }
}

/// The failures recorded for one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttrResult {
    /// Attribute name
    pub attr: String,
    /// Attribute path; equal to `attr` for top-level attributes
    pub path: String,
    /// Failures in rule declaration order
    pub errors: Vec<RuleFailure>,
}

impl AttrResult {
    /// Create a result whose path equals the attribute name.
    pub fn new(attr: impl Into<String>, errors: Vec<RuleFailure>) -> Self {
        let attr = attr.into();
        AttrResult {
            path: attr.clone(),
            attr,
            errors,
        }
    }

    /// Failure messages in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.message.as_str())
    }

    /// Failure keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.key.as_str())
    }
}

/// The outcome of one validation call.
///
/// # Examples
///
/// ```
/// use sluice::{AttrResult, RuleFailure, ValidationResult};
///
/// let ok = ValidationResult::valid();
/// assert!(ok.is_valid());
///
/// let failed = ValidationResult::from_results(vec![AttrResult::new(
///     "name",
///     vec![RuleFailure::new("Between 2 and 5", "string-length")],
/// )]);
/// assert!(!failed.is_valid());
/// assert_eq!(failed.get("name").map(|r| r.errors.len()), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    results: Vec<AttrResult>,
}

impl ValidationResult {
    /// A result with no failures.
    pub fn valid() -> Self {
        Self::default()
    }

    /// Build a result from per-attribute failures.
    ///
    /// Entries with no errors are dropped so that validity stays derived from
    /// actual failures.
    pub fn from_results(results: Vec<AttrResult>) -> Self {
        let results = results
            .into_iter()
            .filter(|r| !r.errors.is_empty())
            .collect();
        ValidationResult { results }
    }

    /// True iff no attribute failed.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.results.is_empty()
    }

    /// Per-attribute failures, in rule set declaration order.
    pub fn results(&self) -> &[AttrResult] {
        &self.results
    }

    /// Consume the result, returning the per-attribute failures.
    pub fn into_results(self) -> Vec<AttrResult> {
        self.results
    }

    /// Failures recorded for `attr`.
    pub fn get(&self, attr: &str) -> Option<&AttrResult> {
        self.results.iter().find(|r| r.attr == attr)
    }

    /// Names of the failing attributes, in order.
    pub fn failed_attrs(&self) -> impl Iterator<Item = &str> {
        self.results.iter().map(|r| r.attr.as_str())
    }

    /// Total number of failed rules across all attributes.
    pub fn error_count(&self) -> usize {
        self.results.iter().map(|r| r.errors.len()).sum()
    }

    /// Append the failures of `other` after this result's failures.
    ///
    /// # Examples
    ///
    /// ```
    /// use sluice::{AttrResult, RuleFailure, ValidationResult};
    ///
    /// let a = ValidationResult::from_results(vec![AttrResult::new("a", vec![RuleFailure::new("m", "k")])]);
    /// let b = ValidationResult::valid();
    /// assert_eq!(a.clone().merge(b), a);
    /// ```
    pub fn merge(mut self, other: ValidationResult) -> Self {
        self.results.extend(other.results);
        self
    }

    /// `Ok(())` when valid, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationResult> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "valid");
        }
        write!(f, "invalid")?;
        for result in &self.results {
            for error in &result.errors {
                write!(f, "\n  {}: {} [{}]", result.path, error.message, error.key)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for ValidationResult {}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::ser::SerializeStruct;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{AttrResult, ValidationResult};

    impl Serialize for ValidationResult {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("ValidationResult", 2)?;
            state.serialize_field("isValid", &self.is_valid())?;
            state.serialize_field("results", &self.results)?;
            state.end()
        }
    }

    #[derive(Deserialize)]
    struct Raw {
        #[serde(rename = "isValid")]
        is_valid: bool,
        results: Vec<AttrResult>,
    }

    impl<'de> Deserialize<'de> for ValidationResult {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = Raw::deserialize(deserializer)?;
            if raw.results.iter().any(|r| r.errors.is_empty()) {
                return Err(serde::de::Error::custom(
                    "attribute result without errors",
                ));
            }
            if raw.is_valid != raw.results.is_empty() {
                return Err(serde::de::Error::custom(
                    "isValid contradicts the presence of results",
                ));
            }
            Ok(ValidationResult {
                results: raw.results,
            })
        }
    }
}
