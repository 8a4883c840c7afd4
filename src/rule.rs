//! Rules: named, configured checks against a single value
//!
//! A [`Rule`] pairs a [`RuleKind`] (the logic) with a stable failure `key`
//! and a human-readable `message`. Rules are built by the factories in
//! [`crate::rules`] and are immutable afterwards; [`Rule::with_message`] and
//! [`Rule::with_key`] consume the rule and return a reconfigured one.
//!
//! # Example
//!
//! ```rust
//! use sluice::rules::{self, Length};
//!
//! let rule = rules::length(Length::between(2, 5)).with_message("Between 2 and 5");
//!
//! assert_eq!(rule.key(), "string-length");
//! assert_eq!(rule.message(), "Between 2 and 5");
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::context::ValidationContext;
use crate::value::Value;

/// Caller-owned predicate used by [`crate::rules::check`].
///
/// Implemented for every `Fn(&Value, &ValidationContext) -> bool` closure
/// that is `Send + Sync`. A panic inside `check` is not caught by the
/// validator.
pub trait Check: Send + Sync {
    /// Decide whether `value` passes.
    fn check(&self, value: &Value, ctx: &ValidationContext<'_>) -> bool;
}

impl<F> Check for F
where
    F: Fn(&Value, &ValidationContext<'_>) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &Value, ctx: &ValidationContext<'_>) -> bool {
        self(value, ctx)
    }
}

/// Length bounds for the `length` rule.
///
/// Omitted bounds are not checked. With `trim`, leading and trailing
/// whitespace is ignored when measuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Length {
    /// Minimum length, inclusive
    pub min: Option<usize>,
    /// Maximum length, inclusive
    pub max: Option<usize>,
    /// Measure after trimming whitespace
    pub trim: bool,
}

impl Length {
    /// At least `min` characters.
    pub fn min(min: usize) -> Self {
        Length {
            min: Some(min),
            ..Length::default()
        }
    }

    /// At most `max` characters.
    pub fn max(max: usize) -> Self {
        Length {
            max: Some(max),
            ..Length::default()
        }
    }

    /// Between `min` and `max` characters, inclusive.
    pub fn between(min: usize, max: usize) -> Self {
        Length {
            min: Some(min),
            max: Some(max),
            trim: false,
        }
    }

    /// Add an upper bound.
    pub fn and_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Measure after trimming leading and trailing whitespace.
    pub fn trimmed(mut self) -> Self {
        self.trim = true;
        self
    }

    /// Whether any bound is configured.
    pub fn is_bounded(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    fn accepts(&self, value: &Value) -> bool {
        let Some(text) = value.coerce_text() else {
            return !self.is_bounded();
        };
        let text = if self.trim { text.trim() } else { &*text };
        let len = text.chars().count();
        self.min.is_none_or(|min| len >= min) && self.max.is_none_or(|max| len <= max)
    }

    fn default_message(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("Must be between {} and {} characters", min, max),
            (Some(min), None) => format!("Must be at least {} characters", min),
            (None, Some(max)) => format!("Must be no more than {} characters", max),
            (None, None) => "Invalid length".to_string(),
        }
    }
}

/// Permitted values for the `range` rule.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Range {
    /// Permitted values, in declaration order
    pub values: Vec<Value>,
    /// Compare text case-insensitively
    pub ignore_case: bool,
}

impl Range {
    /// Permit exactly these values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sluice::rules::Range;
    ///
    /// let genders = Range::of(["male", "female"]).ignore_case();
    /// assert_eq!(genders.values.len(), 2);
    /// assert!(genders.ignore_case);
    /// ```
    pub fn of<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Range {
            values: values.into_iter().map(Into::into).collect(),
            ignore_case: false,
        }
    }

    /// Compare text values case-insensitively.
    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    fn accepts(&self, value: &Value) -> bool {
        if value.is_null() {
            return false;
        }
        match (self.ignore_case, value) {
            (true, Value::Text(text)) => {
                let folded = text.to_lowercase();
                self.values
                    .iter()
                    .any(|allowed| allowed.as_str().is_some_and(|a| a.to_lowercase() == folded))
            }
            _ => self.values.contains(value),
        }
    }
}

/// The fixed set of rule kinds.
#[derive(Clone)]
pub enum RuleKind {
    /// Value must not be null
    NotNull,
    /// Value must not be null, and text must not be blank
    NotBlank,
    /// Coerced text length must lie within bounds
    Length(Length),
    /// Value must be one of the permitted values
    Range(Range),
    /// Caller-supplied predicate
    Check(Arc<dyn Check>),
    /// Reserved for validating related models and collections; always passes
    Nested,
}

impl RuleKind {
    /// Stable failure key for this kind.
    pub fn default_key(&self) -> &'static str {
        match self {
            RuleKind::NotNull => "not-null",
            RuleKind::NotBlank => "not-blank",
            RuleKind::Length(_) => "string-length",
            RuleKind::Range(_) => "range",
            RuleKind::Check(_) => "custom",
            RuleKind::Nested => "nested",
        }
    }

    fn default_message(&self) -> Cow<'static, str> {
        match self {
            RuleKind::NotNull | RuleKind::NotBlank => Cow::Borrowed("Please supply a value"),
            RuleKind::Length(length) => Cow::Owned(length.default_message()),
            RuleKind::Range(_) => Cow::Borrowed("Please select a permitted value"),
            RuleKind::Check(_) => Cow::Borrowed("Invalid value"),
            RuleKind::Nested => Cow::Borrowed("Invalid nested value"),
        }
    }
}

impl fmt::Debug for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::NotNull => write!(f, "NotNull"),
            RuleKind::NotBlank => write!(f, "NotBlank"),
            RuleKind::Length(length) => f.debug_tuple("Length").field(length).finish(),
            RuleKind::Range(range) => f.debug_tuple("Range").field(range).finish(),
            RuleKind::Check(_) => write!(f, "Check(<predicate>)"),
            RuleKind::Nested => write!(f, "Nested"),
        }
    }
}

/// A single configured check.
#[derive(Debug, Clone)]
pub struct Rule {
    kind: RuleKind,
    key: Cow<'static, str>,
    message: Cow<'static, str>,
}

impl Rule {
    /// Create a rule with the kind's default key and message.
    pub fn new(kind: RuleKind) -> Self {
        let key = Cow::Borrowed(kind.default_key());
        let message = kind.default_message();
        Rule { kind, key, message }
    }

    /// Replace the failure message.
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Replace the failure key.
    pub fn with_key(mut self, key: impl Into<Cow<'static, str>>) -> Self {
        self.key = key.into();
        self
    }

    /// The rule's logic.
    pub fn kind(&self) -> &RuleKind {
        &self.kind
    }

    /// Machine-readable failure category.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Human-readable failure message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Decide whether `value` passes this rule.
    pub fn evaluate(&self, value: &Value, ctx: &ValidationContext<'_>) -> bool {
        match &self.kind {
            RuleKind::NotNull => !value.is_null(),
            RuleKind::NotBlank => match value {
                Value::Null => false,
                other => other.coerce_text().is_none_or(|text| !text.trim().is_empty()),
            },
            RuleKind::Length(length) => length.accepts(value),
            RuleKind::Range(range) => range.accepts(value),
            RuleKind::Check(check) => check.check(value, ctx),
            RuleKind::Nested => true,
        }
    }
}
