//! The rule library
//!
//! Factories for every supported rule kind. Each returns a [`Rule`] carrying
//! the kind's default key and message; chain [`Rule::with_message`] or
//! [`Rule::with_key`] to override them.
//!
//! | Factory | Key | Passes when |
//! |---|---|---|
//! | [`not_null`] | `not-null` | value is not null |
//! | [`not_blank`] | `not-blank` | value is not null and its text is not blank |
//! | [`length`] | `string-length` | coerced text length is within bounds |
//! | [`range`] | `range` | value is one of the permitted values |
//! | [`check`] | `custom` | the predicate returns `true` |
//! | [`valid`] | `nested` | always (placeholder) |
//!
//! # Example
//!
//! ```rust
//! use sluice::rules::{self, Length, Range};
//! use sluice::RuleSet;
//!
//! let rules = RuleSet::new()
//!     .attr("code", rules::length(Length::between(2, 5)).with_message("Between 2 and 5"))
//!     .attr("gender", rules::range(Range::of(["male", "female"]).ignore_case()))
//!     .attr("description", [rules::not_null(), rules::not_blank()]);
//!
//! assert_eq!(rules.len(), 3);
//! ```

use std::sync::Arc;

use crate::context::ValidationContext;
use crate::rule::{Rule, RuleKind};
use crate::value::Value;

pub use crate::rule::{Check, Length, Range};

/// Value must not be null.
///
/// Any non-null value passes, including `0`, `false` and the empty string.
///
/// # Example
///
/// ```rust
/// use sluice::rules;
///
/// let rule = rules::not_null();
/// assert_eq!(rule.key(), "not-null");
/// assert_eq!(rule.message(), "Please supply a value");
/// ```
pub fn not_null() -> Rule {
    Rule::new(RuleKind::NotNull)
}

/// Value must not be null, and its text must contain something other than
/// whitespace.
///
/// Values with no text form (lists, objects) pass.
pub fn not_blank() -> Rule {
    Rule::new(RuleKind::NotBlank)
}

/// Coerced text length must lie within `bounds`.
///
/// Numbers are measured by their text form, so `12345` has length 5. A null
/// value fails whenever a bound is configured.
///
/// # Example
///
/// ```rust
/// use sluice::rules::{self, Length};
///
/// let rule = rules::length(Length::min(2).and_max(5).trimmed());
/// assert_eq!(rule.message(), "Must be between 2 and 5 characters");
/// ```
pub fn length(bounds: Length) -> Rule {
    Rule::new(RuleKind::Length(bounds))
}

/// Value must be one of the permitted values. Null never matches.
pub fn range(values: Range) -> Rule {
    Rule::new(RuleKind::Range(values))
}

/// Caller-supplied predicate over the raw value and the evaluation context.
///
/// The default key is `custom`; give the rule a message with
/// [`Rule::with_message`].
///
/// # Example
///
/// ```rust
/// use sluice::rules;
///
/// let monkey = rules::check(|value, _ctx| value.to_string().contains("monkey"))
///     .with_message("Needs to contain the word monkey");
/// assert_eq!(monkey.key(), "custom");
/// ```
pub fn check<F>(predicate: F) -> Rule
where
    F: Fn(&Value, &ValidationContext<'_>) -> bool + Send + Sync + 'static,
{
    Rule::new(RuleKind::Check(Arc::new(predicate)))
}

/// Like [`check`], for predicates implemented as types.
pub fn check_with<C: Check + 'static>(predicate: C) -> Rule {
    Rule::new(RuleKind::Check(Arc::new(predicate)))
}

/// Placeholder for validating a related model or collection.
///
/// Validation of nested values is not implemented: this rule always passes,
/// and building a validator that uses it logs a warning.
pub fn valid() -> Rule {
    Rule::new(RuleKind::Nested)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::Attributes;
    use crate::context::Mode;

    fn passes(rule: &Rule, value: impl Into<Value>) -> bool {
        let attrs = Attributes::new();
        let ctx = ValidationContext::new("name", "name", Mode::Full, &attrs);
        rule.evaluate(&value.into(), &ctx)
    }

    #[test]
    fn test_not_null() {
        let rule = not_null();
        assert!(!passes(&rule, Value::Null));
        assert!(passes(&rule, "Dave"));
        assert!(passes(&rule, 123));
        assert!(passes(&rule, 0));
        assert!(passes(&rule, ""));
    }

    #[test]
    fn test_not_blank() {
        let rule = not_blank();
        assert!(!passes(&rule, Value::Null));
        for blank in ["", "   ", "\t\t"] {
            assert!(!passes(&rule, blank), "{:?} should be blank", blank);
        }
        assert!(passes(&rule, "Dave"));
        assert!(passes(&rule, 123));
    }

    #[test]
    fn test_length_min_only() {
        let rule = length(Length::min(2));
        for value in [Value::Null, Value::from(""), Value::from(1)] {
            assert!(!passes(&rule, value.clone()), "{} should fail", value);
        }
        for value in [Value::from("  "), Value::from("ab"), Value::from(12)] {
            assert!(passes(&rule, value.clone()), "{} should pass", value);
        }
    }

    #[test]
    fn test_length_max_only() {
        let rule = length(Length::max(5));
        for value in [
            Value::Null,
            Value::from("      "),
            Value::from("askjdflaskdf"),
            Value::from(123456),
        ] {
            assert!(!passes(&rule, value.clone()), "{} should fail", value);
        }
        for value in [
            Value::from(12345),
            Value::from("hello"),
            Value::from("1"),
            Value::from(""),
        ] {
            assert!(passes(&rule, value.clone()), "{} should pass", value);
        }
    }

    #[test]
    fn test_length_min_only_trimmed() {
        let rule = length(Length::min(2).trimmed());
        for value in ["", "  ", "\t\t", "  A  "] {
            assert!(!passes(&rule, value), "{:?} should fail", value);
        }
        assert!(passes(&rule, "ab"));
        assert!(passes(&rule, 12));
    }

    #[test]
    fn test_length_min_and_max_trimmed() {
        let rule = length(Length::between(2, 5).trimmed());
        for value in [
            "",
            "  ",
            "\t\t",
            "  A  ",
            "     A",
            "A     ",
            "  AAAAAA  ",
            "     AAAAAAA",
            "AAAAAAA    ",
        ] {
            assert!(!passes(&rule, value), "{:?} should fail", value);
        }
        for value in ["ab", "abc", "abcd", "abcde", "  AAAA   ", "AAAA   "] {
            assert!(passes(&rule, value), "{:?} should pass", value);
        }
        for value in [12, 123, 1234, 12345] {
            assert!(passes(&rule, value), "{} should pass", value);
        }
    }

    #[test]
    fn test_range() {
        let rule = range(Range::of(["male", "female"]));
        assert!(!passes(&rule, Value::Null));
        assert!(passes(&rule, "male"));
        assert!(passes(&rule, "female"));
        for value in ["Male", "MALE", "pending", "tbc"] {
            assert!(!passes(&rule, value), "{:?} should fail", value);
        }
    }

    #[test]
    fn test_range_ignore_case() {
        let rule = range(Range::of(["male", "female"]).ignore_case());
        assert!(!passes(&rule, Value::Null));
        for value in ["male", "female", "MALE", "FEMALE"] {
            assert!(passes(&rule, value), "{:?} should pass", value);
        }
        for value in ["pending", "tbc"] {
            assert!(!passes(&rule, value), "{:?} should fail", value);
        }
    }

    #[test]
    fn test_check() {
        let rule = check(|value, _| value.to_string().contains("monkey"))
            .with_message("Needs to contain the word monkey");
        assert!(!passes(&rule, "asdf"));
        assert!(passes(&rule, "monkey man"));
        assert_eq!(rule.message(), "Needs to contain the word monkey");
        assert_eq!(rule.key(), "custom");
    }

    struct Even;

    impl Check for Even {
        fn check(&self, value: &Value, _ctx: &ValidationContext<'_>) -> bool {
            matches!(value, Value::Int(n) if n % 2 == 0)
        }
    }

    #[test]
    fn test_check_with_type() {
        let rule = check_with(Even).with_key("even");
        assert!(passes(&rule, 4));
        assert!(!passes(&rule, 3));
        assert_eq!(rule.key(), "even");
    }

    #[test]
    fn test_valid_placeholder() {
        let rule = valid();
        assert!(passes(&rule, Value::Object(Attributes::new())));
        assert_eq!(rule.key(), "nested");
    }
}
