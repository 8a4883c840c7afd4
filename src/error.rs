//! Configuration errors
//!
//! Rule failures are data and live in [`crate::ValidationResult`]. A
//! [`ConfigError`] means the rule set itself is unusable; it is returned from
//! [`crate::Validator::new`] so that mistakes surface when the validator is
//! built, not when it is first run.
//!
//! # Examples
//!
//! ```
//! use sluice::{rules, ConfigError, RuleSet, Validator};
//! use sluice::rules::Length;
//!
//! let err = Validator::new(RuleSet::new().attr("code", rules::length(Length::between(5, 2))))
//!     .unwrap_err();
//!
//! assert_eq!(
//!     err,
//!     ConfigError::InvalidLengthBounds { attr: "code".to_string(), min: 5, max: 2 }
//! );
//! assert_eq!(err.attr(), "code");
//! ```

/// A rule set that cannot be used to build a validator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// An attribute was declared with an empty rule list.
    #[error("attribute `{attr}` has no rules")]
    NoRules {
        /// Offending attribute
        attr: String,
    },

    /// The same attribute was declared more than once.
    #[error("attribute `{attr}` is declared more than once")]
    DuplicateAttribute {
        /// Offending attribute
        attr: String,
    },

    /// A length rule whose minimum exceeds its maximum.
    #[error("length rule on `{attr}` has min {min} greater than max {max}")]
    InvalidLengthBounds {
        /// Offending attribute
        attr: String,
        /// Configured minimum
        min: usize,
        /// Configured maximum
        max: usize,
    },

    /// A range rule with nothing to match against.
    #[error("range rule on `{attr}` has no permitted values")]
    EmptyRange {
        /// Offending attribute
        attr: String,
    },
}

impl ConfigError {
    /// The attribute the error refers to.
    pub fn attr(&self) -> &str {
        match self {
            ConfigError::NoRules { attr }
            | ConfigError::DuplicateAttribute { attr }
            | ConfigError::InvalidLengthBounds { attr, .. }
            | ConfigError::EmptyRange { attr } => attr,
        }
    }
}
