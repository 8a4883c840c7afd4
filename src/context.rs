//! Evaluation context passed to every rule
//!
//! A [`ValidationContext`] tells a rule which attribute it is checking, in
//! which mode the validator is running, and gives read access to the rest of
//! the input. Custom predicates use it for checks that need more than the
//! single value under test.
//!
//! # Examples
//!
//! ```
//! use sluice::{attrs, rules, RuleSet, Validator};
//!
//! // Passwords must match the confirmation field from the same input
//! let validator = Validator::new(RuleSet::new().attr(
//!     "confirm",
//!     rules::check(|value, ctx| ctx.get("password") == Some(value))
//!         .with_message("Passwords do not match"),
//! ))
//! .unwrap();
//!
//! let result = validator.validate(&attrs! { "password" => "a", "confirm" => "b" });
//! assert!(!result.is_valid());
//! ```

use std::fmt;

use crate::attributes::AttributeSource;
use crate::value::Value;

/// Which validator entry point produced an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Every declared attribute is checked
    Full,
    /// Only the attributes present in the input are checked
    Partial,
}

/// Context available to a rule while it evaluates one value.
#[derive(Clone, Copy)]
pub struct ValidationContext<'a> {
    attr: &'a str,
    path: &'a str,
    mode: Mode,
    source: &'a dyn AttributeSource,
}

impl<'a> ValidationContext<'a> {
    pub(crate) fn new(
        attr: &'a str,
        path: &'a str,
        mode: Mode,
        source: &'a dyn AttributeSource,
    ) -> Self {
        ValidationContext {
            attr,
            path,
            mode,
            source,
        }
    }

    /// Name of the attribute being validated.
    pub fn attr(&self) -> &'a str {
        self.attr
    }

    /// Path of the attribute being validated (currently equal to `attr`).
    pub fn path(&self) -> &'a str {
        self.path
    }

    /// The validation mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Read another attribute of the model being validated.
    ///
    /// In partial mode this is the model passed to
    /// [`Validator::validate_attrs_in`](crate::Validator::validate_attrs_in),
    /// or only the changed attributes when validating through
    /// [`Validator::validate_attrs`](crate::Validator::validate_attrs).
    pub fn get(&self, name: &str) -> Option<&'a Value> {
        self.source.attribute(name)
    }

    /// The model being validated.
    pub fn attributes(&self) -> &'a dyn AttributeSource {
        self.source
    }
}

impl fmt::Debug for ValidationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationContext")
            .field("attr", &self.attr)
            .field("path", &self.path)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
