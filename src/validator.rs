//! The validator: evaluation and aggregation
//!
//! A [`Validator`] evaluates a [`RuleSet`] against attribute values and
//! aggregates every failure into one [`ValidationResult`]. It never stops at
//! the first failure and never mutates its input.
//!
//! Two entry points share one algorithm:
//!
//! - [`Validator::validate`] checks every declared attribute. Attributes
//!   missing from the input are checked as null.
//! - [`Validator::validate_attrs`] checks only the declared attributes whose
//!   keys are present in the input, which is how a model validates the
//!   attributes a mutation just changed.
//!
//! [`Validator::validate_attrs_in`] is the partial form a model uses: it
//! checks the changed attributes while rules read the whole model through
//! their [`ValidationContext`].
//!
//! # Example
//!
//! ```rust
//! use sluice::rules::{self, Length};
//! use sluice::{attrs, AttrResult, RuleFailure, RuleSet, Validator, Value};
//!
//! let validator = Validator::new(
//!     RuleSet::new()
//!         .attr("code", rules::length(Length::between(2, 5)).with_message("Between 2 and 5"))
//!         .attr("name", rules::length(Length::between(2, 5)).with_message("Between 2 and 5"))
//!         .attr("description", rules::not_null().with_message("Not null")),
//! )
//! .unwrap();
//!
//! let result = validator.validate_attrs(&attrs! {
//!     "code" => "123",
//!     "name" => "1",
//!     "description" => Value::Null,
//! });
//!
//! assert!(!result.is_valid());
//! assert_eq!(
//!     result.results(),
//!     &[
//!         AttrResult::new("name", vec![RuleFailure::new("Between 2 and 5", "string-length")]),
//!         AttrResult::new("description", vec![RuleFailure::new("Not null", "not-null")]),
//!     ]
//! );
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::attributes::AttributeSource;
use crate::context::{Mode, ValidationContext};
use crate::error::ConfigError;
use crate::options::{InstanceRules, ValidatorOptions};
use crate::result::{AttrResult, RuleFailure, ValidationResult};
use crate::rule::{Length, Rule, RuleKind};
use crate::rule_set::{RuleSet, INSTANCE_ATTR};
use crate::value::Value;

static NULL: Value = Value::Null;

/// Evaluates a rule set against attribute values.
///
/// Validators are immutable once built and cheap to clone; clones share the
/// same rule set.
#[derive(Debug, Clone)]
pub struct Validator {
    rules: Arc<RuleSet>,
    options: ValidatorOptions,
}

impl Validator {
    /// Build a validator with default options.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if an attribute has no rules or is declared
    /// twice, if a length rule has `min > max`, or if a range rule permits no
    /// values.
    pub fn new(rules: RuleSet) -> Result<Self, ConfigError> {
        Self::with_options(rules, ValidatorOptions::default())
    }

    /// Build a validator with explicit options.
    ///
    /// # Errors
    ///
    /// See [`Validator::new`].
    pub fn with_options(rules: RuleSet, options: ValidatorOptions) -> Result<Self, ConfigError> {
        check_rule_set(&rules)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            attrs = rules.len(),
            instance_rules = rules.instance_rules().len(),
            options = ?options,
            "built validator"
        );

        Ok(Validator {
            rules: Arc::new(rules),
            options,
        })
    }

    /// The rule set this validator evaluates.
    pub fn rule_set(&self) -> &RuleSet {
        &self.rules
    }

    /// The options this validator was built with.
    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Declared attribute names in order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.rules.names()
    }

    /// Validate every declared attribute, treating absent ones as null.
    ///
    /// Instance rules always run.
    pub fn validate<S: AttributeSource>(&self, attributes: &S) -> ValidationResult {
        self.run(attributes, attributes, Mode::Full)
    }

    /// Validate only the declared attributes present as keys in `changed`.
    ///
    /// A key holding an explicit null counts as present. Keys with no
    /// declared rules are ignored. Instance rules run only when the
    /// validator was built with [`InstanceRules::Always`].
    pub fn validate_attrs<S: AttributeSource>(&self, changed: &S) -> ValidationResult {
        self.run(changed, changed, Mode::Partial)
    }

    /// Validate the attributes present in `changed`, with rules reading
    /// other attributes from `model`.
    ///
    /// Which attributes are checked, and their values, come from `changed`.
    /// [`ValidationContext::get`] and instance rules see `model`, which
    /// should already hold the new values.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sluice::{attrs, rules, RuleSet, Validator};
    ///
    /// let validator = Validator::new(RuleSet::new().attr(
    ///     "confirm",
    ///     rules::check(|value, ctx| ctx.get("password") == Some(value)),
    /// ))
    /// .unwrap();
    ///
    /// let model = attrs! { "password" => "secret", "confirm" => "secret" };
    /// let changed = attrs! { "confirm" => "secret" };
    ///
    /// assert!(validator.validate_attrs_in(&changed, &model).is_valid());
    /// assert!(!validator.validate_attrs(&changed).is_valid());
    /// ```
    pub fn validate_attrs_in<S, T>(&self, changed: &S, model: &T) -> ValidationResult
    where
        S: AttributeSource,
        T: AttributeSource,
    {
        self.run(changed, model, Mode::Partial)
    }

    /// Validate a single value against the rules declared for `name`.
    ///
    /// Returns a valid result if `name` has no rules.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sluice::{rules, RuleSet, Validator, Value};
    ///
    /// let validator = Validator::new(RuleSet::new().attr("name", rules::not_null())).unwrap();
    /// assert!(!validator.validate_attr("name", &Value::Null).is_valid());
    /// assert!(validator.validate_attr("other", &Value::Null).is_valid());
    /// ```
    pub fn validate_attr(&self, name: &str, value: &Value) -> ValidationResult {
        self.validate_attrs(&Single { name, value })
    }

    fn run(
        &self,
        values: &dyn AttributeSource,
        source: &dyn AttributeSource,
        mode: Mode,
    ) -> ValidationResult {
        let mut results = Vec::new();

        for attr in self.rules.attrs() {
            let name = attr.name();
            let value = match (mode, values.attribute(name)) {
                (_, Some(value)) => value,
                (Mode::Full, None) => &NULL,
                (Mode::Partial, None) => continue,
            };
            let ctx = ValidationContext::new(name, name, mode, source);
            if let Some(result) = evaluate(attr.rules(), value, &ctx) {
                results.push(result);
            }
        }

        let run_instance = match mode {
            Mode::Full => true,
            Mode::Partial => self.options.instance_rules() == InstanceRules::Always,
        };
        if run_instance && !self.rules.instance_rules().is_empty() {
            let ctx = ValidationContext::new(INSTANCE_ATTR, INSTANCE_ATTR, mode, source);
            if let Some(result) = evaluate(self.rules.instance_rules(), &NULL, &ctx) {
                results.push(result);
            }
        }

        let result = ValidationResult::from_results(results);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            mode = ?mode,
            valid = result.is_valid(),
            failed_attrs = result.results().len(),
            "validated"
        );

        result
    }
}

/// Run `rules` in order, collecting one failure per failing rule.
fn evaluate(rules: &[Rule], value: &Value, ctx: &ValidationContext<'_>) -> Option<AttrResult> {
    let errors: Vec<RuleFailure> = rules
        .iter()
        .filter(|rule| !rule.evaluate(value, ctx))
        .map(|rule| {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                attr = ctx.attr(),
                key = rule.key(),
                value_kind = value.kind(),
                "rule failed"
            );
            RuleFailure::new(rule.message(), rule.key())
        })
        .collect();

    if errors.is_empty() {
        None
    } else {
        Some(AttrResult::new(ctx.path(), errors))
    }
}

fn check_rule_set(rules: &RuleSet) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    if !rules.instance_rules().is_empty() {
        seen.insert(INSTANCE_ATTR);
    }

    for attr in rules.attrs() {
        let name = attr.name();
        if !seen.insert(name) {
            return Err(ConfigError::DuplicateAttribute {
                attr: name.to_string(),
            });
        }
        if attr.rules().is_empty() {
            return Err(ConfigError::NoRules {
                attr: name.to_string(),
            });
        }
        for rule in attr.rules() {
            check_rule(name, rule)?;
        }
    }

    for rule in rules.instance_rules() {
        check_rule(INSTANCE_ATTR, rule)?;
    }
    Ok(())
}

fn check_rule(attr: &str, rule: &Rule) -> Result<(), ConfigError> {
    match rule.kind() {
        RuleKind::Length(Length {
            min: Some(min),
            max: Some(max),
            ..
        }) if min > max => Err(ConfigError::InvalidLengthBounds {
            attr: attr.to_string(),
            min: *min,
            max: *max,
        }),
        RuleKind::Range(range) if range.values.is_empty() => Err(ConfigError::EmptyRange {
            attr: attr.to_string(),
        }),
        RuleKind::Nested => {
            #[cfg(feature = "tracing")]
            tracing::warn!(attr, "nested validation is not implemented; rule always passes");
            Ok(())
        }
        _ => Ok(()),
    }
}

/// A one-attribute source for [`Validator::validate_attr`].
struct Single<'a> {
    name: &'a str,
    value: &'a Value,
}

impl AttributeSource for Single<'_> {
    fn attribute(&self, name: &str) -> Option<&Value> {
        (name == self.name).then_some(self.value)
    }
}
