//! Ordered attribute rule sets
//!
//! A [`RuleSet`] maps attribute names to one rule or an ordered list of
//! rules. Declaration order matters: validation results list attributes, and
//! the failures within each attribute, in the order they were declared here.
//!
//! Rule sets are plain data. Their invariants (no empty rule lists, no
//! duplicate attributes, sane rule configuration) are checked when a
//! [`crate::Validator`] is built from them.

use crate::rule::Rule;

/// Name of the pseudo-attribute under which instance-rule failures are
/// reported.
pub const INSTANCE_ATTR: &str = "$instance";

/// Conversion into an ordered list of rules.
///
/// Lets [`RuleSet::attr`] accept a single rule, an array or a `Vec`.
pub trait IntoRules {
    /// Convert into a list of rules, preserving order.
    fn into_rules(self) -> Vec<Rule>;
}

impl IntoRules for Rule {
    fn into_rules(self) -> Vec<Rule> {
        vec![self]
    }
}

impl IntoRules for Vec<Rule> {
    fn into_rules(self) -> Vec<Rule> {
        self
    }
}

impl<const N: usize> IntoRules for [Rule; N] {
    fn into_rules(self) -> Vec<Rule> {
        self.into()
    }
}

/// The rules declared for one attribute.
#[derive(Debug, Clone)]
pub struct AttrRules {
    name: String,
    rules: Vec<Rule>,
}

impl AttrRules {
    /// Attribute name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

/// Declarative mapping from attribute names to rules.
///
/// # Example
///
/// ```rust
/// use sluice::rules::{self, Length};
/// use sluice::RuleSet;
///
/// let rules = RuleSet::new()
///     .attr("code", rules::length(Length::between(2, 5)))
///     .attr("name", [rules::not_blank(), rules::length(Length::max(50))])
///     .instance(rules::check(|_, ctx| ctx.get("code").is_some()));
///
/// assert_eq!(rules.names().collect::<Vec<_>>(), vec!["code", "name"]);
/// assert_eq!(rules.instance_rules().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    attrs: Vec<AttrRules>,
    instance: Vec<Rule>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare rules for an attribute.
    pub fn attr(mut self, name: impl Into<String>, rules: impl IntoRules) -> Self {
        self.attrs.push(AttrRules {
            name: name.into(),
            rules: rules.into_rules(),
        });
        self
    }

    /// Add rules evaluated against the model as a whole.
    ///
    /// They receive [`crate::Value::Null`] as their value and read the model
    /// through the [`crate::ValidationContext`].
    pub fn instance(mut self, rules: impl IntoRules) -> Self {
        self.instance.extend(rules.into_rules());
        self
    }

    /// Declared attributes in order.
    pub fn attrs(&self) -> &[AttrRules] {
        &self.attrs
    }

    /// Declared attribute names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attrs.iter().map(AttrRules::name)
    }

    /// Rules for a single attribute.
    pub fn get(&self, name: &str) -> Option<&[Rule]> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(AttrRules::rules)
    }

    /// Instance rules in declaration order.
    pub fn instance_rules(&self) -> &[Rule] {
        &self.instance
    }

    /// Number of declared attributes.
    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    /// Check if no attributes and no instance rules are declared.
    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty() && self.instance.is_empty()
    }
}
