//! Validator configuration

/// When instance rules are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum InstanceRules {
    /// Only by [`crate::Validator::validate`]
    #[default]
    FullOnly,
    /// By both [`crate::Validator::validate`] and
    /// [`crate::Validator::validate_attrs`]
    Always,
}

/// Options controlling how a [`crate::Validator`] evaluates its rule set.
///
/// Options are pure data. The defaults match the behaviour expected by the
/// model extension: partial validation of changed attributes does not run
/// whole-model instance rules.
///
/// # Examples
///
/// ```rust
/// use sluice::{InstanceRules, ValidatorOptions};
///
/// let options = ValidatorOptions::new().with_instance_rules(InstanceRules::Always);
/// assert_eq!(options.instance_rules(), InstanceRules::Always);
/// assert_eq!(ValidatorOptions::default().instance_rules(), InstanceRules::FullOnly);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ValidatorOptions {
    instance_rules: InstanceRules,
}

impl ValidatorOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose when instance rules run.
    pub fn with_instance_rules(mut self, instance_rules: InstanceRules) -> Self {
        self.instance_rules = instance_rules;
        self
    }

    /// When instance rules run.
    pub fn instance_rules(&self) -> InstanceRules {
        self.instance_rules
    }
}
