//! Model validation extension
//!
//! Binds a [`Validator`] to a host model's mutation lifecycle. The host keeps
//! ownership of attribute storage and change tracking; after each mutation it
//! hands the changed attributes to [`ModelValidation::on_change`], which
//! validates exactly those attributes and notifies the registered "error"
//! listeners with `(model, result)` when the result is invalid. Rules read
//! the rest of the model, including unchanged attributes, through their
//! context.
//!
//! The extension only reports. Whether an invalid mutation is kept, reverted
//! or blocked is the host's decision.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use sluice::rules::{self, Length};
//! use sluice::{attrs, AttributeSource, Attributes, ModelRules, ModelValidation, RuleSet, Value};
//!
//! struct Product {
//!     attrs: Attributes,
//! }
//!
//! impl AttributeSource for Product {
//!     fn attribute(&self, name: &str) -> Option<&Value> {
//!         self.attrs.get(name)
//!     }
//! }
//!
//! impl ModelRules for Product {
//!     fn attribute_rules() -> RuleSet {
//!         RuleSet::new().attr("code", rules::length(Length::between(2, 5)))
//!     }
//! }
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let sink = Arc::clone(&seen);
//!
//! let mut validation = ModelValidation::<Product>::for_model().unwrap();
//! validation.bind_error(move |_product, result| {
//!     sink.lock().unwrap().push(result.clone());
//! });
//!
//! let mut product = Product { attrs: Attributes::new() };
//! let changed = attrs! { "code" => "1" };
//! product.attrs.merge(changed.clone());
//! validation.on_change(&product, &changed);
//!
//! assert_eq!(seen.lock().unwrap().len(), 1);
//! ```

use std::fmt;

use crate::attributes::AttributeSource;
use crate::error::ConfigError;
use crate::options::ValidatorOptions;
use crate::result::ValidationResult;
use crate::rule_set::RuleSet;
use crate::validator::Validator;

/// Declarative rules attached to a model type.
pub trait ModelRules {
    /// Per-attribute rules, optionally with instance rules.
    fn attribute_rules() -> RuleSet;

    /// Options for the model's validator.
    fn validator_options() -> ValidatorOptions {
        ValidatorOptions::default()
    }
}

type ErrorListener<M> = Box<dyn Fn(&M, &ValidationResult) + Send + Sync>;

/// Validation bound to a model type `M`.
pub struct ModelValidation<M> {
    validator: Validator,
    listeners: Vec<ErrorListener<M>>,
}

impl<M> ModelValidation<M> {
    /// Wrap an existing validator.
    pub fn new(validator: Validator) -> Self {
        ModelValidation {
            validator,
            listeners: Vec::new(),
        }
    }

    /// Build from the rules `M` declares.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the declared rules are unusable.
    pub fn for_model() -> Result<Self, ConfigError>
    where
        M: ModelRules,
    {
        let validator = Validator::with_options(M::attribute_rules(), M::validator_options())?;
        Ok(Self::new(validator))
    }

    /// The underlying validator.
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Register a listener for invalid mutations.
    ///
    /// Listeners are called in registration order.
    pub fn bind_error<F>(&mut self, listener: F)
    where
        F: Fn(&M, &ValidationResult) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Mutation hook: validate the attributes that just changed.
    ///
    /// `model` must already hold the new values; rules read unchanged
    /// attributes from it. Listeners are notified only when the result is
    /// invalid. The result is returned either way so the host can act on it.
    pub fn on_change<S: AttributeSource>(&self, model: &M, changed: &S) -> ValidationResult
    where
        M: AttributeSource,
    {
        self.on_change_with(model, changed, model)
    }

    /// Mutation hook for models that do not expose their attributes
    /// directly: rules read the model state from `current`.
    pub fn on_change_with<S, T>(&self, model: &M, changed: &S, current: &T) -> ValidationResult
    where
        S: AttributeSource,
        T: AttributeSource,
    {
        let result = self.validator.validate_attrs_in(changed, current);
        self.notify(model, &result);
        result
    }

    fn notify(&self, model: &M, result: &ValidationResult) {
        if !result.is_valid() {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                listeners = self.listeners.len(),
                failed_attrs = result.results().len(),
                "notifying error listeners"
            );
            for listener in &self.listeners {
                listener(model, result);
            }
        }
    }

    /// Validate the whole model without notifying listeners.
    pub fn validate_model(&self, model: &M) -> ValidationResult
    where
        M: AttributeSource,
    {
        self.validator.validate(model)
    }
}

impl<M> fmt::Debug for ModelValidation<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelValidation")
            .field("validator", &self.validator)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
