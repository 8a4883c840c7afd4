//! # Sluice
//!
//! > *Check what flows in before it reaches the pool*
//!
//! A Rust library for declarative validation of key-value model attributes.
//!
//! ## Philosophy
//!
//! **Sluice** keeps validation as data in, data out:
//! - Rules are immutable values built once from a small, fixed library
//! - A validator runs every rule and reports every failure, in declaration order
//! - Invalid data is a returned result, never an error or a panic
//!
//! ## Quick Example
//!
//! ```rust
//! use sluice::rules::{self, Length, Range};
//! use sluice::{attrs, RuleSet, Validator, Value};
//!
//! let validator = Validator::new(
//!     RuleSet::new()
//!         .attr("code", rules::length(Length::between(2, 5)).with_message("Between 2 and 5"))
//!         .attr("gender", rules::range(Range::of(["male", "female"]).ignore_case()))
//!         .attr("description", rules::not_null().with_message("Not null")),
//! )
//! .expect("rules are well formed");
//!
//! // Validate the whole model
//! let result = validator.validate(&attrs! { "code" => "1", "gender" => "MALE" });
//! assert!(!result.is_valid());
//! assert_eq!(result.failed_attrs().collect::<Vec<_>>(), vec!["code", "description"]);
//!
//! // Or only the attributes that just changed
//! let result = validator.validate_attrs(&attrs! { "code" => "123" });
//! assert!(result.is_valid());
//! ```
//!
//! ## Features
//!
//! - `serde`: serialize results as `{ isValid, results: [{ attr, path, errors }] }`
//!   and read attribute maps from JSON
//! - `tracing`: log validator construction and validation outcomes
//! - `proptest`: value strategies in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod attributes;
pub mod context;
pub mod error;
pub mod model;
pub mod options;
pub mod result;
pub mod rule;
pub mod rule_set;
pub mod rules;
pub mod testing;
pub mod validator;
pub mod value;

// Re-exports
pub use attributes::{AttributeSource, Attributes};
pub use context::{Mode, ValidationContext};
pub use error::ConfigError;
pub use model::{ModelRules, ModelValidation};
pub use options::{InstanceRules, ValidatorOptions};
pub use result::{AttrResult, RuleFailure, ValidationResult};
pub use rule::{Rule, RuleKind};
pub use rule_set::{IntoRules, RuleSet, INSTANCE_ATTR};
pub use validator::Validator;
pub use value::Value;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::attrs;
    pub use crate::rules::{self, Length, Range};
    pub use crate::{
        AttrResult, AttributeSource, Attributes, ModelRules, ModelValidation, Rule, RuleFailure,
        RuleSet, ValidationContext, ValidationResult, Validator,
        ValidatorOptions, Value,
    };
}
