//! Testing utilities
//!
//! Assertion macros for [`ValidationResult`](crate::ValidationResult)s and,
//! with the `proptest` feature, strategies for generating attribute values.
//!
//! # Examples
//!
//! ```rust
//! use sluice::{assert_invalid, assert_messages, assert_valid, attrs, rules, RuleSet, Validator, Value};
//!
//! let validator = Validator::new(RuleSet::new().attr("name", rules::not_null())).unwrap();
//!
//! assert_valid!(validator.validate(&attrs! { "name" => "Dave" }));
//! assert_invalid!(validator.validate(&attrs! { "name" => Value::Null }));
//! assert_messages!(
//!     validator.validate(&attrs! { "name" => Value::Null }),
//!     ["Please supply a value"]
//! );
//! ```

/// Assert that a validation result is valid.
///
/// Panics with the full result if it is not.
#[macro_export]
macro_rules! assert_valid {
    ($result:expr) => {{
        let result: $crate::ValidationResult = $result;
        if !result.is_valid() {
            panic!("Expected valid result, got: {}", result);
        }
    }};
}

/// Assert that a validation result is invalid.
#[macro_export]
macro_rules! assert_invalid {
    ($result:expr) => {{
        let result: $crate::ValidationResult = $result;
        if result.is_valid() {
            panic!("Expected invalid result, got valid");
        }
    }};
}

/// Assert that a result failed on exactly one attribute with these messages.
#[macro_export]
macro_rules! assert_messages {
    ($result:expr, [$($message:expr),* $(,)?]) => {{
        let result: $crate::ValidationResult = $result;
        let expected: ::std::vec::Vec<&str> = ::std::vec![$($message),*];
        match result.results() {
            [only] => {
                let actual: ::std::vec::Vec<&str> = only.messages().collect();
                assert_eq!(actual, expected);
            }
            _ => panic!(
                "Expected one invalid attribute with messages {:?}, got: {}",
                expected, result
            ),
        }
    }};
}

#[cfg(feature = "proptest")]
pub use strategies::*;

#[cfg(feature = "proptest")]
mod strategies {
    use proptest::prelude::*;

    use crate::value::Value;
    use crate::Attributes;

    /// Strategy producing scalar values (no lists or objects).
    pub fn scalar_value() -> BoxedStrategy<Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::Int),
            (-1.0e6..1.0e6f64).prop_map(Value::Float),
            "\\PC{0,12}".prop_map(Value::Text),
        ]
        .boxed()
    }

    /// Strategy producing attribute maps over the given names, each name
    /// independently present or absent.
    pub fn attributes_over(names: &'static [&'static str]) -> BoxedStrategy<Attributes> {
        prop::collection::vec(prop::option::of(scalar_value()), names.len())
            .prop_map(move |values| {
                names
                    .iter()
                    .zip(values)
                    .filter_map(|(name, value)| value.map(|v| (*name, v)))
                    .collect::<Attributes>()
            })
            .boxed()
    }

    impl Arbitrary for Value {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            scalar_value()
        }
    }
}
