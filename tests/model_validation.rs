//! End-to-end validation of model attributes: full and partial validation,
//! result ordering, and the model extension's error notifications.

use std::sync::{Arc, Mutex};

use sluice::prelude::*;
use sluice::{ConfigError, InstanceRules, INSTANCE_ATTR};

fn between_2_and_5() -> Rule {
    rules::length(Length::between(2, 5)).with_message("Between 2 and 5")
}

fn create_validator() -> Validator {
    Validator::new(
        RuleSet::new()
            .attr("code", between_2_and_5())
            .attr("name", between_2_and_5())
            .attr("description", rules::not_null().with_message("Not null")),
    )
    .unwrap()
}

#[test]
fn end_to_end_result_shape() {
    let result = create_validator().validate(&attrs! {
        "code" => "123",
        "name" => "1",
        "description" => Value::Null,
    });

    assert!(!result.is_valid());
    assert_eq!(
        result.results(),
        &[
            AttrResult {
                attr: "name".to_string(),
                path: "name".to_string(),
                errors: vec![RuleFailure::new("Between 2 and 5", "string-length")],
            },
            AttrResult {
                attr: "description".to_string(),
                path: "description".to_string(),
                errors: vec![RuleFailure::new("Not null", "not-null")],
            },
        ]
    );
}

#[test]
fn partial_and_full_agree_when_all_attributes_present() {
    let validator = create_validator();
    let inputs = [
        attrs! { "code" => "123", "name" => "1", "description" => Value::Null },
        attrs! { "code" => "1", "name" => "123456", "description" => "x" },
        attrs! { "code" => "abc", "name" => "abc", "description" => "x" },
    ];

    for input in &inputs {
        assert_eq!(validator.validate(input), validator.validate_attrs(input));
    }
}

#[test]
fn partial_ignores_attributes_not_in_input() {
    let validator = create_validator();
    // The model as a whole is invalid (description missing, name too short)
    let model = attrs! { "code" => "123", "name" => "1" };
    assert!(!validator.validate(&model).is_valid());

    // But only `code` changed, and it is fine
    let changed = attrs! { "code" => "123" };
    assert!(validator.validate_attrs(&changed).is_valid());
}

#[test]
fn results_follow_rule_set_order_not_input_order() {
    let validator = create_validator();
    let result = validator.validate_attrs(&attrs! {
        "description" => Value::Null,
        "code" => "1",
    });

    assert_eq!(
        result.failed_attrs().collect::<Vec<_>>(),
        vec!["code", "description"]
    );
}

#[test]
fn std_hash_map_as_input() {
    let mut input = std::collections::HashMap::new();
    input.insert("code".to_string(), Value::from(1));
    input.insert("name".to_string(), Value::from(12));

    let result = create_validator().validate_attrs(&input);
    assert_eq!(result.failed_attrs().collect::<Vec<_>>(), vec!["code"]);
}

#[test]
fn validator_is_shareable_across_threads() {
    let validator = create_validator();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let validator = validator.clone();
            std::thread::spawn(move || {
                let code = "x".repeat(i + 1);
                validator.validate_attrs(&attrs! { "code" => code }).is_valid()
            })
        })
        .collect();

    let outcomes: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outcomes, vec![false, true, true, true]);
}

#[test]
fn configuration_errors_surface_at_construction() {
    let err = Validator::new(RuleSet::new().attr("code", Vec::<Rule>::new())).unwrap_err();
    assert!(matches!(err, ConfigError::NoRules { .. }));
    assert_eq!(err.to_string(), "attribute `code` has no rules");
}

// A host model that owns its attributes and calls the extension after
// every mutation.
struct TestModel {
    attrs: Attributes,
    validation: Arc<ModelValidation<TestModel>>,
}

impl ModelRules for TestModel {
    fn attribute_rules() -> RuleSet {
        RuleSet::new()
            .attr("code", between_2_and_5())
            .instance(rules::check(|_, _| false))
    }
}

impl AttributeSource for TestModel {
    fn attribute(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }
}

impl TestModel {
    fn new(validation: Arc<ModelValidation<TestModel>>) -> Self {
        TestModel {
            attrs: Attributes::new(),
            validation,
        }
    }

    fn set(&mut self, changed: Attributes) -> ValidationResult {
        self.attrs.merge(changed.clone());
        let validation = Arc::clone(&self.validation);
        validation.on_change(self, &changed)
    }
}

fn capturing_validation() -> (
    Arc<ModelValidation<TestModel>>,
    Arc<Mutex<Vec<ValidationResult>>>,
) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&captured);
    let mut validation = ModelValidation::<TestModel>::for_model().unwrap();
    validation.bind_error(move |_, result| sink.lock().unwrap().push(result.clone()));
    (Arc::new(validation), captured)
}

#[test]
fn model_triggers_error_if_invalid_attribute_set() {
    let (validation, captured) = capturing_validation();
    let mut model = TestModel::new(validation);

    model.set(attrs! { "code" => "1" });

    let expected = ValidationResult::from_results(vec![AttrResult::new(
        "code",
        vec![RuleFailure::new("Between 2 and 5", "string-length")],
    )]);
    assert_eq!(*captured.lock().unwrap(), vec![expected]);
}

#[test]
fn model_does_not_trigger_error_if_valid_attribute_set() {
    let (validation, captured) = capturing_validation();
    let mut model = TestModel::new(validation);

    let result = model.set(attrs! { "code" => "123" });

    assert!(result.is_valid());
    assert!(captured.lock().unwrap().is_empty());
}

#[test]
fn full_model_validation_includes_instance_rules() {
    let (validation, _) = capturing_validation();
    let mut model = TestModel::new(Arc::clone(&validation));
    model.set(attrs! { "code" => "123" });

    let result = validation.validate_model(&model);
    assert_eq!(result.failed_attrs().collect::<Vec<_>>(), vec![INSTANCE_ATTR]);
}

#[test]
fn instance_rules_on_partial_when_configured() {
    let validator = Validator::with_options(
        TestModel::attribute_rules(),
        ValidatorOptions::new().with_instance_rules(InstanceRules::Always),
    )
    .unwrap();

    let result = validator.validate_attrs(&attrs! { "code" => "123" });
    assert_eq!(result.failed_attrs().collect::<Vec<_>>(), vec![INSTANCE_ATTR]);
}
