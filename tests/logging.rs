//! Validation under an installed tracing subscriber

#![cfg(feature = "tracing")]

use sluice::rules::{self, Length};
use sluice::{attrs, ModelValidation, RuleSet, Validator};

fn init_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

#[test]
fn validation_runs_with_subscriber() {
    init_subscriber();

    let validator = Validator::new(
        RuleSet::new()
            .attr("code", rules::length(Length::between(2, 5)))
            .attr("spouse", rules::valid()),
    )
    .unwrap();

    let result = validator.validate(&attrs! { "code" => "1" });
    assert_eq!(result.failed_attrs().collect::<Vec<_>>(), vec!["code"]);
}

#[test]
fn notifications_run_with_subscriber() {
    init_subscriber();

    let mut validation = ModelValidation::<()>::new(
        Validator::new(RuleSet::new().attr("code", rules::not_null())).unwrap(),
    );
    validation.bind_error(|_, _| {});

    let changed = attrs! { "code" => sluice::Value::Null };
    let result = validation.on_change_with(&(), &changed, &changed);
    assert!(!result.is_valid());
}
