//! Form validation example - every failing field reported at once
//!
//! Run with: cargo run --example form_validation

use sluice::prelude::*;

fn signup_rules() -> RuleSet {
    RuleSet::new()
        .attr(
            "email",
            [
                rules::not_blank().with_message("Email is required"),
                rules::check(|value, _ctx| value.as_str().is_some_and(|s| s.contains('@')))
                    .with_message("Must contain @")
                    .with_key("email-format"),
            ],
        )
        .attr(
            "password",
            rules::length(Length::min(8)).with_message("Password must be at least 8 characters"),
        )
        .attr(
            "confirm",
            rules::check(|value, ctx| ctx.get("password") == Some(value))
                .with_message("Passwords do not match")
                .with_key("password-mismatch"),
        )
        .attr(
            "plan",
            rules::range(Range::of(["free", "pro"]).ignore_case())
                .with_message("Choose free or pro"),
        )
}

fn report(result: &ValidationResult) {
    if result.is_valid() {
        println!("✓ valid");
        return;
    }
    for attr in result.results() {
        for error in &attr.errors {
            println!("✗ {}: {} [{}]", attr.attr, error.message, error.key);
        }
    }
}

fn main() {
    println!("=== Form Validation ===\n");

    let validator = match Validator::new(signup_rules()) {
        Ok(validator) => validator,
        Err(err) => {
            eprintln!("bad rules: {}", err);
            return;
        }
    };

    // Test 1: All valid
    println!("Test 1: Valid form");
    let form = attrs! {
        "email" => "user@example.com",
        "password" => "secure123",
        "confirm" => "secure123",
        "plan" => "Pro",
    };
    report(&validator.validate(&form));

    println!("\n---\n");

    // Test 2: Several fields wrong, all reported in declaration order
    println!("Test 2: Multiple validation errors");
    let form = attrs! {
        "email" => "not-an-email",
        "password" => "weak",
        "confirm" => "different",
    };
    report(&validator.validate(&form));

    println!("\n---\n");

    // Test 3: Only the fields the user touched
    println!("Test 3: Validating a single edited field");
    let edited = attrs! { "plan" => "enterprise" };
    report(&validator.validate_attrs(&edited));

    println!("\n---\n");

    // Test 4: Numbers are measured by their text form
    println!("Test 4: Numeric password");
    report(&validator.validate_attr("password", &Value::from(12345)));
}
