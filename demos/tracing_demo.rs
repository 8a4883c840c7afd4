//! Demonstrates tracing integration with validation
//!
//! Run with: cargo run --example tracing_demo --features tracing

use sluice::prelude::*;

fn main() {
    // Set up tracing subscriber
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    tracing::info!("Starting tracing demo");

    // Building a validator logs its shape; the nested placeholder warns
    let validator = match Validator::new(
        RuleSet::new()
            .attr("code", rules::length(Length::between(2, 5)))
            .attr("gender", rules::range(Range::of(["male", "female"])))
            .attr("spouse", rules::valid()),
    ) {
        Ok(validator) => validator,
        Err(err) => {
            tracing::error!("Invalid rules: {}", err);
            return;
        }
    };

    // Each failing rule is traced, then the outcome is logged
    let result = validator.validate(&attrs! { "code" => "1", "gender" => "other" });
    tracing::info!(valid = result.is_valid(), "Full validation: {}", result);

    let result = validator.validate_attrs(&attrs! { "code" => "123" });
    tracing::info!(valid = result.is_valid(), "Partial validation done");
}
