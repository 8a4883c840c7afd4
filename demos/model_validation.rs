//! Model validation example - error listeners on attribute changes
//!
//! A model owns its attributes and calls the validation extension after
//! each `set`. Listeners hear about invalid changes; the model keeps them.
//!
//! Run with: cargo run --example model_validation

use std::sync::Arc;

use sluice::prelude::*;

struct Product {
    attrs: Attributes,
    validation: Arc<ModelValidation<Product>>,
}

impl ModelRules for Product {
    fn attribute_rules() -> RuleSet {
        RuleSet::new()
            .attr(
                "code",
                rules::length(Length::between(2, 5)).with_message("Between 2 and 5"),
            )
            .attr("name", rules::not_blank())
            .attr(
                "discount",
                rules::check(|value, ctx| match (value, ctx.get("price")) {
                    (Value::Int(discount), Some(Value::Int(price))) => discount <= price,
                    _ => true,
                })
                .with_message("Discount exceeds price"),
            )
    }
}

impl AttributeSource for Product {
    fn attribute(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }
}

impl Product {
    fn new(validation: Arc<ModelValidation<Product>>) -> Self {
        Product {
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

fn main() {
    println!("=== Model Validation ===\n");

    let mut validation = match ModelValidation::<Product>::for_model() {
        Ok(validation) => validation,
        Err(err) => {
            eprintln!("bad rules: {}", err);
            return;
        }
    };
    validation.bind_error(|product, result| {
        let code = product.attrs.get("code").cloned().unwrap_or_default();
        println!("  error event on product {}: {}", code, result);
    });

    let mut product = Product::new(Arc::new(validation));

    println!("set code = \"AB12\"");
    product.set(attrs! { "code" => "AB12" });

    println!("set code = \"1\"");
    product.set(attrs! { "code" => "1" });

    // The discount rule reads the unchanged price from the model
    println!("set price = 100");
    product.set(attrs! { "price" => 100 });
    println!("set discount = 150");
    product.set(attrs! { "discount" => 150 });

    println!("\nFull check of the model:");
    let result = product.validation.validate_model(&product);
    for attr in result.results() {
        println!("  {}: {:?}", attr.attr, attr.messages().collect::<Vec<_>>());
    }
}
