//! Validating a flat signup record.
//!
//! Run with: `cargo run --example basic_usage`

use fieldset::prelude::*;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let rules = RuleSet::builder()
        .rule(callback("username", |value, _context, key| {
            match value.as_str() {
                Some(s) if s.len() >= 3 => FieldResult::valid(key, value.clone()),
                _ => FieldResult::invalid(
                    key,
                    value.clone(),
                    "Username must be at least 3 characters",
                ),
            }
        }))
        .rule(callback("password_confirm", |value, context, key| {
            if context.get("password") == Some(value) {
                FieldResult::valid(key, value.clone())
            } else {
                FieldResult::invalid(key, value.clone(), "Passwords do not match")
            }
        }))
        .rule(boolean("subscribed").optional())
        .build()?;

    let submission = json!({
        "username": "ada",
        "password": "correct horse",
        "password_confirm": "correct hors",
    });
    let results = rules.validate(submission.as_object().unwrap())?;

    if results.is_valid() {
        println!("accepted: {}", serde_json::to_string_pretty(&results.values())?);
    } else {
        println!("rejected:");
        for (key, message) in results.messages() {
            println!("  {key}: {message}");
        }
    }

    Ok(())
}
