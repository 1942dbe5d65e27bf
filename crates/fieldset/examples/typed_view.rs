//! Wrapping validation output in a domain-specific view.
//!
//! `RuleSet::validate_into` converts the frozen result set into any type
//! implementing `From<ResultSet>`, so callers can expose named accessors
//! instead of string lookups.
//!
//! Run with: `cargo run --example typed_view`

use fieldset::prelude::*;
use serde_json::json;

struct ArticleForm {
    results: ResultSet,
}

impl ArticleForm {
    fn title(&self) -> &FieldResult {
        self.results.get_result("title").expect("title rule is registered")
    }

    fn published(&self) -> &FieldResult {
        self.results
            .get_result("published")
            .expect("published rule is registered")
    }
}

impl From<ResultSet> for ArticleForm {
    fn from(results: ResultSet) -> Self {
        Self { results }
    }
}

fn rules() -> Result<RuleSet, RuleError> {
    RuleSet::builder()
        .rule(callback("title", |value, _context, key| {
            match value.as_str() {
                Some(s) if !s.trim().is_empty() => FieldResult::valid(key, value.clone()),
                _ => FieldResult::invalid(key, value.clone(), "Title is required"),
            }
        }))
        .rule(boolean("published").optional())
        .build()
}

fn main() -> Result<(), RuleError> {
    let rules = rules()?;

    let submission = json!({"title": "Hello, world", "published": true});
    let form: ArticleForm = rules.validate_into(submission.as_object().unwrap())?;
    println!(
        "title={:?} published={:?}",
        form.title().value(),
        form.published().value()
    );

    // Seed the same view from trusted data, skipping validation.
    let stored = json!({"title": "Draft from the database"});
    let form: ArticleForm = rules.create_valid_result_set_into(stored.as_object().unwrap())?;
    println!(
        "loaded title={:?} published={:?}",
        form.title().value(),
        form.published().value()
    );

    Ok(())
}
