//! Nested record rule

use serde_json::Value;

use crate::foundation::{FieldResult, Record, Rule, RuleError};
use crate::rule_set::RuleSet;
use crate::rules::json_type_name;

/// Validates an object-valued field against an inner [`RuleSet`].
///
/// The produced outcome carries the inner evaluation's
/// [`ResultSet`](crate::foundation::ResultSet) as its value, and its
/// validity mirrors the inner set's. Inner results are reachable through
/// [`FieldResult::get`] and [`FieldResult::nested_result`]:
///
/// ```
/// use fieldset::rule_set::RuleSet;
/// use fieldset::rules::{boolean, nested};
/// use serde_json::json;
///
/// let mut prefs = RuleSet::new();
/// prefs.add(boolean("newsletter"))?;
///
/// let mut rules = RuleSet::new();
/// rules.add(nested("preferences", prefs))?;
///
/// let record = json!({"preferences": {"newsletter": true}});
/// let results = rules.validate(record.as_object().unwrap())?;
///
/// let newsletter = results.get_result("preferences")?.nested_result("newsletter")?;
/// assert!(newsletter.is_valid());
/// # Ok::<(), fieldset::foundation::RuleError>(())
/// ```
#[derive(Debug)]
pub struct NestedRule {
    key: String,
    required: bool,
    rules: RuleSet,
}

impl NestedRule {
    /// Creates a required nested rule for `key`, evaluating `rules` over
    /// the field's object value.
    #[must_use]
    pub fn new(key: impl Into<String>, rules: RuleSet) -> Self {
        Self {
            key: key.into(),
            required: true,
            rules,
        }
    }

    /// Marks the field as optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

impl Rule for NestedRule {
    fn key(&self) -> &str {
        &self.key
    }

    fn required(&self) -> bool {
        self.required
    }

    fn validate(&self, value: &Value, _context: &Record) -> Result<FieldResult, RuleError> {
        let Some(object) = value.as_object() else {
            return Ok(FieldResult::invalid(
                self.key.clone(),
                value.clone(),
                format!("Expected object value; received {}", json_type_name(value)),
            ));
        };

        let results = self.rules.validate(object)?;
        Ok(if results.is_valid() {
            FieldResult::valid(self.key.clone(), results)
        } else {
            FieldResult::invalid(
                self.key.clone(),
                results,
                "One or more nested fields failed validation",
            )
        })
    }

    fn missing_result(&self) -> FieldResult {
        FieldResult::missing_nested(self.key.clone())
    }
}

/// Creates a required [`NestedRule`] for `key`.
#[must_use]
pub fn nested(key: impl Into<String>, rules: RuleSet) -> NestedRule {
    NestedRule::new(key, rules)
}
