//! Boolean field rule

use serde_json::Value;

use crate::foundation::{FieldResult, Record, Rule, RuleError};
use crate::rules::json_type_name;

/// Validates that a field holds a JSON boolean.
///
/// Required by default; when optional, the absent-field outcome carries the
/// configured default value (`false` unless overridden).
///
/// # Examples
///
/// ```
/// use fieldset::foundation::{Record, Rule};
/// use fieldset::rules::boolean;
/// use serde_json::json;
///
/// let rule = boolean("accepted");
/// let record = Record::new();
///
/// assert!(rule.validate(&json!(true), &record)?.is_valid());
/// assert!(!rule.validate(&json!("yes"), &record)?.is_valid());
/// # Ok::<(), fieldset::foundation::RuleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BooleanRule {
    key: String,
    required: bool,
    default: bool,
}

impl BooleanRule {
    /// Creates a required boolean rule for `key` with a `false` default.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            required: true,
            default: false,
        }
    }

    /// Marks the field as optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets the value used when the field is absent and not required.
    #[must_use]
    pub fn with_default(mut self, default: bool) -> Self {
        self.default = default;
        self
    }
}

impl Rule for BooleanRule {
    fn key(&self) -> &str {
        &self.key
    }

    fn required(&self) -> bool {
        self.required
    }

    fn validate(&self, value: &Value, _context: &Record) -> Result<FieldResult, RuleError> {
        Ok(match value {
            Value::Bool(flag) => FieldResult::valid(self.key.clone(), Value::Bool(*flag)),
            other => FieldResult::invalid(
                self.key.clone(),
                other.clone(),
                format!("Expected boolean value; received {}", json_type_name(other)),
            ),
        })
    }

    fn default_result(&self) -> FieldResult {
        FieldResult::valid(self.key.clone(), Value::Bool(self.default))
    }
}

/// Creates a required [`BooleanRule`] for `key`.
#[must_use]
pub fn boolean(key: impl Into<String>) -> BooleanRule {
    BooleanRule::new(key)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_both_boolean_values() {
        let rule = boolean("flag");
        let record = Record::new();
        for value in [json!(true), json!(false)] {
            let result = rule.validate(&value, &record).unwrap();
            assert!(result.is_valid());
            assert_eq!(result.value().as_json(), Some(&value));
        }
    }

    #[rstest]
    #[case(json!("true"), "string")]
    #[case(json!(1), "number")]
    #[case(json!(null), "null")]
    #[case(json!([true]), "array")]
    #[case(json!({}), "object")]
    fn rejects_non_booleans_naming_the_type(#[case] value: Value, #[case] type_name: &str) {
        let rule = boolean("flag");
        let result = rule.validate(&value, &Record::new()).unwrap();
        assert!(!result.is_valid());
        assert_eq!(
            result.message(),
            Some(format!("Expected boolean value; received {type_name}").as_str())
        );
    }

    #[test]
    fn default_result_carries_the_configured_default() {
        let rule = boolean("flag").optional().with_default(true);
        let result = rule.default_result();
        assert!(result.is_valid());
        assert_eq!(result.value().as_json(), Some(&json!(true)));
    }

    #[test]
    fn required_by_default() {
        assert!(boolean("flag").required());
        assert!(!boolean("flag").optional().required());
    }
}
