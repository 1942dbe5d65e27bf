//! Callback field rule

use serde_json::Value;

use crate::foundation::{FieldResult, Record, Rule, RuleError};

/// A rule whose validation logic is an injected function.
///
/// This is the general escape hatch: register a bare closure instead of
/// writing a dedicated rule type. The callback receives the raw value, the
/// whole record for cross-field checks, and the rule's key, and decides the
/// outcome itself.
///
/// The absent-field outcomes are independently configurable: both the
/// default (optional rule) and the missing (required rule) outcome may be
/// replaced with a full [`FieldResult`], allowing custom validity/message
/// pairings rather than assuming a valid/invalid dichotomy.
///
/// # Examples
///
/// ```
/// use fieldset::foundation::{FieldResult, Record, Rule};
/// use fieldset::rules::callback;
/// use serde_json::json;
///
/// let rule = callback("age", |value, _context, key| match value.as_u64() {
///     Some(age) if age >= 18 => FieldResult::valid(key, value.clone()),
///     Some(_) => FieldResult::invalid(key, value.clone(), "Must be 18 or older"),
///     None => FieldResult::invalid(key, value.clone(), "Age must be a number"),
/// });
///
/// let record = Record::new();
/// assert!(rule.validate(&json!(21), &record)?.is_valid());
/// assert!(!rule.validate(&json!(12), &record)?.is_valid());
/// # Ok::<(), fieldset::foundation::RuleError>(())
/// ```
pub struct CallbackRule<F>
where
    F: Fn(&Value, &Record, &str) -> FieldResult + Send + Sync,
{
    key: String,
    callback: F,
    required: bool,
    default: Option<FieldResult>,
    missing: Option<FieldResult>,
}

impl<F> CallbackRule<F>
where
    F: Fn(&Value, &Record, &str) -> FieldResult + Send + Sync,
{
    /// Creates a required callback rule for `key`.
    #[must_use]
    pub fn new(key: impl Into<String>, callback: F) -> Self {
        Self {
            key: key.into(),
            callback,
            required: true,
            default: None,
            missing: None,
        }
    }

    /// Marks the field as optional.
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Replaces the outcome used when the field is absent and optional.
    #[must_use]
    pub fn with_default_result(mut self, default: FieldResult) -> Self {
        self.default = Some(default);
        self
    }

    /// Replaces the outcome used when the field is absent and required.
    #[must_use]
    pub fn with_missing_result(mut self, missing: FieldResult) -> Self {
        self.missing = Some(missing);
        self
    }
}

impl<F> Rule for CallbackRule<F>
where
    F: Fn(&Value, &Record, &str) -> FieldResult + Send + Sync,
{
    fn key(&self) -> &str {
        &self.key
    }

    fn required(&self) -> bool {
        self.required
    }

    fn validate(&self, value: &Value, context: &Record) -> Result<FieldResult, RuleError> {
        Ok((self.callback)(value, context, &self.key))
    }

    fn default_result(&self) -> FieldResult {
        self.default
            .clone()
            .unwrap_or_else(|| FieldResult::valid(self.key.clone(), Value::Null))
    }

    fn missing_result(&self) -> FieldResult {
        self.missing
            .clone()
            .unwrap_or_else(|| FieldResult::missing(self.key.clone()))
    }
}

impl<F> std::fmt::Debug for CallbackRule<F>
where
    F: Fn(&Value, &Record, &str) -> FieldResult + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackRule")
            .field("key", &self.key)
            .field("required", &self.required)
            .field("callback", &"<function>")
            .finish_non_exhaustive()
    }
}

/// Creates a required [`CallbackRule`] for `key`.
#[must_use]
pub fn callback<F>(key: impl Into<String>, callback: F) -> CallbackRule<F>
where
    F: Fn(&Value, &Record, &str) -> FieldResult + Send + Sync,
{
    CallbackRule::new(key, callback)
}
