//! Per-field validation outcomes
//!
//! A [`FieldResult`] records the outcome of validating one field of a
//! record: the key it belongs to, whether the value passed, the resulting
//! value, and an optional human-readable message. Results are immutable and
//! constructed only through the named constructors.

use std::borrow::Cow;

use serde::Serialize;
use serde_json::Value;

use crate::foundation::error::RuleError;
use crate::foundation::result_set::ResultSet;

/// Canonical message used for missing required values.
pub const MISSING_MESSAGE: &str = "Missing required value";

// ============================================================================
// FIELD VALUE
// ============================================================================

/// The value carried by a [`FieldResult`].
///
/// Ordinary fields carry a JSON value (`Null` when the field was absent);
/// composite fields carry the [`ResultSet`] produced by a nested evaluation
/// pass. The closed enum replaces dynamic subclassing: a result either holds
/// a plain value or a nested set, and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A plain JSON value.
    Json(Value),
    /// The outcome collection of a nested evaluation pass.
    Nested(ResultSet),
}

impl FieldValue {
    /// Returns the plain JSON value, if this is not a nested outcome.
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Nested(_) => None,
        }
    }

    /// Returns the nested result set, if any.
    #[must_use]
    pub fn as_nested(&self) -> Option<&ResultSet> {
        match self {
            Self::Json(_) => None,
            Self::Nested(set) => Some(set),
        }
    }

    /// Returns true for a plain `Null` value.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Json(Value::Null))
    }

    /// Materializes the value as JSON.
    ///
    /// Nested outcomes flatten to the object of their per-field values.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Json(value) => value.clone(),
            Self::Nested(set) => Value::Object(set.values()),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl From<ResultSet> for FieldValue {
    fn from(set: ResultSet) -> Self {
        Self::Nested(set)
    }
}

// ============================================================================
// FIELD RESULT
// ============================================================================

/// The immutable outcome of validating a single field.
///
/// Identity is the (key, validity, value, message) quadruple; two results
/// compare equal iff all four match. There is no mutation after
/// construction, and construction happens only through the named
/// constructors below.
///
/// # Examples
///
/// ```
/// use fieldset::foundation::FieldResult;
/// use serde_json::json;
///
/// let ok = FieldResult::valid("title", json!("Rust in a nutshell"));
/// assert!(ok.is_valid());
/// assert!(ok.message().is_none());
///
/// let missing = FieldResult::missing("author");
/// assert!(!missing.is_valid());
/// assert_eq!(missing.message(), Some("Missing required value"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldResult {
    key: String,
    valid: bool,
    value: FieldValue,
    message: Option<Cow<'static, str>>,
}

impl FieldResult {
    /// Creates a valid outcome for `key` carrying `value`.
    ///
    /// Accepts a plain [`Value`] or a [`ResultSet`] (for nested outcomes).
    #[must_use]
    pub fn valid(key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self::build(key, true, value.into(), None)
    }

    /// Creates an invalid outcome for `key`, keeping the offending `value`
    /// and explaining the rejection with `message`.
    #[must_use]
    pub fn invalid(
        key: impl Into<String>,
        value: impl Into<FieldValue>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::build(key, false, value.into(), Some(message.into()))
    }

    /// Creates the outcome for a required field that was absent from the
    /// record, using the canonical [`MISSING_MESSAGE`].
    #[must_use]
    pub fn missing(key: impl Into<String>) -> Self {
        Self::missing_with_message(key, MISSING_MESSAGE)
    }

    /// Like [`FieldResult::missing`], with a custom message.
    #[must_use]
    pub fn missing_with_message(
        key: impl Into<String>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::build(key, false, FieldValue::Json(Value::Null), Some(message.into()))
    }

    /// Creates the outcome for a required nested field that was absent,
    /// composing an empty [`ResultSet`] so nested navigation stays total.
    #[must_use]
    pub fn missing_nested(key: impl Into<String>) -> Self {
        Self::build(
            key,
            false,
            FieldValue::Nested(ResultSet::new()),
            Some(Cow::Borrowed(MISSING_MESSAGE)),
        )
    }

    fn build(
        key: impl Into<String>,
        valid: bool,
        value: FieldValue,
        message: Option<Cow<'static, str>>,
    ) -> Self {
        let key = key.into();
        debug_assert!(!key.is_empty(), "field key must not be empty");
        Self {
            key,
            valid,
            value,
            message,
        }
    }

    /// The key of the field this outcome belongs to.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether the field passed validation.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The resulting value.
    #[must_use]
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Consumes the result, yielding its value.
    #[must_use]
    pub fn into_value(self) -> FieldValue {
        self.value
    }

    /// The explanation attached to an invalid outcome, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    // ------------------------------------------------------------------
    // Nested navigation
    // ------------------------------------------------------------------

    /// Returns the nested result set, if this outcome holds one.
    #[must_use]
    pub fn nested(&self) -> Option<&ResultSet> {
        self.value.as_nested()
    }

    /// Optional nested lookup: the result under `name` inside the nested
    /// set, or `None` when this outcome is not nested or `name` is absent.
    ///
    /// Use [`FieldResult::nested_result`] when absence should be an error.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldResult> {
        self.nested().and_then(|set| set.get(name))
    }

    /// Strict nested lookup.
    ///
    /// # Errors
    ///
    /// [`RuleError::NotNested`] when this outcome does not hold a nested
    /// set, [`RuleError::UnknownResult`] when the set lacks `name`.
    pub fn nested_result(&self, name: &str) -> Result<&FieldResult, RuleError> {
        let set = self
            .nested()
            .ok_or_else(|| RuleError::not_nested(&self.key))?;
        set.get_result(name)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn valid_carries_value_and_no_message() {
        let result = FieldResult::valid("first", json!("string"));
        assert_eq!(result.key(), "first");
        assert!(result.is_valid());
        assert_eq!(result.value().as_json(), Some(&json!("string")));
        assert_eq!(result.message(), None);
    }

    #[test]
    fn invalid_keeps_the_offending_value() {
        let result = FieldResult::invalid("age", json!(-3), "Age must be non-negative");
        assert!(!result.is_valid());
        assert_eq!(result.value().as_json(), Some(&json!(-3)));
        assert_eq!(result.message(), Some("Age must be non-negative"));
    }

    #[test]
    fn missing_defaults_to_canonical_message_and_null() {
        let result = FieldResult::missing("third");
        assert!(!result.is_valid());
        assert!(result.value().is_null());
        assert_eq!(result.message(), Some(MISSING_MESSAGE));
    }

    #[test]
    fn missing_message_is_overridable() {
        let result = FieldResult::missing_with_message("third", "Please provide a value");
        assert_eq!(result.message(), Some("Please provide a value"));
    }

    #[test]
    fn missing_nested_composes_an_empty_set() {
        let result = FieldResult::missing_nested("author");
        let set = result.nested().unwrap();
        assert!(set.is_empty());
        assert_eq!(result.message(), Some(MISSING_MESSAGE));
    }

    #[test]
    fn structural_equality_compares_all_fields() {
        let a = FieldResult::valid("first", json!(1));
        let b = FieldResult::valid("first", json!(1));
        let c = FieldResult::valid("first", json!(2));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn nested_lookup_on_plain_value_is_none() {
        let result = FieldResult::valid("first", json!("string"));
        assert!(result.nested().is_none());
        assert!(result.get("anything").is_none());
    }

    #[test]
    fn strict_nested_lookup_on_plain_value_errors() {
        let result = FieldResult::valid("first", json!("string"));
        let err = result.nested_result("anything").unwrap_err();
        assert_eq!(err, RuleError::not_nested("first"));
    }

    #[test]
    fn nested_values_flatten_to_an_object() {
        let mut set = ResultSet::new();
        set.add(FieldResult::valid("name", json!("Alice"))).unwrap();
        let result = FieldResult::valid("author", set);
        assert_eq!(result.value().to_value(), json!({"name": "Alice"}));
    }
}
