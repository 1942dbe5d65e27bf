//! The rule capability
//!
//! [`Rule`] is the contract every field validator satisfies. Implement it
//! directly for bespoke validators, or use the built-ins in
//! [`crate::rules`] — [`CallbackRule`](crate::rules::CallbackRule) covers
//! most one-off cases without a dedicated type.

use serde_json::{Map, Value};

use crate::foundation::error::RuleError;
use crate::foundation::result::FieldResult;

/// A flat record mapping non-empty field keys to arbitrary JSON values.
///
/// This is both the input to an evaluation pass and the context handed to
/// each rule, so rules can consult sibling fields.
pub type Record = Map<String, Value>;

/// The capability every field validator provides.
///
/// A rule governs exactly one key of the record. During an evaluation pass
/// the orchestrator consults the record once per rule:
///
/// - key present → [`Rule::validate`] with the value and the whole record;
/// - key absent, rule required → the missing-value outcome (by default
///   [`Rule::missing_result`], overridable per rule set);
/// - key absent, rule optional → [`Rule::default_result`].
///
/// Rejected *data* is never an error: `validate` reports it as an `Ok`
/// carrying an invalid [`FieldResult`]. The `Err` channel exists so that
/// composite rules (which run a nested rule set) can propagate engine
/// misconfiguration.
pub trait Rule: Send + Sync {
    /// The record key this rule governs. Non-empty, stable for the
    /// lifetime of the rule.
    fn key(&self) -> &str;

    /// Whether absence of the field is an error.
    fn required(&self) -> bool;

    /// Produces the outcome for a present value.
    fn validate(&self, value: &Value, context: &Record) -> Result<FieldResult, RuleError>;

    /// Outcome used when the field is absent and the rule is not required.
    ///
    /// Defaults to a valid `Null` at this rule's key.
    fn default_result(&self) -> FieldResult {
        FieldResult::valid(self.key().to_owned(), Value::Null)
    }

    /// Outcome used when the field is absent and the rule is required.
    ///
    /// Defaults to the canonical missing-value outcome at this rule's key.
    fn missing_result(&self) -> FieldResult {
        FieldResult::missing(self.key().to_owned())
    }
}
