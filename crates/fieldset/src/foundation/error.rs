//! Error types for rule-set configuration and lifecycle misuse
//!
//! Every variant here signals a programming or configuration error, never a
//! data problem: a record that fails validation is reported in-band as an
//! invalid [`FieldResult`](crate::foundation::FieldResult) inside a
//! successfully returned [`ResultSet`](crate::foundation::ResultSet).

use thiserror::Error;

/// Errors raised while assembling rule sets or navigating result sets.
///
/// All variants are fail-fast: they propagate to the immediate caller of the
/// triggering operation and indicate that the validation schema itself is
/// malformed, not that the validated input was bad.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// Two rules registered into the same set share a key.
    #[error("duplicate validation rule detected for key \"{0}\"")]
    DuplicateRuleKey(String),

    /// Two results added to the same set share a key.
    #[error("duplicate result detected for key \"{0}\"")]
    DuplicateResultKey(String),

    /// `add` was called on a result set after `freeze`.
    #[error("cannot add results to a frozen result set")]
    ResultSetFrozen,

    /// Strict lookup was given a key with no corresponding result.
    #[error("no validation result exists for key \"{0}\"")]
    UnknownResult(String),

    /// A required rule had neither a supplied value nor a usable default
    /// while seeding a pre-validated result set.
    #[error(
        "unable to create a valid result set; key \"{key}\" is required but has no default \
         value; provide a value via the value map"
    )]
    RequiredRuleWithNoDefault {
        /// Key of the offending rule.
        key: String,
    },

    /// Strict nested access against a result that does not hold a nested
    /// result set.
    #[error("result for key \"{0}\" does not compose a nested result set")]
    NotNested(String),
}

impl RuleError {
    /// Creates a [`RuleError::DuplicateRuleKey`] for `key`.
    pub fn duplicate_rule_key(key: impl Into<String>) -> Self {
        Self::DuplicateRuleKey(key.into())
    }

    /// Creates a [`RuleError::DuplicateResultKey`] for `key`.
    pub fn duplicate_result_key(key: impl Into<String>) -> Self {
        Self::DuplicateResultKey(key.into())
    }

    /// Creates a [`RuleError::UnknownResult`] for `key`.
    pub fn unknown_result(key: impl Into<String>) -> Self {
        Self::UnknownResult(key.into())
    }

    /// Creates a [`RuleError::RequiredRuleWithNoDefault`] for `key`.
    pub fn required_with_no_default(key: impl Into<String>) -> Self {
        Self::RequiredRuleWithNoDefault { key: key.into() }
    }

    /// Creates a [`RuleError::NotNested`] for `key`.
    pub fn not_nested(key: impl Into<String>) -> Self {
        Self::NotNested(key.into())
    }

    /// Returns the key named by this error, if the variant carries one.
    #[must_use]
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::DuplicateRuleKey(key)
            | Self::DuplicateResultKey(key)
            | Self::UnknownResult(key)
            | Self::NotNested(key)
            | Self::RequiredRuleWithNoDefault { key } => Some(key),
            Self::ResultSetFrozen => None,
        }
    }
}
