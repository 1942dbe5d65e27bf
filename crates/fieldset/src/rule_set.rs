//! Rule-set orchestration
//!
//! A [`RuleSet`] is an ordered, duplicate-free collection of rules that
//! evaluates whole records in a single pass, producing a frozen
//! [`ResultSet`]. It can also seed a pre-validated result set from a
//! trusted value map without running validation.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::foundation::{FieldResult, Record, ResultSet, Rule, RuleError};

/// Strategy producing the outcome for a required field absent from the
/// record. Installed per rule set to customize missing-value messaging.
pub type MissingValueFactory = Arc<dyn Fn(&str) -> FieldResult + Send + Sync>;

// ============================================================================
// RULE SET
// ============================================================================

/// Ordered collection of rules, keyed by the field each rule governs.
///
/// Evaluation walks the rules in insertion order, consulting the record
/// once per rule; record keys matched by no rule are silently ignored. The
/// set itself is immutable during evaluation and safe to share across
/// threads: each [`RuleSet::validate`] call builds an independent
/// [`ResultSet`].
///
/// # Examples
///
/// ```
/// use fieldset::rule_set::RuleSet;
/// use fieldset::rules::{boolean, callback};
/// use fieldset::foundation::FieldResult;
/// use serde_json::json;
///
/// let rules = RuleSet::builder()
///     .rule(boolean("subscribed").optional())
///     .rule(callback("name", |value, _context, key| match value.as_str() {
///         Some(s) if !s.is_empty() => FieldResult::valid(key, value.clone()),
///         _ => FieldResult::invalid(key, value.clone(), "Name must be a non-empty string"),
///     }))
///     .build()?;
///
/// let record = json!({"name": "Ada"});
/// let results = rules.validate(record.as_object().unwrap())?;
/// assert!(results.is_valid());
/// assert_eq!(results.values()["subscribed"], json!(false));
/// # Ok::<(), fieldset::foundation::RuleError>(())
/// ```
pub struct RuleSet {
    rules: IndexMap<String, Box<dyn Rule>>,
    missing_value_factory: Option<MissingValueFactory>,
}

impl RuleSet {
    /// Creates an empty rule set. Absent required fields report each
    /// rule's own missing-value outcome until a set-wide factory is
    /// installed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: IndexMap::new(),
            missing_value_factory: None,
        }
    }

    /// Starts a [`RuleSetBuilder`].
    #[must_use]
    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::new()
    }

    /// Registers a rule under its key.
    ///
    /// # Errors
    ///
    /// [`RuleError::DuplicateRuleKey`] when another rule already governs
    /// that key.
    pub fn add(&mut self, rule: impl Rule + 'static) -> Result<(), RuleError> {
        self.add_boxed(Box::new(rule))
    }

    /// Registers an already-boxed rule under its key.
    ///
    /// # Errors
    ///
    /// [`RuleError::DuplicateRuleKey`] when another rule already governs
    /// that key.
    pub fn add_boxed(&mut self, rule: Box<dyn Rule>) -> Result<(), RuleError> {
        let key = rule.key().to_owned();
        if self.rules.contains_key(&key) {
            return Err(RuleError::duplicate_rule_key(key));
        }
        self.rules.insert(key, rule);
        Ok(())
    }

    /// Installs a set-wide missing-value strategy, overriding each rule's
    /// own [`Rule::missing_result`].
    pub fn set_missing_value_factory(
        &mut self,
        factory: impl Fn(&str) -> FieldResult + Send + Sync + 'static,
    ) {
        self.missing_value_factory = Some(Arc::new(factory));
    }

    /// The rule governing `key`, if any.
    #[must_use]
    pub fn rule(&self, key: &str) -> Option<&dyn Rule> {
        self.rules.get(key).map(AsRef::as_ref)
    }

    /// Number of registered rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether no rules are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterates the rules in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.values().map(AsRef::as_ref)
    }

    /// Evaluates `data` against every rule, in insertion order.
    ///
    /// Exactly one outcome is produced per rule: present values go through
    /// the rule's `validate`, absent required fields through the set-wide
    /// missing-value factory (or the rule's own missing outcome when none
    /// is installed), absent optional fields through the rule's default.
    /// The returned set is frozen. Record keys matched by no rule never
    /// produce an outcome.
    ///
    /// # Errors
    ///
    /// [`RuleError`] when a rule propagates engine misconfiguration, or
    /// when a misbehaving rule emits an outcome under a key that collides
    /// in the output set. Invalid *data* is never an error.
    pub fn validate(&self, data: &Record) -> Result<ResultSet, RuleError> {
        let mut results = ResultSet::new();

        for rule in self.rules.values() {
            let key = rule.key();
            let result = match data.get(key) {
                Some(value) => rule.validate(value, data)?,
                None if rule.required() => match &self.missing_value_factory {
                    Some(factory) => factory(key),
                    None => rule.missing_result(),
                },
                None => rule.default_result(),
            };
            trace!(key, valid = result.is_valid(), "field evaluated");
            results.add(result)?;
        }

        results.freeze();
        debug!(
            fields = results.len(),
            valid = results.is_valid(),
            "record evaluated"
        );
        Ok(results)
    }

    /// Evaluates `data` and converts the frozen set into a typed view.
    ///
    /// # Errors
    ///
    /// Same conditions as [`RuleSet::validate`].
    pub fn validate_into<V: From<ResultSet>>(&self, data: &Record) -> Result<V, RuleError> {
        self.validate(data).map(V::from)
    }

    /// Builds a result set as if every supplied value had already passed
    /// validation — for seeding known-good records (an edit-form preload,
    /// say) without running `validate`.
    ///
    /// Keys absent from `values` fall back to the rule's default value.
    /// Unlike `validate`, the returned set is **not** frozen and the
    /// missing-value factory is never consulted: this is a construction
    /// helper, not a validation pass.
    ///
    /// # Errors
    ///
    /// [`RuleError::RequiredRuleWithNoDefault`] when a required rule has
    /// neither a supplied value nor a non-null default.
    pub fn create_valid_result_set(&self, values: &Record) -> Result<ResultSet, RuleError> {
        let mut results = ResultSet::new();

        for rule in self.rules.values() {
            let key = rule.key();
            if let Some(value) = values.get(key) {
                results.add(FieldResult::valid(key, value.clone()))?;
                continue;
            }

            let default = rule.default_result();
            if rule.required() && default.value().is_null() {
                return Err(RuleError::required_with_no_default(key));
            }
            results.add(FieldResult::valid(key, default.into_value()))?;
        }

        Ok(results)
    }

    /// Like [`RuleSet::create_valid_result_set`], converting into a typed
    /// view.
    ///
    /// # Errors
    ///
    /// Same conditions as [`RuleSet::create_valid_result_set`].
    pub fn create_valid_result_set_into<V: From<ResultSet>>(
        &self,
        values: &Record,
    ) -> Result<V, RuleError> {
        self.create_valid_result_set(values).map(V::from)
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("keys", &self.rules.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Fluent construction for [`RuleSet`].
///
/// Duplicate keys are reported once, at [`RuleSetBuilder::build`].
#[derive(Default)]
pub struct RuleSetBuilder {
    rules: Vec<Box<dyn Rule>>,
    missing_value_factory: Option<MissingValueFactory>,
}

impl RuleSetBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule.
    #[must_use]
    pub fn rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds an already-boxed rule.
    #[must_use]
    pub fn boxed_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Installs a custom missing-value strategy.
    #[must_use]
    pub fn missing_value_factory(
        mut self,
        factory: impl Fn(&str) -> FieldResult + Send + Sync + 'static,
    ) -> Self {
        self.missing_value_factory = Some(Arc::new(factory));
        self
    }

    /// Finalizes the rule set.
    ///
    /// # Errors
    ///
    /// [`RuleError::DuplicateRuleKey`] when two added rules share a key.
    pub fn build(self) -> Result<RuleSet, RuleError> {
        let mut set = RuleSet::new();
        set.missing_value_factory = self.missing_value_factory;
        for rule in self.rules {
            set.add_boxed(rule)?;
        }
        Ok(set)
    }
}

impl fmt::Debug for RuleSetBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSetBuilder")
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}
