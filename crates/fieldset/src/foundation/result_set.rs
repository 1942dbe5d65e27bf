//! Aggregate validation outcomes
//!
//! A [`ResultSet`] collects the [`FieldResult`] for every rule of an
//! evaluation pass, keyed by field name and iterated in insertion order.
//! The set is append-only while open and permanently closed once frozen.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::foundation::error::RuleError;
use crate::foundation::result::FieldResult;

/// Ordered, duplicate-free collection of per-field outcomes.
///
/// # Lifecycle
///
/// A set starts **open**: [`ResultSet::add`] inserts outcomes, rejecting
/// duplicate keys. [`ResultSet::freeze`] transitions it to **frozen** — a
/// terminal state in which further `add` calls fail. Evaluation passes
/// freeze the set they return; read operations are unaffected by state.
///
/// # Examples
///
/// ```
/// use fieldset::foundation::{FieldResult, ResultSet};
/// use serde_json::json;
///
/// let mut results = ResultSet::new();
/// results.add(FieldResult::valid("title", json!("Whorl")))?;
/// results.add(FieldResult::missing("author"))?;
/// results.freeze();
///
/// assert!(!results.is_valid());
/// assert_eq!(results.messages()["author"], "Missing required value");
/// # Ok::<(), fieldset::foundation::RuleError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSet {
    #[serde(flatten)]
    results: IndexMap<String, FieldResult>,
    #[serde(skip)]
    frozen: bool,
}

impl ResultSet {
    /// Creates an empty, open result set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an open result set from a sequence of outcomes.
    ///
    /// # Errors
    ///
    /// [`RuleError::DuplicateResultKey`] when two outcomes share a key.
    pub fn try_from_results(
        results: impl IntoIterator<Item = FieldResult>,
    ) -> Result<Self, RuleError> {
        let mut set = Self::new();
        for result in results {
            set.add(result)?;
        }
        Ok(set)
    }

    /// Appends an outcome, preserving insertion order for iteration.
    ///
    /// # Errors
    ///
    /// [`RuleError::ResultSetFrozen`] when the set has been frozen,
    /// [`RuleError::DuplicateResultKey`] when an outcome with the same key
    /// is already present.
    pub fn add(&mut self, result: FieldResult) -> Result<(), RuleError> {
        if self.frozen {
            return Err(RuleError::ResultSetFrozen);
        }
        let key = result.key().to_owned();
        if self.results.contains_key(&key) {
            return Err(RuleError::duplicate_result_key(key));
        }
        self.results.insert(key, result);
        Ok(())
    }

    /// Closes the set to further additions. Idempotent and one-way.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Whether the set has been frozen.
    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Whether every contained outcome is valid. Vacuously true when empty.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.results.values().all(FieldResult::is_valid)
    }

    /// Optional lookup: the outcome for `key`, or `None` when absent.
    ///
    /// Use [`ResultSet::get_result`] when absence should be an error.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldResult> {
        self.results.get(key)
    }

    /// Strict lookup.
    ///
    /// # Errors
    ///
    /// [`RuleError::UnknownResult`] when no outcome exists for `key`.
    pub fn get_result(&self, key: &str) -> Result<&FieldResult, RuleError> {
        self.results
            .get(key)
            .ok_or_else(|| RuleError::unknown_result(key))
    }

    /// Messages of the invalid outcomes, keyed by field, in iteration order.
    ///
    /// Every invalid outcome carries a message by constructor contract, so
    /// the projection is total over the invalid entries.
    #[must_use]
    pub fn messages(&self) -> IndexMap<String, String> {
        self.results
            .iter()
            .filter(|(_, result)| !result.is_valid())
            .filter_map(|(key, result)| {
                result
                    .message()
                    .map(|message| (key.clone(), message.to_owned()))
            })
            .collect()
    }

    /// All field values, keyed by field, in iteration order.
    ///
    /// Missing values contribute `Null`; nested outcomes contribute the
    /// object of their own `values()`.
    #[must_use]
    pub fn values(&self) -> Map<String, Value> {
        self.results
            .iter()
            .map(|(key, result)| (key.clone(), result.value().to_value()))
            .collect()
    }

    /// Iterates the outcomes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldResult> {
        self.results.values()
    }

    /// Number of outcomes in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether the set contains no outcomes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a FieldResult;
    type IntoIter = indexmap::map::Values<'a, String, FieldResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.values()
    }
}
