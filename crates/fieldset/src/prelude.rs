//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldset::prelude::*;` import that brings in the
//! core types, the rule trait, and the built-in rule factories.
//!
//! # Examples
//!
//! ```rust
//! use fieldset::prelude::*;
//!
//! let rules = RuleSet::builder()
//!     .rule(boolean("active"))
//!     .build()
//!     .unwrap();
//! assert_eq!(rules.len(), 1);
//! ```

// ============================================================================
// FOUNDATION: Core types, trait, errors
// ============================================================================

pub use crate::foundation::{
    FieldResult, FieldValue, MISSING_MESSAGE, Record, ResultSet, Rule, RuleError,
};

// ============================================================================
// RULE SET: Orchestration
// ============================================================================

pub use crate::rule_set::{MissingValueFactory, RuleSet, RuleSetBuilder};

// ============================================================================
// RULES: Built-in rules and factories
// ============================================================================

pub use crate::rules::{BooleanRule, CallbackRule, NestedRule, boolean, callback, nested};
