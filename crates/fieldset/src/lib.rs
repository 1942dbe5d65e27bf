//! # fieldset
//!
//! A small declarative engine for validating keyed records field by field.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldset::prelude::*;
//! use serde_json::json;
//!
//! let rules = RuleSet::builder()
//!     .rule(boolean("subscribed").optional())
//!     .rule(callback("email", |value, _context, key| match value.as_str() {
//!         Some(s) if s.contains('@') => FieldResult::valid(key, value.clone()),
//!         _ => FieldResult::invalid(key, value.clone(), "A valid email address is required"),
//!     }))
//!     .build()?;
//!
//! let record = json!({"email": "ada@example.com"});
//! let results = rules.validate(record.as_object().unwrap())?;
//!
//! assert!(results.is_valid());
//! assert_eq!(results.values()["email"], json!("ada@example.com"));
//! # Ok::<(), RuleError>(())
//! ```
//!
//! ## Model
//!
//! - A [`Rule`](foundation::Rule) validates one field of a record and
//!   reports a [`FieldResult`](foundation::FieldResult).
//! - A [`RuleSet`](rule_set::RuleSet) evaluates a whole record, producing
//!   exactly one result per rule, collected into a frozen
//!   [`ResultSet`](foundation::ResultSet).
//! - Invalid *data* is an ordinary outcome; [`RuleError`](foundation::RuleError)
//!   is reserved for engine misuse.
//!
//! ## Built-in Rules
//!
//! - [`BooleanRule`](rules::BooleanRule) for strict boolean fields
//! - [`CallbackRule`](rules::CallbackRule) for closure-backed logic
//! - [`NestedRule`](rules::NestedRule) for object fields governed by an
//!   inner rule set

pub mod foundation;
pub mod prelude;
pub mod rule_set;
pub mod rules;
