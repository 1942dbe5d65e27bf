//! Core validation types and traits
//!
//! The fundamental building blocks of the engine:
//!
//! - **Outcomes**: [`FieldResult`], [`FieldValue`], [`ResultSet`]
//! - **Capability**: [`Rule`], with [`Record`] as the input shape
//! - **Errors**: [`RuleError`]
//!
//! # Architecture
//!
//! The engine draws a hard line between two failure surfaces:
//!
//! 1. **Invalid data** is an expected outcome of validating untrusted
//!    input. It is encoded as an invalid [`FieldResult`] inside a
//!    successfully returned [`ResultSet`] and never raises an error.
//! 2. **Misconfiguration** — duplicate keys, lifecycle misuse, strict
//!    lookups that miss — is a [`RuleError`]: fail fast, propagate to the
//!    caller, fix the schema.
//!
//! Outcomes are immutable once constructed, and a [`ResultSet`] is frozen
//! at the end of the evaluation pass that produced it, so everything a
//! caller receives from validation is read-only.

pub mod error;
pub mod result;
pub mod result_set;
pub mod traits;

pub use error::RuleError;
pub use result::{FieldResult, FieldValue, MISSING_MESSAGE};
pub use result_set::ResultSet;
pub use traits::{Record, Rule};
