//! Built-in rule implementations
//!
//! Each rule ships with a lowercase factory function for fluent
//! construction:
//!
//! ```
//! use fieldset::rules::{boolean, callback};
//! use fieldset::foundation::FieldResult;
//! use serde_json::json;
//!
//! let opt_in = boolean("opt_in").optional();
//! let title = callback("title", |value, _context, key| {
//!     match value.as_str() {
//!         Some(s) if !s.is_empty() => FieldResult::valid(key, value.clone()),
//!         _ => FieldResult::invalid(key, value.clone(), "Title must be a non-empty string"),
//!     }
//! });
//! ```

pub mod boolean;
pub mod callback;
pub mod nested;

pub use boolean::{BooleanRule, boolean};
pub use callback::{CallbackRule, callback};
pub use nested::{NestedRule, nested};

use serde_json::Value;

/// Human-readable name of a JSON value's type, for diagnostics.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
