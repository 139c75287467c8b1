//! Structural matcher — decides whether a JSON value conforms to a schema.
//!
//! The matcher walks value and schema together, dispatching on the schema
//! variant at each level and short-circuiting on the first mismatch. It is
//! purely functional: no state survives a call, nothing is mutated, and
//! every input combination yields a boolean.
//!
//! # Key design decisions
//!
//! - **Schema-driven comparison**: tuple and object schemas only examine
//!   the positions and keys the schema declares. Extra value elements and
//!   extra value keys are ignored, so matching is a subset check, not an
//!   equality check.
//! - **Explicit absence**: a tuple position beyond the value's length, or
//!   an undeclared object key, is threaded through recursion as
//!   `Option::None` rather than a sentinel value. Absence satisfies only
//!   the `any` tag; every other schema node fails against it.
//! - **Total at the untyped boundary**: [`conforms`] takes the schema as a
//!   raw JSON literal and answers `false` for malformed schemas instead of
//!   erroring, preserving the single-boolean contract end to end.

use crate::schema::{ScalarTag, Schema};
use serde_json::Value;

/// Decide whether `value` conforms to `schema`.
///
/// Total over its domain: never panics, never errors. Recursion depth is
/// bounded by the schema's nesting depth.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use shapecheck_core::{matches, Schema};
///
/// let schema = Schema::from_value(&json!({"a": "number", "b": "string[]"})).unwrap();
/// assert!(matches(&json!({"a": 1, "b": ["x", "y"]}), &schema));
/// assert!(!matches(&json!({"a": "1", "b": ["x", "y"]}), &schema));
/// ```
pub fn matches(value: &Value, schema: &Schema) -> bool {
    matches_inner(Some(value), schema)
}

/// Decide whether `value` conforms to the schema literal `schema`.
///
/// Both arguments are raw JSON values. A schema literal that does not
/// decode — an unknown tag, or a number/boolean/null node anywhere in the
/// tree — yields `false`, never an error. Use [`crate::Schema::from_value`]
/// plus [`matches`] when the construction failure should be reported
/// precisely.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use shapecheck_core::conforms;
///
/// assert!(conforms(&json!([1, "two"]), &json!(["number", "string"])));
/// assert!(!conforms(&json!(42), &json!("integer")));  // malformed schema
/// ```
pub fn conforms(value: &Value, schema: &Value) -> bool {
    match Schema::from_value(schema) {
        Ok(schema) => matches(value, &schema),
        Err(_) => false,
    }
}

/// Recursive engine. `None` stands for an absent value: a tuple position
/// past the end of the value list, or an object key the value lacks.
fn matches_inner(value: Option<&Value>, schema: &Schema) -> bool {
    match schema {
        Schema::Scalar(tag) => match value {
            Some(value) => scalar_matches(value, *tag),
            // Absent values satisfy only `any`.
            None => *tag == ScalarTag::Any,
        },
        Schema::ScalarArray(tag) => match value {
            Some(Value::Array(items)) => items.iter().all(|item| scalar_matches(item, *tag)),
            _ => false,
        },
        Schema::Tuple(nodes) => match value {
            Some(Value::Array(items)) => nodes
                .iter()
                .enumerate()
                .all(|(i, node)| matches_inner(items.get(i), node)),
            _ => false,
        },
        Schema::Object(fields) => match value {
            Some(Value::Object(entries)) => fields
                .iter()
                .all(|(key, node)| matches_inner(entries.get(key), node)),
            _ => false,
        },
    }
}

/// Match a single present value against a bare scalar tag.
fn scalar_matches(value: &Value, tag: ScalarTag) -> bool {
    match tag {
        ScalarTag::Any => true,
        ScalarTag::Null => value.is_null(),
        ScalarTag::String => value.is_string(),
        ScalarTag::Number => value.is_number(),
        ScalarTag::Boolean => value.is_boolean(),
    }
}
