//! Schema AST — the typed form of a declarative shape description.
//!
//! A schema is written as a JSON literal: a scalar tag string
//! (`"number"`, `"string[]"`), an array of schema literals matched
//! positionally, or an object mapping keys to schema literals. This module
//! decodes that literal form into the [`Schema`] enum once, so the matcher
//! never re-parses tag strings during recursion.
//!
//! # Key design decisions
//!
//! - **Array modifier as a variant**: `"string[]"` decodes to
//!   [`Schema::ScalarArray`] rather than carrying the `[]` suffix around.
//!   The modifier is orthogonal to the base tag: `"any[]"` means "any list
//!   of anything", not "any value".
//! - **Pair-vec objects**: object schemas keep their fields as
//!   `Vec<(String, Schema)>` in insertion order, mirroring how
//!   `serde_json` preserves key order. Order never affects matching.
//! - **Strict tag parsing**: exactly one trailing `[]` is recognized;
//!   `"number[][]"`, a bare `"[]"`, and unknown base names are all
//!   [`SchemaError::UnknownTag`].

use crate::error::{Result, SchemaError};
use serde::de::Error as _;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// The five primitive type names a scalar schema node can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarTag {
    /// Matches JSON strings.
    String,
    /// Matches JSON numbers (integer or float).
    Number,
    /// Matches JSON booleans.
    Boolean,
    /// Matches exactly JSON null.
    Null,
    /// Matches every value, including arrays and objects.
    Any,
}

impl ScalarTag {
    /// The literal tag name as it appears in schema strings.
    pub fn name(self) -> &'static str {
        match self {
            ScalarTag::String => "string",
            ScalarTag::Number => "number",
            ScalarTag::Boolean => "boolean",
            ScalarTag::Null => "null",
            ScalarTag::Any => "any",
        }
    }
}

impl FromStr for ScalarTag {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "string" => Ok(ScalarTag::String),
            "number" => Ok(ScalarTag::Number),
            "boolean" => Ok(ScalarTag::Boolean),
            "null" => Ok(ScalarTag::Null),
            "any" => Ok(ScalarTag::Any),
            other => Err(SchemaError::UnknownTag {
                tag: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ScalarTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A declarative description of expected shape.
///
/// Decoded from a JSON schema literal with [`Schema::from_value`] and
/// consumed by [`crate::matches`].
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// A bare scalar tag, e.g. `"number"`.
    Scalar(ScalarTag),
    /// A tag with the array modifier, e.g. `"number[]"`: the value must be
    /// a list and every element must match the base tag.
    ScalarArray(ScalarTag),
    /// An ordered schema list, matched positionally against a value list.
    /// Trailing value elements beyond the schema's length are ignored.
    Tuple(Vec<Schema>),
    /// A keyed schema map, matched against the corresponding keys of a
    /// value object. Value keys not declared here are ignored.
    Object(Vec<(String, Schema)>),
}

impl Schema {
    /// Decode a JSON schema literal into the typed AST.
    ///
    /// Strings must be a recognized scalar tag with an optional `[]`
    /// suffix; arrays and objects decode recursively. Numbers, booleans,
    /// and null are not valid schema nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use shapecheck_core::{ScalarTag, Schema};
    ///
    /// let schema = Schema::from_value(&json!({"id": "number", "tags": "string[]"})).unwrap();
    /// assert_eq!(
    ///     schema,
    ///     Schema::Object(vec![
    ///         ("id".into(), Schema::Scalar(ScalarTag::Number)),
    ///         ("tags".into(), Schema::ScalarArray(ScalarTag::String)),
    ///     ])
    /// );
    /// ```
    pub fn from_value(literal: &Value) -> Result<Schema> {
        match literal {
            Value::String(tag) => tag.parse(),
            Value::Array(items) => {
                let nodes = items.iter().map(Schema::from_value).collect::<Result<_>>()?;
                Ok(Schema::Tuple(nodes))
            }
            Value::Object(fields) => {
                let fields = fields
                    .iter()
                    .map(|(key, node)| Ok((key.clone(), Schema::from_value(node)?)))
                    .collect::<Result<_>>()?;
                Ok(Schema::Object(fields))
            }
            other => Err(SchemaError::InvalidNode {
                kind: value_kind(other),
            }),
        }
    }

    /// Re-emit the JSON literal form of this schema.
    ///
    /// Inverse of [`Schema::from_value`]: every well-formed literal
    /// round-trips unchanged.
    pub fn to_value(&self) -> Value {
        match self {
            Schema::Scalar(tag) => Value::String(tag.name().to_string()),
            Schema::ScalarArray(tag) => Value::String(format!("{}[]", tag.name())),
            Schema::Tuple(nodes) => Value::Array(nodes.iter().map(Schema::to_value).collect()),
            Schema::Object(fields) => {
                let mut map = Map::new();
                for (key, node) in fields {
                    map.insert(key.clone(), node.to_value());
                }
                Value::Object(map)
            }
        }
    }
}

/// Parse the scalar-tag string form only: a base tag with an optional
/// single `[]` suffix.
impl FromStr for Schema {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.strip_suffix("[]") {
            Some(base) => Ok(Schema::ScalarArray(base.parse()?)),
            None => Ok(Schema::Scalar(s.parse()?)),
        }
    }
}

impl TryFrom<&Value> for Schema {
    type Error = SchemaError;

    fn try_from(literal: &Value) -> Result<Self> {
        Schema::from_value(literal)
    }
}

/// Scalar forms print as their tag literal (`number`, `string[]`);
/// composites print as their JSON literal.
impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Schema::Scalar(tag) => write!(f, "{tag}"),
            Schema::ScalarArray(tag) => write!(f, "{tag}[]"),
            composite => {
                let literal =
                    serde_json::to_string(&composite.to_value()).map_err(|_| fmt::Error)?;
                f.write_str(&literal)
            }
        }
    }
}

/// Serializes as the JSON literal form, so schemas embedded in config
/// structs round-trip through serde unchanged.
impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Schema::Scalar(tag) => serializer.serialize_str(tag.name()),
            Schema::ScalarArray(tag) => serializer.serialize_str(&format!("{}[]", tag.name())),
            Schema::Tuple(nodes) => {
                let mut seq = serializer.serialize_seq(Some(nodes.len()))?;
                for node in nodes {
                    seq.serialize_element(node)?;
                }
                seq.end()
            }
            Schema::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, node) in fields {
                    map.serialize_entry(key, node)?;
                }
                map.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Schema {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let literal = Value::deserialize(deserializer)?;
        Schema::from_value(&literal).map_err(D::Error::custom)
    }
}

/// Human-readable kind name for a JSON value, used in error messages.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
