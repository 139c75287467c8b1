//! # shapecheck-core
//!
//! Recursive structural validation of JSON values against declarative
//! shape schemas.
//!
//! A schema is itself a JSON-shaped literal: a scalar tag string
//! (`"string"`, `"number"`, `"boolean"`, `"null"`, `"any"`, each with an
//! optional `[]` array modifier), an array of schemas matched positionally,
//! or an object of schemas matched per key. Matching is schema-driven:
//! value content the schema does not declare is ignored, and the verdict
//! is always a single boolean.
//!
//! ## Quick start
//!
//! ```rust
//! use serde_json::json;
//! use shapecheck_core::conforms;
//!
//! let value = json!({
//!     "a": 1,
//!     "b": "2",
//!     "c": [3, "4", 5],
//! });
//! let schema = json!({
//!     "a": "number",
//!     "b": "string",
//!     "c": "any[]",
//! });
//! assert!(conforms(&value, &schema));
//! assert!(!conforms(&json!({"a": "1"}), &json!({"a": "number"})));
//! ```
//!
//! Decode the schema once with [`Schema::from_value`] when validating many
//! values against the same shape:
//!
//! ```rust
//! use serde_json::json;
//! use shapecheck_core::{matches, Schema};
//!
//! let schema = Schema::from_value(&json!(["number", "string"])).unwrap();
//! assert!(matches(&json!([1, "two", true]), &schema));
//! assert!(!matches(&json!(["one", "two"]), &schema));
//! ```
//!
//! ## Modules
//!
//! - [`schema`] — `Schema` AST, tag parsing, serde integration
//! - [`matcher`] — the recursive matcher (`matches`, `conforms`)
//! - [`error`] — schema-construction error types

pub mod error;
pub mod matcher;
pub mod schema;

pub use error::SchemaError;
pub use matcher::{conforms, matches};
pub use schema::{ScalarTag, Schema};
