//! Error types for schema construction.
//!
//! Matching itself has no error channel: [`crate::matches`] and
//! [`crate::conforms`] are total and only ever answer `true` or `false`.
//! Errors exist solely on the decoding path from a JSON schema literal to
//! the typed [`crate::Schema`] AST.

use thiserror::Error;

/// Errors that can occur while decoding a schema literal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A string node was not one of the recognized scalar tags
    /// (`string`, `number`, `boolean`, `null`, `any`), with or without
    /// a single trailing `[]` marker.
    #[error("unrecognized scalar tag: {tag:?}")]
    UnknownTag { tag: String },

    /// A literal node was a JSON kind that cannot denote a schema
    /// (a number, a boolean, or null).
    #[error("{kind} cannot appear as a schema node")]
    InvalidNode { kind: &'static str },
}

/// Convenience alias used throughout shapecheck-core.
pub type Result<T> = std::result::Result<T, SchemaError>;
