// crates/matter-codegen-rs/src/error.rs

use core::fmt;
use core::num::ParseIntError;

/// Errors that abort a code-generation run.
///
/// Resolution degrades locally wherever the data model allows a sensible
/// default (placeholder types, skipped inheritance, unresolved borrows). The
/// variants here are the structural failures that must stop the run before
/// any artifact is written, so a bad dump never yields an inconsistent
/// bundle.
#[derive(Debug)]
pub enum CodegenError {
    /// An error from the underlying `serde_json` deserializer.
    JsonParsing(serde_json::Error),

    /// An error from the underlying `serde_json` serializer.
    JsonSerializing(serde_json::Error),

    /// A required attribute was missing (e.g. a cluster id at render time).
    MissingAttribute { attribute: &'static str },

    /// An attribute had an invalid format (e.g. a non-hex id string).
    InvalidAttributeFormat { attribute: &'static str },

    /// A structural invariant of the model dump was violated; `name` points
    /// at the enclosing element.
    MalformedModel {
        context: &'static str,
        name: String,
    },
}

impl From<serde_json::Error> for CodegenError {
    fn from(e: serde_json::Error) -> Self {
        CodegenError::JsonParsing(e)
    }
}

/// Converts `ParseIntError` (typically from reading a hex id) into a
/// user-friendly error.
impl From<ParseIntError> for CodegenError {
    fn from(_: ParseIntError) -> Self {
        CodegenError::InvalidAttributeFormat { attribute: "id" }
    }
}

impl fmt::Display for CodegenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodegenError::JsonParsing(e) => write!(f, "JSON parsing error: {}", e),
            CodegenError::JsonSerializing(e) => write!(f, "JSON serializing error: {}", e),
            CodegenError::MissingAttribute { attribute } => {
                write!(f, "Missing required attribute: {}", attribute)
            }
            CodegenError::InvalidAttributeFormat { attribute } => {
                write!(f, "Invalid format for attribute: {}", attribute)
            }
            CodegenError::MalformedModel { context, name } => {
                write!(f, "Malformed model: {} (in {})", context, name)
            }
        }
    }
}

impl std::error::Error for CodegenError {}
