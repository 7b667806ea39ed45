// crates/matter-model-rs/src/conformance.rs

//! Conformance codes attached to specification elements.

use serde::{Deserialize, Serialize};

/// A conformance code as written in the specification: `M`, `O`, `D`, `X`,
/// feature conditionals like `[LT]`, and negative conditionals like `[!LT]`.
///
/// Only the handful of codes that change code generation are discriminated
/// here; everything else passes through untouched for the templating layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conformance(String);

impl Conformance {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `D`: the field is deprecated and is not emitted.
    pub fn is_deprecated(&self) -> bool {
        self.0 == "D"
    }

    /// `X`: the field is disallowed in this context and is not emitted.
    pub fn is_disallowed(&self) -> bool {
        self.0 == "X"
    }

    /// `[!...]`: the field only applies when a feature is absent. The
    /// specification restates an attribute with such a code when a later
    /// edition narrows the original declaration.
    pub fn is_negative_conditional(&self) -> bool {
        self.0.starts_with("[!")
    }
}

impl From<&str> for Conformance {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}
