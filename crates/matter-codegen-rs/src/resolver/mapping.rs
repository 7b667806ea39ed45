// crates/matter-codegen-rs/src/resolver/mapping.rs

//! Type-mapping tables and the primitive-type map.

use matter_model_rs::{split_qualified, Element};
use serde::Serialize;
use std::collections::BTreeMap;

/// Fallback for elements without usable type information. Specification data
/// is occasionally incomplete; missing types degrade instead of failing.
pub const DEFAULT_MAPPED_TYPE: &str = "String";

/// Maps specification type names to Java type names.
///
/// A `None` target marks a composite type (enum, bitmap, struct) that
/// resolves by name instead of to a Java native type. One global table is
/// seeded from the specification's global scope; each cluster-scoped table
/// starts as a copy of it, and later cluster-local entries shadow the copied
/// ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TypeMapping {
    entries: BTreeMap<String, Option<String>>,
}

impl TypeMapping {
    /// Registers a mapping, replacing any existing entry of the same name.
    pub fn insert(&mut self, name: impl Into<String>, target: Option<String>) {
        self.entries.insert(name.into(), target);
    }

    /// Looks up the Java type for a specification type name. Composite
    /// entries and unknown names both yield `None`.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(name).and_then(|target| target.as_deref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Entries whose target still points into another cluster's namespace,
    /// as `(other cluster, bare type name)` pairs.
    pub fn dotted_targets(&self) -> Vec<(String, String)> {
        self.entries
            .values()
            .flatten()
            .filter_map(|target| split_qualified(target))
            .map(|(qualifier, name)| (qualifier.to_string(), name.to_string()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Looks up the Java native type for an element, keyed by its declared type
/// with the element's own name as fallback.
///
/// Composite families (`list`, `struct`, `map8`..`map64`) and unknown names
/// return `None`: those become named Java classes rather than native types.
pub fn native_java_type(element: &Element) -> Option<&'static str> {
    let key = element.type_name.as_deref().unwrap_or(&element.name);
    match key {
        "bool" => Some("Boolean"),
        "uint8" | "uint16" | "uint24" | "uint32" => Some("Integer"),
        "uint40" | "uint48" | "uint56" | "uint64" => Some("BigInteger"),
        "int8" | "int16" | "int24" | "int32" => Some("Integer"),
        "int40" | "int48" | "int56" | "int64" => Some("BigInteger"),
        "single" => Some("Float"),
        "double" => Some("Double"),
        "octstr" => Some("String"),
        "date" => Some("date"),
        "string" => Some("String"),
        // Semantic tag fields carry no datatype of their own.
        "tag" | "namespace" => Some("Integer"),
        _ => None,
    }
}
