// crates/matter-model-rs/src/element.rs

//! The tagged element tree that makes up the specification model.

use crate::conformance::Conformance;
use crate::ids;
use serde::{Deserialize, Deserializer, Serialize};

/// Discriminates the kinds of nodes in the specification tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementTag {
    Cluster,
    Attribute,
    Command,
    Datatype,
    Event,
    /// Struct members, enum values and bitmap bits all arrive as fields.
    Field,
    DeviceType,
}

/// Whether a command is the outbound invocation or its response shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandDirection {
    Request,
    Response,
}

/// One node of the specification model.
///
/// Elements are duck-shaped in the JSON dump: the same object shape carries
/// clusters, attributes, commands, datatypes, events, fields and device
/// types, discriminated by `tag`. Optional fields are simply absent where a
/// kind does not use them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub tag: ElementTag,

    pub name: String,

    /// Cluster/device/attribute/command identifiers and field bit positions.
    /// The dump writes these as JSON numbers or `"0x..."` strings.
    #[serde(
        default,
        deserialize_with = "deserialize_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<u64>,

    /// Declared type: a primitive name (`uint16`, `map8`), a composite name,
    /// a sibling command, a parent cluster, or a dotted
    /// `OtherCluster.TypeName` reference.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conformance: Option<Conformance>,

    /// Read/write/privilege markers, e.g. `R V` or `RW VO`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<CommandDirection>,

    /// Value constraint as written in the specification (e.g. `0 to 254`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,

    /// Target-language type, filled in by the resolver. Never present in the
    /// raw dump.
    #[serde(
        default,
        rename = "mappedType",
        skip_serializing_if = "Option::is_none"
    )]
    pub mapped_type: Option<String>,
}

impl Element {
    /// Creates a bare element; all optional fields start empty.
    pub fn new(tag: ElementTag, name: impl Into<String>) -> Self {
        Self {
            tag,
            name: name.into(),
            id: None,
            type_name: None,
            conformance: None,
            access: None,
            direction: None,
            constraint: None,
            description: None,
            children: Vec::new(),
            mapped_type: None,
        }
    }

    /// True when the declared type belongs to the given primitive family
    /// (`"map"` matches `map8`..`map64`, `"enum"` matches `enum8`/`enum16`).
    pub fn type_starts_with(&self, prefix: &str) -> bool {
        self.type_name
            .as_deref()
            .is_some_and(|t| t.starts_with(prefix))
    }

    /// Splits a dotted `OtherCluster.TypeName` declared type, if any.
    pub fn qualified_type(&self) -> Option<(&str, &str)> {
        split_qualified(self.type_name.as_deref()?)
    }

    /// Attributes without an `RW` marker are read-only to controllers.
    pub fn is_read_only(&self) -> bool {
        !self.access.as_deref().is_some_and(|a| a.contains("RW"))
    }
}

/// Splits `Qualifier.Name` at the first dot. A dot in first position is not a
/// qualifier.
pub fn split_qualified(name: &str) -> Option<(&str, &str)> {
    match name.find('.') {
        Some(pos) if pos > 0 => Some((&name[..pos], &name[pos + 1..])),
        _ => None,
    }
}

/// Root of the specification dump: the ordered element forest.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatterModel {
    #[serde(default)]
    pub children: Vec<Element>,
}

impl MatterModel {
    /// Iterates root elements carrying the given tag.
    pub fn tagged(&self, tag: ElementTag) -> impl Iterator<Item = &Element> {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    /// Finds a root element by name. Clusters name their parent cluster this
    /// way through their `type` field.
    pub fn find(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }
}

/// Accepts ids as JSON numbers or `"0x..."` hex strings.
fn deserialize_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Number(u64),
        Text(String),
    }

    match Option::<RawId>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawId::Number(n)) => Ok(Some(n)),
        Some(RawId::Text(s)) => ids::parse_hex_u64(&s)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format_args!("invalid hex id: {s:?}"))),
    }
}
