// crates/matter-codegen-rs/src/types.rs

//! Public output of the resolution pipeline, consumed by the templating
//! layer.

use crate::resolver::mapping::TypeMapping;
use matter_model_rs::Element;
use serde::Serialize;

/// A fully resolved cluster: every member carries its Java type and every
/// composite referenced by name is present in one of the collections.
///
/// Built once during per-cluster resolution, appended to during
/// cross-cluster borrowing, then read-only for rendering. The pipeline owns
/// every instance for the duration of a run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedCluster {
    pub name: String,

    /// Clusters without an id exist only for inheritance and the registry;
    /// they never get their own generated source file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    pub attributes: Vec<Element>,
    pub commands: Vec<Element>,
    pub datatypes: Vec<Element>,
    pub enums: Vec<Element>,
    pub bitmaps: Vec<Element>,
    pub structs: Vec<Element>,

    /// The cluster-scoped type table, global entries included.
    #[serde(rename = "typeMapping")]
    pub type_mapping: TypeMapping,
}

impl ResolvedCluster {
    pub fn is_renderable(&self) -> bool {
        self.id.is_some()
    }
}

/// Globally scoped enums, structured records and bitmaps, emitted once into
/// the shared base-cluster source.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BaseClusterModel {
    pub enums: Vec<Element>,
    pub structs: Vec<Element>,
    pub bitmaps: Vec<Element>,
}

/// Everything the renderer consumes for one generation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedModel {
    pub clusters: Vec<ResolvedCluster>,
    pub base: BaseClusterModel,
    #[serde(rename = "deviceTypes")]
    pub device_types: Vec<Element>,
}

impl ResolvedModel {
    /// The clusters that get their own generated source file.
    pub fn renderable_clusters(&self) -> impl Iterator<Item = &ResolvedCluster> {
        self.clusters.iter().filter(|c| c.is_renderable())
    }

    pub fn cluster(&self, name: &str) -> Option<&ResolvedCluster> {
        self.clusters.iter().find(|c| c.name == name)
    }
}
