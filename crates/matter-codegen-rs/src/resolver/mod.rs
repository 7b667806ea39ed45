// crates/matter-codegen-rs/src/resolver/mod.rs

//! The resolution pipeline.
//!
//! Phase order is strict: the global type table is built first; every cluster
//! is resolved against it (clusters read the global table, never write it);
//! cross-cluster borrowing runs only once all clusters exist, because it
//! looks definitions up in already-resolved siblings; render contexts are
//! produced only after borrowing, so a cluster resolved early still receives
//! types contributed by a later one. The whole pipeline is a synchronous
//! batch with no shared state beyond its own tables.

pub mod borrow;
pub mod cluster;
pub mod filter;
pub mod mapper;
pub mod mapping;

use crate::config::GeneratorConfig;
use crate::types::{BaseClusterModel, ResolvedModel};
use log::{debug, info};
use self::mapping::{native_java_type, TypeMapping};
use matter_model_rs::{Element, ElementTag, MatterModel};

/// Specification-wide datatypes and attributes that live outside any cluster,
/// plus the type table seeded from them. Read-only once collected.
#[derive(Debug, Clone)]
pub struct GlobalScope {
    pub datatypes: Vec<Element>,
    pub attributes: Vec<Element>,
    pub mapping: TypeMapping,
}

impl GlobalScope {
    /// Collects the global elements and seeds the global type table: a few
    /// ecosystem special cases first, then every global datatype and
    /// attribute that has a Java native type.
    pub fn collect(model: &MatterModel) -> Self {
        let datatypes: Vec<Element> = model.tagged(ElementTag::Datatype).cloned().collect();
        let attributes: Vec<Element> = model.tagged(ElementTag::Attribute).cloned().collect();

        let mut mapping = TypeMapping::default();
        mapping.insert("FabricIndex", Some("Integer".to_string()));
        // Semantic tag namespace fields carry no datatype of their own.
        mapping.insert("namespace", Some("Integer".to_string()));
        mapping.insert("tag", Some("Integer".to_string()));

        for global in datatypes.iter().chain(attributes.iter()) {
            if let Some(native) = native_java_type(global) {
                mapping.insert(global.name.clone(), Some(native.to_string()));
            }
        }

        Self {
            datatypes,
            attributes,
            mapping,
        }
    }
}

/// Runs the whole pipeline over a loaded model.
///
/// Per-cluster resolution carries no cross-cluster dependency; the borrowing
/// pass does, so it runs once every cluster is in place.
pub fn resolve_model(model: &MatterModel, config: &GeneratorConfig) -> ResolvedModel {
    let globals = GlobalScope::collect(model);

    let mut clusters = Vec::new();
    for candidate in model.tagged(ElementTag::Cluster) {
        if config.skip_clusters.contains(candidate.name.as_str()) {
            // Inheritance shapes the resolver does not model yet.
            debug!("Skipping cluster {} (configured exclusion)", candidate.name);
            continue;
        }
        clusters.push(cluster::resolve_cluster(model, candidate, &globals));
    }

    borrow::borrow_cross_cluster_types(&mut clusters);
    borrow::apply_manual_borrows(&mut clusters, &config.manual_borrows);

    let device_types: Vec<Element> = model
        .tagged(ElementTag::DeviceType)
        .filter(|d| d.id.is_some())
        .cloned()
        .collect();

    info!(
        "Resolved {} clusters and {} device types",
        clusters.len(),
        device_types.len()
    );

    ResolvedModel {
        base: base_cluster_model(&globals),
        device_types,
        clusters,
    }
}

/// The globally scoped enums, structured records and bitmaps, emitted once
/// outside any cluster. Structured records go through the type mapper with
/// the global table; enums and bitmaps are emitted by name only.
fn base_cluster_model(globals: &GlobalScope) -> BaseClusterModel {
    let all = || globals.datatypes.iter().chain(globals.attributes.iter());
    BaseClusterModel {
        enums: all()
            .filter(|e| e.type_starts_with("enum"))
            .cloned()
            .collect(),
        structs: all()
            .filter(|e| e.type_starts_with("struct"))
            .map(|e| mapper::map_element(&globals.mapping, e))
            .collect(),
        bitmaps: all()
            .filter(|e| e.type_starts_with("map"))
            .cloned()
            .collect(),
    }
}
