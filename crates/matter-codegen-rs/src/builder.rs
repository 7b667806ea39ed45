// crates/matter-codegen-rs/src/builder.rs

//! Serializes resolved data into the JSON render contexts consumed by the
//! templating layer.
//!
//! The template engine, its template files and the output directory layout
//! live outside this crate; the contract here is one self-contained JSON
//! context per artifact. Five artifacts exist per run: one context per
//! eligible cluster, plus the shared base-cluster model, the device-type
//! enumeration, the cluster registry and the cluster constants.

use crate::error::CodegenError;
use crate::fmt;
use crate::types::{ResolvedCluster, ResolvedModel};
use serde::Serialize;

/// Render context for one generated cluster source file.
///
/// # Errors
/// Returns an error for clusters without an id; those never get their own
/// source file.
pub fn cluster_context_to_string(cluster: &ResolvedCluster) -> Result<String, CodegenError> {
    let id = cluster
        .id
        .ok_or(CodegenError::MissingAttribute { attribute: "id" })?;

    #[derive(Serialize)]
    struct Context<'a> {
        #[serde(flatten)]
        cluster: &'a ResolvedCluster,
        #[serde(rename = "idHex")]
        id_hex: String,
        #[serde(rename = "className")]
        class_name: String,
    }

    to_pretty_json(&Context {
        cluster,
        id_hex: fmt::to_hex(id, 4),
        class_name: format!("{}Cluster", fmt::to_upper_camel_case(&cluster.name)),
    })
}

/// Render context for the shared base-cluster source (global enums,
/// structured records and bitmaps).
pub fn base_cluster_context_to_string(model: &ResolvedModel) -> Result<String, CodegenError> {
    to_pretty_json(&model.base)
}

/// Render context for the device-type enumeration.
pub fn device_types_context_to_string(model: &ResolvedModel) -> Result<String, CodegenError> {
    #[derive(Serialize)]
    struct Entry<'a> {
        name: &'a str,
        constant: String,
        id: u64,
        #[serde(rename = "idHex")]
        id_hex: String,
    }

    #[derive(Serialize)]
    struct Context<'a> {
        #[serde(rename = "deviceTypes")]
        device_types: Vec<Entry<'a>>,
    }

    let device_types = model
        .device_types
        .iter()
        .filter_map(|device| {
            device.id.map(|id| Entry {
                name: &device.name,
                constant: fmt::to_enum_field(&device.name),
                id,
                id_hex: fmt::to_hex(id, 4),
            })
        })
        .collect();

    to_pretty_json(&Context { device_types })
}

/// Render context for the cluster registry: every resolved cluster, id or
/// not, with its generated class name.
pub fn cluster_registry_context_to_string(model: &ResolvedModel) -> Result<String, CodegenError> {
    #[derive(Serialize)]
    struct Entry<'a> {
        name: &'a str,
        #[serde(rename = "className")]
        class_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<u64>,
    }

    #[derive(Serialize)]
    struct Context<'a> {
        clusters: Vec<Entry<'a>>,
    }

    let clusters = model
        .clusters
        .iter()
        .map(|cluster| Entry {
            name: &cluster.name,
            class_name: format!("{}Cluster", fmt::to_upper_camel_case(&cluster.name)),
            id: cluster.id,
        })
        .collect();

    to_pretty_json(&Context { clusters })
}

/// Render context for the cluster-constants source: stable constant names and
/// hex ids for every cluster that has one.
pub fn cluster_constants_context_to_string(model: &ResolvedModel) -> Result<String, CodegenError> {
    #[derive(Serialize)]
    struct Entry<'a> {
        name: &'a str,
        constant: String,
        id: u64,
        #[serde(rename = "idHex")]
        id_hex: String,
    }

    #[derive(Serialize)]
    struct Context<'a> {
        clusters: Vec<Entry<'a>>,
    }

    let clusters = model
        .clusters
        .iter()
        .filter_map(|cluster| {
            cluster.id.map(|id| Entry {
                name: &cluster.name,
                constant: fmt::to_enum_field(&cluster.name),
                id,
                id_hex: fmt::to_hex(id, 4),
            })
        })
        .collect();

    to_pretty_json(&Context { clusters })
}

/// The whole resolved model as one JSON document; handy for diffing runs and
/// for renderers that assemble their own contexts.
pub fn resolved_model_to_string(model: &ResolvedModel) -> Result<String, CodegenError> {
    to_pretty_json(model)
}

fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, CodegenError> {
    serde_json::to_string_pretty(value).map_err(CodegenError::JsonSerializing)
}
