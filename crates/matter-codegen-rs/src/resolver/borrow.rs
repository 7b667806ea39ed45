// crates/matter-codegen-rs/src/resolver/borrow.rs

//! Cross-cluster type borrowing.
//!
//! Runs strictly after every cluster has been resolved: a dotted entry in one
//! cluster's table is satisfied by copying the definition out of the named
//! sibling cluster, after which the consuming cluster is self-contained. A
//! handful of cluster pairs need the copy forced through the configured
//! manual list because the specification never declares the relationship
//! structurally.

use crate::config::ManualBorrow;
use crate::resolver::mapper::map_element;
use crate::types::ResolvedCluster;
use log::{debug, warn};
use matter_model_rs::Element;

/// Scans every cluster table for dotted references and copies each referenced
/// definition into the consuming cluster. Idempotent: definitions already
/// present are not copied again.
pub fn borrow_cross_cluster_types(clusters: &mut [ResolvedCluster]) {
    for index in 0..clusters.len() {
        let wanted = clusters[index].type_mapping.dotted_targets();
        for (source_name, type_name) in wanted {
            if clusters[index].name == source_name {
                continue;
            }
            borrow_named_type(clusters, &source_name, index, &type_name);
        }
    }
}

/// Applies the configured source → destination copies.
pub fn apply_manual_borrows(clusters: &mut [ResolvedCluster], manual: &[ManualBorrow]) {
    for borrow in manual {
        let Some(dest) = clusters
            .iter()
            .position(|c| c.name == borrow.destination)
        else {
            warn!(
                "Manual borrow destination {} not present; skipping",
                borrow.destination
            );
            continue;
        };
        borrow_named_type(clusters, &borrow.source, dest, &borrow.type_name);
    }
}

/// Copies `type_name` out of the named source cluster into `clusters[dest]`.
/// An unresolvable reference is skipped, not an error.
fn borrow_named_type(
    clusters: &mut [ResolvedCluster],
    source_name: &str,
    dest: usize,
    type_name: &str,
) {
    let definition = clusters
        .iter()
        .find(|c| c.name == source_name)
        .and_then(|source| find_definition(source, type_name))
        .cloned();

    let Some(definition) = definition else {
        warn!("Unresolved cross-cluster reference {source_name}.{type_name}; leaving entry as-is");
        return;
    };
    debug!(
        "Borrowing {source_name}.{type_name} into {}",
        clusters[dest].name
    );
    install_definition(&mut clusters[dest], type_name, definition);
}

/// Looks a definition up across the source cluster's collections, in
/// priority order.
fn find_definition<'a>(cluster: &'a ResolvedCluster, name: &str) -> Option<&'a Element> {
    let by_name = |list: &'a [Element]| list.iter().find(|e| e.name == name);
    by_name(&cluster.datatypes)
        .or_else(|| by_name(&cluster.enums))
        .or_else(|| by_name(&cluster.bitmaps))
        .or_else(|| by_name(&cluster.structs))
        .or_else(|| by_name(&cluster.attributes))
}

/// Registers the borrowed name locally, files the definition in the
/// collection matching its declared kind, and re-maps every command against
/// the updated table (commands may reference the newly available type).
fn install_definition(cluster: &mut ResolvedCluster, name: &str, definition: Element) {
    cluster
        .type_mapping
        .insert(name, Some(name.to_string()));

    if let Some(declared) = definition.type_name.as_deref() {
        let collection = if declared.starts_with("enum") {
            &mut cluster.enums
        } else if declared.starts_with("map") {
            &mut cluster.bitmaps
        } else if declared == "struct" {
            &mut cluster.structs
        } else {
            &mut cluster.datatypes
        };
        if !collection.iter().any(|e| e.name == definition.name) {
            collection.push(definition);
        }
    }

    let remapped: Vec<Element> = cluster
        .commands
        .iter()
        .map(|command| map_element(&cluster.type_mapping, command))
        .collect();
    cluster.commands = remapped;
}
