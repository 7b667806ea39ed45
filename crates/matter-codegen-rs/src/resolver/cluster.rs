// crates/matter-codegen-rs/src/resolver/cluster.rs

//! Per-cluster resolution: member classification, inheritance merging and
//! type-table build-up.

use crate::resolver::filter;
use crate::resolver::mapper::map_element;
use crate::resolver::mapping::{native_java_type, TypeMapping};
use crate::resolver::GlobalScope;
use crate::types::ResolvedCluster;
use log::{debug, warn};
use matter_model_rs::{CommandDirection, Element, ElementTag, MatterModel};

/// Resolves one cluster against the model and the global scope.
///
/// The returned cluster is self-contained except for dotted cross-cluster
/// references, which stay parked in the type table until the borrowing pass
/// copies the definitions in.
pub fn resolve_cluster(
    model: &MatterModel,
    cluster: &Element,
    globals: &GlobalScope,
) -> ResolvedCluster {
    let mut mapping = globals.mapping.clone();

    // Classify the cluster's own members. Bitmaps and enums are picked out by
    // type family, datatypes by tag; structured records cover struct-typed
    // datatypes and events.
    let mut datatypes: Vec<Element> = cluster
        .children
        .iter()
        .filter(|c| c.tag == ElementTag::Datatype)
        .cloned()
        .collect();
    let mut bitmaps: Vec<Element> = cluster
        .children
        .iter()
        .filter(|c| c.type_starts_with("map"))
        .cloned()
        .collect();
    let mut enums: Vec<Element> = cluster
        .children
        .iter()
        .filter(|c| c.type_starts_with("enum"))
        .cloned()
        .collect();
    let mut structs: Vec<Element> = cluster
        .children
        .iter()
        .filter(|c| c.type_name.as_deref() == Some("struct") || c.tag == ElementTag::Event)
        .map(|c| map_element(&mapping, c))
        .collect();

    merge_parent(
        model,
        cluster,
        &mapping,
        &mut datatypes,
        &mut bitmaps,
        &mut enums,
        &mut structs,
    );

    // Local and inherited datatypes feed the cluster table. A dotted type is
    // registered verbatim so the borrowing pass can find it later.
    for dt in &datatypes {
        if dt.qualified_type().is_some() {
            mapping.insert(dt.name.clone(), dt.type_name.clone());
        } else if let Some(native) = native_java_type(dt) {
            mapping.insert(dt.name.clone(), Some(native.to_string()));
        }
    }

    let attributes = resolve_attributes(cluster, globals, &mut mapping, &mut bitmaps);
    let commands = resolve_commands(cluster, &mut mapping, &mut bitmaps);

    ResolvedCluster {
        name: cluster.name.clone(),
        id: cluster.id,
        attributes,
        commands,
        datatypes,
        enums,
        bitmaps,
        structs,
        type_mapping: mapping,
    }
}

/// Merges datatypes, bitmaps, enums and structured records from a declared
/// parent cluster. The cluster's own definitions win on name collisions; an
/// unknown parent just means no inherited members.
fn merge_parent(
    model: &MatterModel,
    cluster: &Element,
    mapping: &TypeMapping,
    datatypes: &mut Vec<Element>,
    bitmaps: &mut Vec<Element>,
    enums: &mut Vec<Element>,
    structs: &mut Vec<Element>,
) {
    let Some(parent_name) = cluster.type_name.as_deref() else {
        return;
    };
    let Some(parent) = model.find(parent_name) else {
        warn!(
            "Cluster {} declares unknown parent {parent_name}; resolving without inherited members",
            cluster.name
        );
        return;
    };
    debug!("Merging members of parent {parent_name} into {}", cluster.name);

    combine_by_name(
        datatypes,
        parent
            .children
            .iter()
            .filter(|c| c.tag == ElementTag::Datatype)
            .cloned(),
    );
    combine_by_name(
        bitmaps,
        parent
            .children
            .iter()
            .filter(|c| c.type_starts_with("map"))
            .cloned(),
    );
    combine_by_name(
        enums,
        parent
            .children
            .iter()
            .filter(|c| c.type_starts_with("enum"))
            .cloned(),
    );
    // Inherited structured records are mapped with the inheriting cluster's
    // own table.
    combine_by_name(
        structs,
        parent
            .children
            .iter()
            .filter(|c| c.type_name.as_deref() == Some("struct"))
            .map(|c| map_element(mapping, c)),
    );
}

/// Appends `extra` entries whose names are not already present.
fn combine_by_name(target: &mut Vec<Element>, extra: impl Iterator<Item = Element>) {
    for item in extra {
        if !target.iter().any(|existing| existing.name == item.name) {
            target.push(item);
        }
    }
}

/// Extracts, filters and maps the cluster's attributes, then registers every
/// attribute name in the cluster table so commands that reference attribute
/// types resolve.
fn resolve_attributes(
    cluster: &Element,
    globals: &GlobalScope,
    mapping: &mut TypeMapping,
    bitmaps: &mut Vec<Element>,
) -> Vec<Element> {
    let raw: Vec<Element> = cluster
        .children
        .iter()
        .filter(|c| c.tag == ElementTag::Attribute)
        .cloned()
        .collect();

    let attributes: Vec<Element> = filter::retain_active(filter::dedupe_by_name(raw))
        .iter()
        .map(|attr| map_element(mapping, &filter::filter_children(attr)))
        .collect();

    for attr in &attributes {
        if attr.qualified_type().is_some() {
            mapping.insert(attr.name.clone(), attr.type_name.clone());
            continue;
        }
        let target = native_java_type(attr)
            .map(str::to_string)
            .or_else(|| attr.type_name.clone());
        mapping.insert(attr.name.clone(), target);

        // Attributes like FeatureMap restate a global bitmap attribute by
        // type; materialize them as a concrete local bitmap so a class is
        // emitted for them.
        if !attr.children.is_empty() {
            let restates_global_bitmap = attr
                .type_name
                .as_deref()
                .and_then(|t| globals.attributes.iter().find(|g| g.name == t))
                .is_some_and(|g| g.type_starts_with("map"));
            if restates_global_bitmap && !bitmaps.iter().any(|b| b.name == attr.name) {
                bitmaps.push(attr.clone());
            }
        }
    }

    attributes
}

/// Extracts request commands. A command that references a sibling through its
/// type adopts that sibling's fields; bitmap-typed fields surface as concrete
/// bitmap definitions.
fn resolve_commands(
    cluster: &Element,
    mapping: &mut TypeMapping,
    bitmaps: &mut Vec<Element>,
) -> Vec<Element> {
    let raw: Vec<&Element> = cluster
        .children
        .iter()
        .filter(|c| c.tag == ElementTag::Command)
        .collect();

    let mut commands = Vec::new();
    for original in &raw {
        let mut command = (*original).clone();

        // Request/response pairs share one field list through a sibling
        // reference.
        if let Some(reference) = command.type_name.clone() {
            if let Some(sibling) = raw.iter().find(|c| c.name == reference) {
                command.children = sibling.children.clone();
            } else if command.qualified_type().is_none() {
                warn!(
                    "Command {} of {} references unknown sibling {reference}",
                    command.name, cluster.name
                );
                command.children.clear();
            }
        }

        let command = filter::filter_children(&command);
        if command.direction != Some(CommandDirection::Request) {
            continue;
        }

        // A dotted command type points at another cluster's definition; park
        // it in the table for the borrowing pass instead of emitting the
        // command.
        if command.qualified_type().is_some() {
            mapping.insert(command.name.clone(), command.type_name.clone());
            continue;
        }

        let mapped = map_element(mapping, &command);
        for child in &mapped.children {
            if child.type_starts_with("map") && !bitmaps.iter().any(|b| b.name == child.name) {
                bitmaps.push(child.clone());
            }
        }
        commands.push(mapped);
    }

    commands
}
