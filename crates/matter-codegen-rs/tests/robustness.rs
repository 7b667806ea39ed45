// crates/matter-codegen-rs/tests/robustness.rs

//! Integration tests focused on error handling and degradation.
//!
//! A bad dump must abort before any artifact is produced; incomplete but
//! well-formed data must degrade locally (placeholder types, skipped
//! inheritance, unresolved borrows) without failing the run.

use matter_codegen_rs::{
    builder, load_model_from_str, resolve_model, resolve_model_from_str, CodegenError,
    GeneratorConfig,
};

#[test]
fn test_malformed_json_aborts_the_run() {
    let err = load_model_from_str("{\"children\": [").unwrap_err();
    assert!(matches!(err, CodegenError::JsonParsing(_)));
}

#[test]
fn test_unknown_tag_aborts_the_run() {
    let err = load_model_from_str(r#"{"children": [{"tag": "gizmo", "name": "X"}]}"#).unwrap_err();
    assert!(matches!(err, CodegenError::JsonParsing(_)));
}

#[test]
fn test_empty_element_name_aborts_the_run() {
    let err = load_model_from_str(
        r#"{"children": [
            {"tag": "cluster", "name": "OnOff", "children": [
                {"tag": "attribute", "name": ""}
            ]}
        ]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, CodegenError::MalformedModel { .. }));
}

#[test]
fn test_invalid_hex_id_aborts_the_run() {
    let err = load_model_from_str(
        r#"{"children": [{"tag": "cluster", "name": "OnOff", "id": "0xNOPE"}]}"#,
    )
    .unwrap_err();
    assert!(matches!(err, CodegenError::JsonParsing(_)));
}

#[test]
fn test_empty_model_resolves_to_empty_output() {
    let resolved = resolve_model_from_str(r#"{"children": []}"#, &GeneratorConfig::default())
        .expect("empty model should resolve");
    assert!(resolved.clusters.is_empty());
    assert!(resolved.device_types.is_empty());
    assert!(resolved.base.enums.is_empty());
}

/// An unknown parent cluster is not an error; the cluster resolves with no
/// inherited members.
#[test]
fn test_unknown_parent_degrades() {
    let resolved = resolve_model_from_str(
        r#"{"children": [
            {"tag": "datatype", "name": "uint8"},
            {"tag": "cluster", "name": "DishwasherMode", "id": "0x0059", "type": "ModeBase",
             "children": [
                {"tag": "attribute", "name": "CurrentMode", "id": 1, "type": "uint8",
                 "conformance": "M"}
             ]}
        ]}"#,
        &GeneratorConfig::default(),
    )
    .unwrap();

    let cluster = resolved.cluster("DishwasherMode").unwrap();
    assert!(cluster.datatypes.is_empty());
    assert_eq!(cluster.attributes.len(), 1);
    assert_eq!(
        cluster.attributes[0].mapped_type.as_deref(),
        Some("Integer")
    );
}

/// A dotted reference into a cluster that does not exist stays in the table,
/// but the elements handed to the renderer still carry only bare names.
#[test]
fn test_unresolvable_dotted_reference_degrades() {
    let resolved = resolve_model_from_str(
        r#"{"children": [
            {"tag": "cluster", "name": "ColorControl", "id": "0x0300", "children": [
                {"tag": "datatype", "name": "MoveMode", "type": "Haunted.MoveModeEnum"},
                {"tag": "command", "name": "MoveColor", "id": 8, "direction": "request",
                 "children": [
                    {"tag": "field", "name": "Mode", "type": "MoveMode", "conformance": "O"}
                 ]}
            ]}
        ]}"#,
        &GeneratorConfig::default(),
    )
    .unwrap();

    let cluster = resolved.cluster("ColorControl").unwrap();
    // No definition arrived, so no collection grew.
    assert!(cluster.enums.is_empty());
    // The mapper still strips the qualifier from emitted elements.
    let mode = &cluster.commands[0].children[0];
    assert_eq!(mode.mapped_type.as_deref(), Some("MoveModeEnum"));
}

/// An attribute without any type information degrades to the generic
/// placeholder instead of failing.
#[test]
fn test_missing_type_information_degrades() {
    let resolved = resolve_model_from_str(
        r#"{"children": [
            {"tag": "cluster", "name": "Sparse", "id": 1, "children": [
                {"tag": "attribute", "name": "Mystery", "id": 0, "conformance": "O"}
            ]}
        ]}"#,
        &GeneratorConfig::default(),
    )
    .unwrap();

    let cluster = resolved.cluster("Sparse").unwrap();
    assert_eq!(cluster.attributes[0].mapped_type.as_deref(), Some("String"));
}

/// A command referencing a missing sibling keeps resolving, with an empty
/// field list.
#[test]
fn test_missing_sibling_command_degrades() {
    let resolved = resolve_model_from_str(
        r#"{"children": [
            {"tag": "cluster", "name": "LevelControl", "id": "0x0008", "children": [
                {"tag": "command", "name": "MoveToLevelWithOnOff", "id": 4,
                 "direction": "request", "type": "MoveToLevel", "conformance": "M",
                 "children": [
                    {"tag": "field", "name": "Stale", "type": "uint8", "conformance": "M"}
                 ]}
            ]}
        ]}"#,
        &GeneratorConfig::default(),
    )
    .unwrap();

    let cluster = resolved.cluster("LevelControl").unwrap();
    assert_eq!(cluster.commands.len(), 1);
    assert!(cluster.commands[0].children.is_empty());
}

/// Rendering a cluster that has no id is refused rather than producing a
/// broken artifact.
#[test]
fn test_rendering_idless_cluster_is_refused() {
    let model = load_model_from_str(
        r#"{"children": [{"tag": "cluster", "name": "ModeBase"}]}"#,
    )
    .unwrap();
    let resolved = resolve_model(&model, &GeneratorConfig::default());

    let err = builder::cluster_context_to_string(resolved.cluster("ModeBase").unwrap())
        .unwrap_err();
    assert!(matches!(
        err,
        CodegenError::MissingAttribute { attribute: "id" }
    ));
}
