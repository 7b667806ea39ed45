// crates/matter-codegen-rs/src/parser.rs

use crate::error::CodegenError;
use matter_model_rs::{Element, MatterModel};

/// Parses a specification model dump (JSON) into a [`MatterModel`].
///
/// The dump is produced by an external exporter; this loader only checks the
/// structural invariants the resolver dereferences unconditionally. A bad
/// dump aborts the run here, before any cluster is resolved or any artifact
/// produced.
///
/// # Errors
/// Returns a [`CodegenError`] if the JSON is malformed or an element violates
/// a structural invariant (e.g. an empty name).
pub fn load_model_from_str(json: &str) -> Result<MatterModel, CodegenError> {
    let model: MatterModel = serde_json::from_str(json)?;
    validate_model(&model)?;
    Ok(model)
}

/// Walks the element forest and rejects nodes the pipeline cannot process.
fn validate_model(model: &MatterModel) -> Result<(), CodegenError> {
    for root in &model.children {
        validate_element(root, "model root")?;
    }
    Ok(())
}

fn validate_element(element: &Element, parent: &str) -> Result<(), CodegenError> {
    if element.name.trim().is_empty() {
        return Err(CodegenError::MalformedModel {
            context: "element with empty name",
            name: parent.to_string(),
        });
    }
    for child in &element.children {
        validate_element(child, &element.name)?;
    }
    Ok(())
}
