// crates/matter-codegen-rs/src/lib.rs

//! Resolves the Matter cluster specification model into per-cluster
//! code-generation inputs.
//!
//! The specification model arrives as a loosely-typed element tree with
//! implicit cluster inheritance, cross-cluster type references, deprecated
//! and conditional fields, and primitive-type ambiguity. This crate turns it
//! into fully concrete, self-contained cluster views that a template engine
//! can render mechanically:
//!
//! - [`load_model_from_str`]: parse and validate the JSON model dump.
//! - [`resolve_model`]: run the resolution pipeline (type mapping,
//!   conformance filtering, inheritance merging, cross-cluster borrowing).
//! - [`builder`]: serialize the per-cluster and global render contexts the
//!   external templating layer consumes.
//!
//! The template engine itself, the output directory layout and the live
//! protocol runtime are separate concerns and live outside this crate.

// --- Crate Modules ---

pub mod builder;
mod config;
mod error;
pub mod fmt;
mod parser;
pub mod resolver;
mod types;

// --- Public API Re-exports ---

pub use config::{GeneratorConfig, GeneratorConfigOverrides, ManualBorrow};
pub use error::CodegenError;
pub use parser::load_model_from_str;
pub use resolver::resolve_model;
pub use types::{BaseClusterModel, ResolvedCluster, ResolvedModel};

use matter_model_rs::MatterModel;

/// Loads a model dump and runs the full resolution pipeline in one call.
///
/// # Errors
/// Returns a [`CodegenError`] if the dump is malformed; resolution itself
/// degrades locally (placeholder types, skipped inheritance) instead of
/// failing.
pub fn resolve_model_from_str(
    json: &str,
    config: &GeneratorConfig,
) -> Result<ResolvedModel, CodegenError> {
    let model: MatterModel = load_model_from_str(json)?;
    Ok(resolve_model(&model, config))
}
