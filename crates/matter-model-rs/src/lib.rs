// crates/matter-model-rs/src/lib.rs

//! Element tree types for the Matter cluster specification model.
//!
//! The Matter data model is published as an ordered tree of tagged elements:
//! clusters with their attributes, commands and events, shared datatypes, and
//! device types. An external exporter dumps that tree to JSON; this crate
//! provides the typed element graph that the code-generation resolver in
//! `matter-codegen-rs` consumes.
//!
//! The crate is deliberately dumb: it carries data and a handful of accessors
//! (conformance codes, access markers, dotted type references) and leaves all
//! resolution logic to the consumer.

// --- Crate Modules ---

mod conformance;
mod element;
mod ids;

// --- Public API Re-exports ---

pub use conformance::Conformance;
pub use element::{split_qualified, CommandDirection, Element, ElementTag, MatterModel};
pub use ids::{parse_hex_u32, parse_hex_u64};
