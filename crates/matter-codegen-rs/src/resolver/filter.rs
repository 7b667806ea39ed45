// crates/matter-codegen-rs/src/resolver/filter.rs

//! Conformance-driven filtering and duplicate-name resolution.

use matter_model_rs::Element;

/// True when the element is flagged deprecated (`D`) or disallowed (`X`).
fn is_dropped(element: &Element) -> bool {
    element
        .conformance
        .as_ref()
        .is_some_and(|c| c.is_deprecated() || c.is_disallowed())
}

/// Returns a copy of `element` without its deprecated/disallowed direct
/// children. Grandchildren are left alone.
pub fn filter_children(element: &Element) -> Element {
    let mut filtered = element.clone();
    filtered.children.retain(|child| !is_dropped(child));
    filtered
}

/// Drops deprecated and disallowed elements from a list.
pub fn retain_active(elements: Vec<Element>) -> Vec<Element> {
    elements.into_iter().filter(|e| !is_dropped(e)).collect()
}

/// Collapses repeated names in an attribute list.
///
/// The specification restates an attribute when a later edition narrows it
/// with a negative condition (`[!...]`); the restated entry then replaces the
/// original. Any other repeat keeps the first occurrence.
pub fn dedupe_by_name(elements: Vec<Element>) -> Vec<Element> {
    let mut out: Vec<Element> = Vec::new();
    for element in elements {
        match out.iter().position(|e| e.name == element.name) {
            Some(existing) => {
                let narrows = element
                    .conformance
                    .as_ref()
                    .is_some_and(|c| c.is_negative_conditional());
                if narrows {
                    out[existing] = element;
                }
            }
            None => out.push(element),
        }
    }
    out
}
