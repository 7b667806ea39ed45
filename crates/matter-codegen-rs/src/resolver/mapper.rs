// crates/matter-codegen-rs/src/resolver/mapper.rs

//! The type mapper: annotates an element tree with Java types.

use crate::fmt;
use crate::resolver::mapping::{TypeMapping, DEFAULT_MAPPED_TYPE};
use matter_model_rs::{split_qualified, Element, ElementTag};

/// Maps `element` and every descendant against `table`, returning a new tree
/// with `mapped_type` filled in. The input is left untouched.
///
/// Enum-typed attributes and all bitmap-/struct-typed elements are emitted as
/// named inner classes, so they map to their own names and are resolved by
/// reference later. Everything else goes through the table, falling back to
/// the raw type name, and finally to [`DEFAULT_MAPPED_TYPE`] when the element
/// carries no type at all. A dotted cross-cluster reference keeps only the
/// bare type name here; the borrowing pass copies the definition in
/// afterwards.
pub fn map_element(table: &TypeMapping, element: &Element) -> Element {
    let declared = element.type_name.as_deref();

    let own_name = declared.is_some_and(|t| t.starts_with("map") || t.starts_with("struct"))
        || (element.tag == ElementTag::Attribute
            && declared.is_some_and(|t| t.starts_with("enum")));

    let mut mapped = if own_name {
        element.name.clone()
    } else {
        declared
            .and_then(|t| table.lookup(t))
            .or(declared)
            .unwrap_or(DEFAULT_MAPPED_TYPE)
            .to_string()
    };

    if mapped == "list" {
        let element_type = element
            .children
            .first()
            .and_then(|child| child.type_name.as_deref())
            .map(|t| table.lookup(t).unwrap_or(t))
            .unwrap_or(DEFAULT_MAPPED_TYPE);
        mapped = format!("List<{}>", fmt::to_upper_camel_case(element_type));
    }

    if let Some((_, bare)) = split_qualified(&mapped) {
        mapped = bare.to_string();
    }

    let children: Vec<Element> = element
        .children
        .iter()
        .map(|child| map_element(table, child))
        .collect();

    let mut mapped_element = element.clone();
    mapped_element.children = children;
    mapped_element.mapped_type = Some(mapped);
    mapped_element
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(tag: ElementTag, name: &str, type_name: Option<&str>) -> Element {
        let mut out = Element::new(tag, name);
        out.type_name = type_name.map(String::from);
        out
    }

    fn table() -> TypeMapping {
        let mut table = TypeMapping::default();
        table.insert("uint16", Some("Integer".to_string()));
        table.insert("percent", Some("Integer".to_string()));
        table.insert("MoveMode", Some("LevelControl.MoveModeEnum".to_string()));
        table
    }

    #[test]
    fn test_primitive_goes_through_table() {
        let attr = element(ElementTag::Attribute, "OnTime", Some("uint16"));
        let mapped = map_element(&table(), &attr);
        assert_eq!(mapped.mapped_type.as_deref(), Some("Integer"));
    }

    #[test]
    fn test_unknown_type_falls_back_to_raw_name() {
        let attr = element(ElementTag::Attribute, "Mode", Some("ModeEnum16"));
        let mapped = map_element(&table(), &attr);
        assert_eq!(mapped.mapped_type.as_deref(), Some("ModeEnum16"));
    }

    #[test]
    fn test_missing_type_degrades_to_default() {
        let attr = element(ElementTag::Attribute, "Mystery", None);
        let mapped = map_element(&table(), &attr);
        assert_eq!(mapped.mapped_type.as_deref(), Some(DEFAULT_MAPPED_TYPE));
    }

    #[test]
    fn test_enum_attribute_maps_to_own_name() {
        let attr = element(ElementTag::Attribute, "StartUpOnOff", Some("enum8"));
        let mapped = map_element(&table(), &attr);
        assert_eq!(mapped.mapped_type.as_deref(), Some("StartUpOnOff"));
    }

    #[test]
    fn test_bitmap_field_maps_to_own_name() {
        // Bitmap- and struct-typed elements become named classes whatever
        // their tag; enum-typed ones only when they are attributes.
        let field = element(ElementTag::Field, "OnOffControl", Some("map8"));
        let mapped = map_element(&table(), &field);
        assert_eq!(mapped.mapped_type.as_deref(), Some("OnOffControl"));

        let field = element(ElementTag::Field, "Status", Some("enum8"));
        let mapped = map_element(&table(), &field);
        assert_eq!(mapped.mapped_type.as_deref(), Some("enum8"));
    }

    #[test]
    fn test_list_wraps_first_child_type() {
        let mut list = element(ElementTag::Attribute, "OnLevels", Some("list"));
        list.children = vec![element(ElementTag::Field, "entry", Some("percent"))];
        let mapped = map_element(&table(), &list);
        assert_eq!(mapped.mapped_type.as_deref(), Some("List<Integer>"));

        // Unmapped element types keep their raw (camel-cased) name.
        let mut list = element(ElementTag::Attribute, "Modes", Some("list"));
        list.children = vec![element(ElementTag::Field, "entry", Some("ModeOptionStruct"))];
        let mapped = map_element(&table(), &list);
        assert_eq!(mapped.mapped_type.as_deref(), Some("List<ModeOptionStruct>"));
    }

    #[test]
    fn test_list_without_children_degrades() {
        let list = element(ElementTag::Attribute, "Empty", Some("list"));
        let mapped = map_element(&table(), &list);
        assert_eq!(mapped.mapped_type.as_deref(), Some("List<String>"));
    }

    #[test]
    fn test_dotted_reference_is_stripped_to_bare_name() {
        let dt = element(ElementTag::Field, "Rate", Some("MoveMode"));
        let mapped = map_element(&table(), &dt);
        assert_eq!(mapped.mapped_type.as_deref(), Some("MoveModeEnum"));
    }

    #[test]
    fn test_children_are_mapped_and_input_untouched() {
        let mut command = element(ElementTag::Command, "MoveToLevel", None);
        command.children = vec![element(ElementTag::Field, "Level", Some("uint16"))];

        let mapped = map_element(&table(), &command);
        assert_eq!(
            mapped.children[0].mapped_type.as_deref(),
            Some("Integer")
        );
        assert_eq!(command.children[0].mapped_type, None);
    }
}
