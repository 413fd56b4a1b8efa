//! Sequence expansion (arrays and arrays of arrays).

use crate::error::{ExpandError, Result};
use crate::schema::{Schema, SequenceKind};
use crate::types::{join_values, StyleObject, StyleValue};

use super::mapping::expand_mapping;

/// Separator for properties registered in a sequence table.
const SPACE: &str = " ";

/// Separator for properties missing from the sequence table.
const COMMA: &str = ",";

/// Result of expanding a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// A single property value.
    Joined(String),
    /// One value per element, for arrays of compound values.
    PerItem(Vec<String>),
}

impl Expansion {
    /// Convert into the value stored back on the style object.
    pub fn into_value(self) -> StyleValue {
        match self {
            Expansion::Joined(text) => StyleValue::text(text),
            Expansion::PerItem(items) => StyleValue::from(items),
        }
    }

    /// Flatten into one string. Per-item values are comma-joined.
    pub fn into_text(self) -> String {
        match self {
            Expansion::Joined(text) => text,
            Expansion::PerItem(items) => items.join(COMMA),
        }
    }
}

/// Expand a sequence value owned by `property`.
///
/// Checked in order:
/// 1. elements are compound values: each is expanded on its own with the
///    same property, giving [`Expansion::PerItem`];
/// 2. `property` is not in the `kind` sequence table: elements join with a
///    comma (e.g. `transition-property: a,b`);
/// 3. elements are sequences: only the first nested sequence is expanded;
/// 4. otherwise elements join with a space (e.g. `margin: 1px 2px`).
///
/// An empty sequence is rejected with [`ExpandError::EmptySequence`].
pub fn expand_sequence(
    items: &[StyleValue],
    property: &str,
    kind: SequenceKind,
    schema: &Schema,
) -> Result<Expansion> {
    let first = items
        .first()
        .ok_or_else(|| ExpandError::empty_sequence(property))?;

    if let StyleValue::Mapping(_) = first {
        let empty = StyleObject::new();
        let expanded = items
            .iter()
            .map(|item| expand_mapping(item.as_mapping().unwrap_or(&empty), property, schema))
            .collect::<Result<Vec<_>>>()?;
        return Ok(Expansion::PerItem(expanded));
    }

    if !schema.sequences(kind).contains(property) {
        log::debug!(
            "`{}` is not a registered {:?} sequence, joining with commas",
            property,
            kind
        );
        return Ok(Expansion::Joined(join_values(items, COMMA)));
    }

    if let StyleValue::Sequence(nested) = first {
        return expand_sequence(nested, property, kind, schema);
    }

    Ok(Expansion::Joined(join_values(items, SPACE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn seq(value: Value) -> Vec<StyleValue> {
        match StyleValue::from(value) {
            StyleValue::Sequence(items) => items,
            other => panic!("expected a sequence, got {:?}", other),
        }
    }

    fn flat(value: Value, property: &str) -> Result<Expansion> {
        expand_sequence(&seq(value), property, SequenceKind::Flat, &Schema::builtin())
    }

    #[test]
    fn test_registered_property_joins_with_space() {
        let result = flat(json!([1, 2, 3, 4]), "margin").unwrap();
        assert_eq!(result, Expansion::Joined("1 2 3 4".to_string()));
    }

    #[test]
    fn test_unregistered_property_joins_with_comma() {
        let result = flat(json!(["a", "b"]), "transitionProperty").unwrap();
        assert_eq!(result, Expansion::Joined("a,b".to_string()));
    }

    #[test]
    fn test_nested_sequence_expands_first_group_only() {
        let result = flat(
            json!([["rotate(30deg)", "scale(2)"], ["translate(0, 0)"]]),
            "transform",
        )
        .unwrap();
        assert_eq!(result, Expansion::Joined("rotate(30deg) scale(2)".to_string()));
    }

    #[test]
    fn test_unregistered_nested_sequence_joins_everything() {
        let result = flat(json!([["a", "b"], ["c"]]), "will-change").unwrap();
        assert_eq!(result, Expansion::Joined("a,b,c".to_string()));
    }

    #[test]
    fn test_mapping_elements_expand_per_item() {
        let result = flat(
            json!([
                {"x": 0, "y": 0, "blur": "2px", "color": "black"},
                {"x": "1px", "y": "1px", "color": "red", "inset": "inset"}
            ]),
            "box-shadow",
        )
        .unwrap();
        assert_eq!(
            result,
            Expansion::PerItem(vec![
                "0 0 2px 0 black".to_string(),
                "1px 1px 0 0 red inset".to_string(),
            ])
        );
    }

    #[test]
    fn test_mapping_elements_with_unknown_property() {
        let result = flat(json!([{"a": 1}, {"b": 2}]), "unknown").unwrap();
        assert_eq!(result, Expansion::PerItem(vec![String::new(), String::new()]));
    }

    #[test]
    fn test_nested_table_is_separate() {
        let items = seq(json!(["center", "top"]));
        let schema = Schema::builtin();

        let nested = expand_sequence(&items, "position", SequenceKind::Nested, &schema).unwrap();
        assert_eq!(nested, Expansion::Joined("center top".to_string()));

        let flat = expand_sequence(&items, "position", SequenceKind::Flat, &schema).unwrap();
        assert_eq!(flat, Expansion::Joined("center,top".to_string()));
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        let result = flat(json!([]), "margin");
        assert!(matches!(
            result,
            Err(ExpandError::EmptySequence { property }) if property == "margin"
        ));
    }

    #[test]
    fn test_empty_nested_group_is_rejected() {
        let result = flat(json!([[], [1]]), "margin");
        assert!(matches!(result, Err(ExpandError::EmptySequence { .. })));
    }

    #[test]
    fn test_into_value_and_text() {
        let per_item = Expansion::PerItem(vec!["a b".to_string(), "c".to_string()]);
        assert_eq!(per_item.clone().into_text(), "a b,c");
        assert_eq!(per_item.into_value(), StyleValue::from(json!(["a b", "c"])));

        let joined = Expansion::Joined("1 2".to_string());
        assert_eq!(joined.into_value(), StyleValue::text("1 2"));
    }
}
