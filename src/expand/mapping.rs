//! Compound value expansion (e.g. a border object).

use crate::error::Result;
use crate::schema::{Schema, SequenceKind};
use crate::types::{StyleObject, StyleValue};

use super::sequence::expand_sequence;

/// Expand a compound value owned by `property` into one string.
///
/// Sub-properties are written in the order the schema declares them, not
/// the order they were given in. A sub-property that is missing, or set to
/// a falsy value (`null`, `false`, `0`, `""`), is replaced by the schema
/// default, or skipped when the default is null. An explicit `0` therefore
/// only renders through a `0` default.
///
/// Properties not registered as compound expand to an empty string.
pub fn expand_mapping(value: &StyleObject, property: &str, schema: &Schema) -> Result<String> {
    let subs = match schema.sub_properties(property) {
        Some(subs) => subs,
        None => {
            log::debug!("`{}` is not a registered compound property", property);
            return Ok(String::new());
        }
    };

    let mut parts = Vec::with_capacity(subs.len());

    for (sub, default) in subs {
        match value.get(sub) {
            Some(StyleValue::Sequence(items)) => {
                let expanded = expand_sequence(items, sub, SequenceKind::Nested, schema)?;
                parts.push(expanded.into_text());
            }
            Some(StyleValue::Primitive(p)) if p.is_truthy() => parts.push(p.to_string()),
            // compound sub-values have no text form and count as unset
            _ if default.is_null() => {}
            _ => parts.push(default.to_string()),
        }
    }

    Ok(parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpandError;
    use crate::types::Primitive;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn object(value: Value) -> StyleObject {
        serde_json::from_value(value).unwrap()
    }

    fn abc_schema(b_default: Primitive) -> Schema {
        let mut schema = Schema::new();
        schema.add_compound(
            "thing",
            [("a", Primitive::Null), ("b", b_default), ("c", Primitive::Null)],
        );
        schema
    }

    #[test]
    fn test_border_in_schema_order() {
        let border = object(json!({"width": 1, "style": "solid", "color": "red"}));
        let result = expand_mapping(&border, "border", &Schema::builtin()).unwrap();
        assert_eq!(result, "1 solid red");
    }

    #[test]
    fn test_input_order_is_ignored() {
        let value = object(json!({"c": "z", "a": "x", "b": "y"}));
        let result = expand_mapping(&value, "thing", &abc_schema(Primitive::Null)).unwrap();
        assert_eq!(result, "x y z");
    }

    #[test]
    fn test_missing_sub_property_uses_default() {
        let value = object(json!({"a": "x", "c": "z"}));
        let result = expand_mapping(&value, "thing", &abc_schema(Primitive::from("0"))).unwrap();
        assert_eq!(result, "x 0 z");
    }

    #[test]
    fn test_missing_sub_property_with_null_default_is_skipped() {
        let value = object(json!({"a": "x", "c": "z"}));
        let result = expand_mapping(&value, "thing", &abc_schema(Primitive::Null)).unwrap();
        assert_eq!(result, "x z");
    }

    #[test]
    fn test_falsy_values_count_as_missing() {
        for falsy in [json!(0), json!(""), json!(false), json!(null)] {
            let value = object(json!({"a": "x", "b": falsy, "c": "z"}));

            let skipped = expand_mapping(&value, "thing", &abc_schema(Primitive::Null)).unwrap();
            assert_eq!(skipped, "x z");

            let defaulted =
                expand_mapping(&value, "thing", &abc_schema(Primitive::from("1px"))).unwrap();
            assert_eq!(defaulted, "x 1px z");
        }
    }

    #[test]
    fn test_margin_defaults_fill_gaps() {
        let margin = object(json!({"top": "10px", "left": "5px"}));
        let result = expand_mapping(&margin, "margin", &Schema::builtin()).unwrap();
        assert_eq!(result, "10px 0 0 5px");
    }

    #[test]
    fn test_unknown_properties_are_ignored() {
        let border = object(json!({"width": "2px", "radius": "4px"}));
        let result = expand_mapping(&border, "border", &Schema::builtin()).unwrap();
        assert_eq!(result, "2px");
    }

    #[test]
    fn test_unregistered_compound_is_empty() {
        let value = object(json!({"width": 1}));
        let result = expand_mapping(&value, "frame", &Schema::builtin()).unwrap();
        assert_eq!(result, "");
    }

    #[test]
    fn test_nested_sequence_sub_property() {
        let background = object(json!({
            "color": "#fff",
            "image": "url(a.png)",
            "position": ["center", "top"],
            "repeat": "no-repeat"
        }));
        let result = expand_mapping(&background, "background", &Schema::builtin()).unwrap();
        assert_eq!(result, "#fff url(a.png) center top no-repeat");
    }

    #[test]
    fn test_unregistered_sequence_sub_property_joins_with_comma() {
        let transition = object(json!({
            "property": ["opacity", "transform"],
            "duration": "200ms"
        }));
        let result = expand_mapping(&transition, "transition", &Schema::builtin()).unwrap();
        assert_eq!(result, "opacity,transform 200ms");
    }

    #[test]
    fn test_compound_sub_property_counts_as_missing() {
        let value = object(json!({"a": "x", "b": {"nested": 1}}));
        let result = expand_mapping(&value, "thing", &abc_schema(Primitive::from("y"))).unwrap();
        assert_eq!(result, "x y");
    }

    #[test]
    fn test_empty_sequence_sub_property_fails() {
        let value = object(json!({"position": []}));
        let result = expand_mapping(&value, "background", &Schema::builtin());
        assert!(matches!(result, Err(ExpandError::EmptySequence { .. })));
    }
}
