//! Style expansion.
//!
//! [`expand_style`] walks the top-level properties of a style object and
//! replaces compound and array values with their stylesheet text:
//!
//! ```ignore
//! use style_expand::{expand_style, Schema, StyleObject};
//!
//! let style: StyleObject = serde_json::from_str(
//!     r#"{"border": {"color": "red", "width": 1, "style": "solid"}, "margin": [1, 2]}"#,
//! )?;
//! let expanded = expand_style(&style, &Schema::builtin())?;
//! // {"border": "1 solid red", "margin": "1 2"}
//! ```
//!
//! The `fallbacks` property is special: it holds whole style objects, each
//! expanded on its own.

mod mapping;
mod sequence;

pub use mapping::expand_mapping;
pub use sequence::{expand_sequence, Expansion};

use crate::error::{ExpandError, Result};
use crate::schema::{Schema, SequenceKind};
use crate::types::{Shape, StyleObject, StyleValue};

/// Property holding alternative style objects.
pub const FALLBACKS: &str = "fallbacks";

/// Expand every property of `style`, returning a new style object.
///
/// Keys keep their order. Primitives, and arrays whose first element is an
/// array, are copied unchanged.
pub fn expand_style(style: &StyleObject, schema: &Schema) -> Result<StyleObject> {
    style
        .iter()
        .map(|(property, value)| {
            let expanded = expand_property(property, value, schema)?;
            Ok((property.clone(), expanded))
        })
        .collect()
}

fn expand_property(property: &str, value: &StyleValue, schema: &Schema) -> Result<StyleValue> {
    let is_fallbacks = property == FALLBACKS;

    let expanded = match value {
        StyleValue::Primitive(_) => return Ok(value.clone()),
        StyleValue::Mapping(map) if is_fallbacks => StyleValue::Mapping(expand_style(map, schema)?),
        StyleValue::Mapping(map) => StyleValue::text(expand_mapping(map, property, schema)?),
        StyleValue::Sequence(items) => match value.shape() {
            Shape::EmptySequence => return Err(ExpandError::empty_sequence(property)),
            // arrays of arrays are only expanded below a compound value
            Shape::NestedSequence => return Ok(value.clone()),
            _ if is_fallbacks => expand_fallbacks(items, schema)?,
            _ => expand_sequence(items, property, SequenceKind::Flat, schema)?.into_value(),
        },
    };

    log::trace!("expanded `{}`", property);
    Ok(expanded)
}

fn expand_fallbacks(items: &[StyleValue], schema: &Schema) -> Result<StyleValue> {
    let expanded = items
        .iter()
        .map(|item| match item {
            StyleValue::Mapping(map) => Ok(StyleValue::Mapping(expand_style(map, schema)?)),
            other => Ok(other.clone()),
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(StyleValue::Sequence(expanded))
}
