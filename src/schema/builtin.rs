//! The builtin expansion schema.

use super::{Schema, SubProperties};
use crate::types::Primitive;

/// Sub-properties shared by `border`, its four sides and `outline`.
const LINE: &[(&str, Option<i64>)] = &[("width", None), ("style", None), ("color", None)];

/// Sub-properties shared by `margin` and `padding`.
const BOX: &[(&str, Option<i64>)] = &[
    ("top", Some(0)),
    ("right", Some(0)),
    ("bottom", Some(0)),
    ("left", Some(0)),
];

const COMPOUND: &[(&str, &[(&str, Option<i64>)])] = &[
    ("padding", BOX),
    ("margin", BOX),
    (
        "background",
        &[
            ("attachment", None),
            ("color", None),
            ("image", None),
            ("position", None),
            ("repeat", None),
        ],
    ),
    ("border", LINE),
    ("border-top", LINE),
    ("border-right", LINE),
    ("border-bottom", LINE),
    ("border-left", LINE),
    ("outline", LINE),
    (
        "list-style",
        &[("type", None), ("position", None), ("image", None)],
    ),
    (
        "transition",
        &[
            ("property", None),
            ("duration", None),
            ("timing-function", None),
            ("timingFunction", None),
            ("delay", None),
        ],
    ),
    (
        "animation",
        &[
            ("name", None),
            ("duration", None),
            ("timing-function", None),
            ("timingFunction", None),
            ("delay", None),
            ("iteration-count", None),
            ("iterationCount", None),
            ("direction", None),
            ("fill-mode", None),
            ("fillMode", None),
            ("play-state", None),
            ("playState", None),
        ],
    ),
    (
        "box-shadow",
        &[
            ("x", Some(0)),
            ("y", Some(0)),
            ("blur", Some(0)),
            ("spread", Some(0)),
            ("color", None),
            ("inset", None),
        ],
    ),
    (
        "text-shadow",
        &[("x", Some(0)), ("y", Some(0)), ("blur", None), ("color", None)],
    ),
    (
        "flex",
        &[("grow", None), ("shrink", None), ("basis", None)],
    ),
];

/// Properties whose bare array values join with a space.
const FLAT_SEQUENCES: &[&str] = &[
    "background-size",
    "background-position",
    "border",
    "border-bottom",
    "border-left",
    "border-top",
    "border-right",
    "border-radius",
    "box-shadow",
    "flex",
    "margin",
    "padding",
    "outline",
    "transform-origin",
    "transform",
    "transition",
];

/// Sub-properties whose array values join with a space inside a compound value.
const NESTED_SEQUENCES: &[&str] = &["position", "size"];

/// Build the builtin schema.
pub(super) fn builtin_schema() -> Schema {
    let compound = COMPOUND
        .iter()
        .map(|(name, subs)| (name.to_string(), sub_properties(subs)))
        .collect();

    Schema {
        compound,
        flat_sequences: FLAT_SEQUENCES.iter().map(|s| s.to_string()).collect(),
        nested_sequences: NESTED_SEQUENCES.iter().map(|s| s.to_string()).collect(),
    }
}

fn sub_properties(subs: &[(&str, Option<i64>)]) -> SubProperties {
    subs.iter()
        .map(|(name, default)| {
            let default = default.map_or(Primitive::Null, Primitive::from);
            (name.to_string(), default)
        })
        .collect()
}
