//! Style values as written by rule authors.
//!
//! Values arrive as untyped JSON-like data and are converted once, at the
//! input boundary, into [`StyleValue`]. The expanders then match on the
//! variant instead of probing the data at every step.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// An ordered mapping of property names to values.
///
/// Key order is the order the author wrote the properties in and is kept
/// through expansion.
pub type StyleObject = IndexMap<String, StyleValue>;

/// A scalar leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Null,
    Bool(bool),
    Number(Number),
    Text(String),
}

impl Primitive {
    /// Whether this value counts as "set" when picking sub-property values.
    ///
    /// `null`, `false`, `0` and `""` are unset.
    pub fn is_truthy(&self) -> bool {
        match self {
            Primitive::Null => false,
            Primitive::Bool(b) => *b,
            Primitive::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
            Primitive::Text(s) => !s.is_empty(),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Primitive::Null)
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Null => Ok(()),
            Primitive::Bool(b) => write!(f, "{}", b),
            Primitive::Number(n) => write!(f, "{}", format_number(n)),
            Primitive::Text(s) => f.write_str(s),
        }
    }
}

/// Render a number the way it appears in a stylesheet: integral values
/// never carry a trailing `.0`.
fn format_number(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        // f64's Display already drops the fractional part of whole numbers
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}

impl From<&str> for Primitive {
    fn from(s: &str) -> Self {
        Primitive::Text(s.to_string())
    }
}

impl From<String> for Primitive {
    fn from(s: String) -> Self {
        Primitive::Text(s)
    }
}

impl From<i64> for Primitive {
    fn from(n: i64) -> Self {
        Primitive::Number(n.into())
    }
}

impl From<bool> for Primitive {
    fn from(b: bool) -> Self {
        Primitive::Bool(b)
    }
}

impl Serialize for Primitive {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Value::from(self.clone()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Primitive {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Null => Ok(Primitive::Null),
            Value::Bool(b) => Ok(Primitive::Bool(b)),
            Value::Number(n) => Ok(Primitive::Number(n)),
            Value::String(s) => Ok(Primitive::Text(s)),
            other => Err(serde::de::Error::custom(format!(
                "expected a string, number, boolean or null, found {}",
                other
            ))),
        }
    }
}

impl From<Primitive> for Value {
    fn from(primitive: Primitive) -> Self {
        match primitive {
            Primitive::Null => Value::Null,
            Primitive::Bool(b) => Value::Bool(b),
            Primitive::Number(n) => Value::Number(n),
            Primitive::Text(s) => Value::String(s),
        }
    }
}

/// The shape of a value, as the expanders see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A string, number, boolean or null.
    Primitive,
    /// A compound value such as a border object.
    Mapping,
    /// A sequence whose first element is not itself a sequence.
    Sequence,
    /// A sequence whose first element is a sequence.
    NestedSequence,
    /// A sequence with no elements. Expanders reject this shape.
    EmptySequence,
}

/// Any value a style property may hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum StyleValue {
    Primitive(Primitive),
    Mapping(StyleObject),
    Sequence(Vec<StyleValue>),
}

impl StyleValue {
    /// Build a text value.
    pub fn text(s: impl Into<String>) -> Self {
        StyleValue::Primitive(Primitive::Text(s.into()))
    }

    /// Classify the value.
    ///
    /// Sequences are classified by their first element only.
    pub fn shape(&self) -> Shape {
        match self {
            StyleValue::Primitive(_) => Shape::Primitive,
            StyleValue::Mapping(_) => Shape::Mapping,
            StyleValue::Sequence(items) => match items.first() {
                None => Shape::EmptySequence,
                Some(StyleValue::Sequence(_)) => Shape::NestedSequence,
                Some(_) => Shape::Sequence,
            },
        }
    }

    pub fn as_mapping(&self) -> Option<&StyleObject> {
        match self {
            StyleValue::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Mappings and sequences are always truthy, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            StyleValue::Primitive(p) => p.is_truthy(),
            StyleValue::Mapping(_) | StyleValue::Sequence(_) => true,
        }
    }

    /// Text of the value when it is joined into a larger value.
    ///
    /// Nested sequences are joined with commas; mappings have no text form
    /// and render empty.
    pub fn to_css_text(&self) -> String {
        match self {
            StyleValue::Primitive(p) => p.to_string(),
            StyleValue::Mapping(_) => String::new(),
            StyleValue::Sequence(items) => join_values(items, ","),
        }
    }
}

/// Join the text of each value with `separator`.
pub(crate) fn join_values(items: &[StyleValue], separator: &str) -> String {
    items
        .iter()
        .map(StyleValue::to_css_text)
        .collect::<Vec<_>>()
        .join(separator)
}

impl From<Primitive> for StyleValue {
    fn from(primitive: Primitive) -> Self {
        StyleValue::Primitive(primitive)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::text(s)
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        StyleValue::text(s)
    }
}

impl From<Vec<String>> for StyleValue {
    fn from(items: Vec<String>) -> Self {
        StyleValue::Sequence(items.into_iter().map(StyleValue::text).collect())
    }
}

impl From<StyleObject> for StyleValue {
    fn from(map: StyleObject) -> Self {
        StyleValue::Mapping(map)
    }
}

impl From<Value> for StyleValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Primitive::Null.into(),
            Value::Bool(b) => Primitive::Bool(b).into(),
            Value::Number(n) => Primitive::Number(n).into(),
            Value::String(s) => Primitive::Text(s).into(),
            Value::Array(items) => {
                StyleValue::Sequence(items.into_iter().map(StyleValue::from).collect())
            }
            Value::Object(map) => StyleValue::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, StyleValue::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<StyleValue> for Value {
    fn from(value: StyleValue) -> Self {
        match value {
            StyleValue::Primitive(p) => p.into(),
            StyleValue::Sequence(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            StyleValue::Mapping(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}
