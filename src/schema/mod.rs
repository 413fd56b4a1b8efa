//! Per-property expansion schema.
//!
//! The schema says which properties are compound (and in what order their
//! sub-properties are written), and which array-valued properties are
//! space-joined rather than comma-joined. It is read-only while a style is
//! being expanded.

mod builtin;
mod file;

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::types::Primitive;

pub use file::{resolve_schema, SchemaSource, SCHEMA_FILENAME};

/// Ordered sub-property name -> default value (`Null` when there is none).
pub type SubProperties = IndexMap<String, Primitive>;

/// A set of property names registered for space-joined sequences.
pub type SequenceSet = IndexSet<String>;

/// Which sequence table applies to an array value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceKind {
    /// Arrays given directly as a property value.
    Flat,
    /// Arrays given as a sub-property value inside a compound value.
    Nested,
}

/// Expansion schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
    /// Compound property -> sub-properties in write order.
    pub compound: IndexMap<String, SubProperties>,

    /// Properties whose bare array values join with a space.
    pub flat_sequences: SequenceSet,

    /// Sub-properties whose array values join with a space.
    pub nested_sequences: SequenceSet,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// The builtin schema covering the common CSS shorthands.
    pub fn builtin() -> Self {
        builtin::builtin_schema()
    }

    /// Sub-properties of a compound property, if it is registered.
    pub fn sub_properties(&self, property: &str) -> Option<&SubProperties> {
        self.compound.get(property)
    }

    /// The sequence table for `kind`.
    pub fn sequences(&self, kind: SequenceKind) -> &SequenceSet {
        match kind {
            SequenceKind::Flat => &self.flat_sequences,
            SequenceKind::Nested => &self.nested_sequences,
        }
    }

    /// Register a compound property. Replaces any previous entry.
    pub fn add_compound<I, K, V>(&mut self, property: impl Into<String>, subs: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Primitive>,
    {
        let subs = subs
            .into_iter()
            .map(|(name, default)| (name.into(), default.into()))
            .collect();
        self.compound.insert(property.into(), subs);
        self
    }

    /// Register a property whose bare array values join with a space.
    pub fn add_flat_sequence(&mut self, property: impl Into<String>) -> &mut Self {
        self.flat_sequences.insert(property.into());
        self
    }

    /// Register a sub-property whose array values join with a space.
    pub fn add_nested_sequence(&mut self, property: impl Into<String>) -> &mut Self {
        self.nested_sequences.insert(property.into());
        self
    }

    /// Merge another schema into this one. Existing entries win.
    pub fn merge_from(&mut self, other: &Schema) {
        for (property, subs) in &other.compound {
            self.compound
                .entry(property.clone())
                .or_insert_with(|| subs.clone());
        }
        for property in &other.flat_sequences {
            self.flat_sequences.insert(property.clone());
        }
        for property in &other.nested_sequences {
            self.nested_sequences.insert(property.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_border_order() {
        let schema = Schema::builtin();
        let subs: Vec<&str> = schema
            .sub_properties("border")
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(subs, vec!["width", "style", "color"]);
    }

    #[test]
    fn test_builtin_defaults() {
        let schema = Schema::builtin();
        let margin = schema.sub_properties("margin").unwrap();
        assert_eq!(margin["top"], Primitive::from(0_i64));

        let border = schema.sub_properties("border").unwrap();
        assert!(border["color"].is_null());
    }

    #[test]
    fn test_builtin_sequences() {
        let schema = Schema::builtin();
        assert!(schema.sequences(SequenceKind::Flat).contains("margin"));
        assert!(schema.sequences(SequenceKind::Flat).contains("transform"));
        assert!(!schema.sequences(SequenceKind::Flat).contains("transition-property"));
        assert!(schema.sequences(SequenceKind::Nested).contains("position"));
    }

    #[test]
    fn test_add_compound_replaces() {
        let mut schema = Schema::new();
        schema.add_compound("border", [("width", Primitive::Null)]);
        schema.add_compound("border", [("color", "black")]);

        let subs = schema.sub_properties("border").unwrap();
        assert_eq!(subs.len(), 1);
        assert_eq!(subs["color"], Primitive::from("black"));
    }

    #[test]
    fn test_merge_keeps_existing() {
        let mut schema = Schema::new();
        schema.add_compound("border", [("color", Primitive::Null)]);
        schema.merge_from(&Schema::builtin());

        assert_eq!(schema.sub_properties("border").unwrap().len(), 1);
        assert!(schema.sub_properties("outline").is_some());
        assert!(schema.flat_sequences.contains("margin"));
    }
}
