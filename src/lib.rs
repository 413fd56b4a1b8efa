//! style-expand - nested style expansion
//!
//! Turns nested style objects (objects for compound properties such as
//! borders, arrays for multi-part values such as margins or transforms)
//! into flat property values ready for a stylesheet. Expansion is driven by
//! a per-property [`Schema`].

pub mod cli;
pub mod document;
pub mod error;
pub mod expand;
pub mod output;
pub mod plugin;
pub mod schema;
pub mod types;

pub use document::{DocumentFormat, RuleDocument};
pub use error::{ExpandError, Result};
pub use expand::{expand_mapping, expand_sequence, expand_style, Expansion, FALLBACKS};
pub use plugin::ExpandPlugin;
pub use schema::{resolve_schema, Schema, SchemaSource, SequenceKind, SequenceSet, SubProperties};
pub use types::{Primitive, Rule, RuleStyle, Shape, StyleObject, StyleValue, REGULAR_RULE};
