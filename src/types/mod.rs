//! Core domain types for style-expand.
//!
//! - `StyleValue` - a property value (primitive, mapping or sequence)
//! - `StyleObject` - an ordered property -> value mapping
//! - `Rule` - a host rule carrying one or more style objects

mod rule;
mod value;

pub use rule::{Rule, RuleStyle, REGULAR_RULE};
pub use value::{Primitive, Shape, StyleObject, StyleValue};

pub(crate) use value::join_values;
