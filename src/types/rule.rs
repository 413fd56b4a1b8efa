//! Rules handed to the plugin by the host pipeline.

use serde::{Deserialize, Serialize};

use super::StyleObject;

/// The rule type eligible for expansion.
pub const REGULAR_RULE: &str = "regular";

/// The style carried by a rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleStyle {
    /// Several style objects applied in order.
    List(Vec<StyleObject>),
    Single(StyleObject),
}

/// A single style rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Rule type discriminator, e.g. `regular` or `keyframes`.
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<RuleStyle>,
}

impl Rule {
    /// Create a regular rule with a single style object.
    pub fn regular(style: StyleObject) -> Self {
        Self {
            kind: REGULAR_RULE.to_string(),
            style: Some(RuleStyle::Single(style)),
        }
    }

    /// Create a rule of any type.
    pub fn new(kind: impl Into<String>, style: Option<RuleStyle>) -> Self {
        Self {
            kind: kind.into(),
            style,
        }
    }

    pub fn is_regular(&self) -> bool {
        self.kind == REGULAR_RULE
    }
}
