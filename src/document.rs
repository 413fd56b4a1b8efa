//! Rule documents read by the CLI.
//!
//! A document is JSON or YAML holding one of:
//! - a single rule: `{"type": "regular", "style": {...}}`
//! - a list of rules
//! - a sheet: an object mapping rule names to style objects, each treated
//!   as a regular rule

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ExpandError, Result};
use crate::expand::expand_style;
use crate::plugin::ExpandPlugin;
use crate::types::{Rule, StyleObject};

/// Input format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension. Unknown extensions are JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                DocumentFormat::Yaml
            }
            _ => DocumentFormat::Json,
        }
    }
}

/// A parsed rule document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleDocument {
    Rule(Rule),
    Rules(Vec<Rule>),
    Sheet(IndexMap<String, StyleObject>),
}

impl RuleDocument {
    /// Parse a document in the given format.
    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self> {
        let parsed = match format {
            DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|e| ExpandError::Parse {
            message: format!("Invalid rule document: {}", e),
            help: Some(
                "Expected a rule, a list of rules, or an object of named styles".to_string(),
            ),
        })
    }

    /// Number of rules in the document.
    pub fn len(&self) -> usize {
        match self {
            RuleDocument::Rule(_) => 1,
            RuleDocument::Rules(rules) => rules.len(),
            RuleDocument::Sheet(styles) => styles.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Expand every rule in the document.
    pub fn expand(&self, plugin: &ExpandPlugin) -> Result<Self> {
        match self {
            RuleDocument::Rule(rule) => Ok(RuleDocument::Rule(plugin.expand_rule(rule)?)),
            RuleDocument::Rules(rules) => {
                let mut expanded = rules.clone();
                plugin.process_rules(&mut expanded)?;
                Ok(RuleDocument::Rules(expanded))
            }
            RuleDocument::Sheet(styles) => {
                let expanded = styles
                    .iter()
                    .map(|(name, style)| {
                        log::trace!("expanding sheet rule `{}`", name);
                        Ok((name.clone(), expand_style(style, plugin.schema())?))
                    })
                    .collect::<Result<IndexMap<_, _>>>()?;
                Ok(RuleDocument::Sheet(expanded))
            }
        }
    }

    /// Render the document as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let rendered = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        rendered.map_err(|e| ExpandError::Config {
            message: format!("Failed to serialize rules: {}", e),
            help: None,
        })
    }
}
