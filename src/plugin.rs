//! Rule plugin entry point.
//!
//! The host pipeline calls [`ExpandPlugin::process_rule`] on every rule
//! before it is serialized. Only `regular` rules carrying a style are
//! touched.

use crate::error::Result;
use crate::expand::expand_style;
use crate::schema::Schema;
use crate::types::{Rule, RuleStyle};

/// Expands the styles of regular rules against a schema.
#[derive(Debug, Clone)]
pub struct ExpandPlugin {
    schema: Schema,
}

impl ExpandPlugin {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Expand a rule's style in place.
    ///
    /// Rules that are not `regular`, or have no style, are left as they
    /// are. A style list is expanded element by element, in order. On error
    /// the rule is not modified.
    pub fn process_rule(&self, rule: &mut Rule) -> Result<()> {
        if !rule.is_regular() {
            return Ok(());
        }

        let expanded = match &rule.style {
            None => return Ok(()),
            Some(RuleStyle::Single(style)) => RuleStyle::Single(expand_style(style, &self.schema)?),
            Some(RuleStyle::List(styles)) => RuleStyle::List(
                styles
                    .iter()
                    .map(|style| expand_style(style, &self.schema))
                    .collect::<Result<Vec<_>>>()?,
            ),
        };

        rule.style = Some(expanded);
        Ok(())
    }

    /// Expand a copy of `rule`.
    pub fn expand_rule(&self, rule: &Rule) -> Result<Rule> {
        let mut expanded = rule.clone();
        self.process_rule(&mut expanded)?;
        Ok(expanded)
    }

    /// Expand several rules in place, stopping at the first error.
    pub fn process_rules(&self, rules: &mut [Rule]) -> Result<()> {
        for rule in rules.iter_mut() {
            self.process_rule(rule)?;
        }
        Ok(())
    }
}

impl Default for ExpandPlugin {
    fn default() -> Self {
        Self::new(Schema::builtin())
    }
}
