//! Schema files (style-expand.yaml) and schema resolution.
//!
//! A schema file lists compound properties and sequence properties in YAML
//! or JSON. Unless it opts out with `extends_builtin: false`, the builtin
//! schema is merged underneath it.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Schema, SequenceSet, SubProperties};
use crate::error::{ExpandError, Result};

/// The name of the schema file looked up in the working directory.
pub const SCHEMA_FILENAME: &str = "style-expand.yaml";

/// Schema file contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct SchemaFile {
    /// Merge the builtin schema underneath this file's entries.
    extends_builtin: bool,

    compound: IndexMap<String, SubProperties>,

    flat_sequences: SequenceSet,

    nested_sequences: SequenceSet,
}

impl Default for SchemaFile {
    fn default() -> Self {
        Self {
            extends_builtin: true,
            compound: IndexMap::new(),
            flat_sequences: SequenceSet::new(),
            nested_sequences: SequenceSet::new(),
        }
    }
}

impl SchemaFile {
    fn into_schema(self) -> Schema {
        let mut schema = Schema {
            compound: self.compound,
            flat_sequences: self.flat_sequences,
            nested_sequences: self.nested_sequences,
        };
        if self.extends_builtin {
            schema.merge_from(&Schema::builtin());
        }
        schema
    }
}

/// Where a resolved schema came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    Builtin,
    File(PathBuf),
}

impl Schema {
    /// Load a schema file. `.json` files are read as JSON, anything else
    /// as YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ExpandError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read schema: {}", e),
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse_yaml(&content)
        }
    }

    /// Parse a schema from a YAML string.
    pub fn parse_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(SchemaFile::default().into_schema());
        }
        let file: SchemaFile = serde_yaml::from_str(content).map_err(|e| ExpandError::Parse {
            message: format!("Invalid schema: {}", e),
            help: Some(format!("Check {} syntax", SCHEMA_FILENAME)),
        })?;
        Ok(file.into_schema())
    }

    /// Parse a schema from a JSON string.
    pub fn parse_json(content: &str) -> Result<Self> {
        let file: SchemaFile = serde_json::from_str(content).map_err(|e| ExpandError::Parse {
            message: format!("Invalid schema: {}", e),
            help: Some("Check the schema's JSON syntax".to_string()),
        })?;
        Ok(file.into_schema())
    }

    /// Render this schema as a standalone YAML schema file.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.to_file()).map_err(|e| ExpandError::Config {
            message: format!("Failed to serialize schema: {}", e),
            help: None,
        })
    }

    /// Render this schema as a standalone JSON schema file.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_file()).map_err(|e| ExpandError::Config {
            message: format!("Failed to serialize schema: {}", e),
            help: None,
        })
    }

    fn to_file(&self) -> SchemaFile {
        SchemaFile {
            extends_builtin: false,
            compound: self.compound.clone(),
            flat_sequences: self.flat_sequences.clone(),
            nested_sequences: self.nested_sequences.clone(),
        }
    }
}

/// Resolve the schema to use.
///
/// An explicit path wins. Otherwise `style-expand.yaml` in `dir` is used
/// when present, and the builtin schema when it is not.
pub fn resolve_schema(explicit: Option<&Path>, dir: &Path) -> Result<(Schema, SchemaSource)> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ExpandError::Config {
                message: format!("Schema not found: {}", path.display()),
                help: Some(format!(
                    "Run `style-expand init` to create {}",
                    SCHEMA_FILENAME
                )),
            });
        }
        let schema = Schema::load(path)?;
        return Ok((schema, SchemaSource::File(path.to_path_buf())));
    }

    let discovered = dir.join(SCHEMA_FILENAME);
    if discovered.is_file() {
        let schema = Schema::load(&discovered)?;
        log::debug!("using schema file {}", discovered.display());
        return Ok((schema, SchemaSource::File(discovered)));
    }

    log::debug!("no {} in {}, using builtin schema", SCHEMA_FILENAME, dir.display());
    Ok((Schema::builtin(), SchemaSource::Builtin))
}
