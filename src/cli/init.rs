//! Init command implementation.
//!
//! Writes the builtin schema to `style-expand.yaml` so it can be edited.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::error::{ExpandError, Result};
use crate::output::{display_path, plural, Printer};
use crate::schema::{Schema, SCHEMA_FILENAME};

/// Write the builtin schema to style-expand.yaml
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to write the schema to (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Overwrite an existing style-expand.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let schema_path = args.path.join(SCHEMA_FILENAME);

    if schema_path.exists() && !args.force {
        return Err(ExpandError::Config {
            message: format!("{} already exists", SCHEMA_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    let schema = Schema::builtin();
    let yaml = schema.to_yaml()?;

    fs::write(&schema_path, &yaml).map_err(|e| ExpandError::Io {
        path: schema_path.clone(),
        message: format!("Failed to write schema: {}", e),
    })?;

    printer.status(
        "Created",
        &format!(
            "{} ({}, {})",
            display_path(&schema_path),
            plural(schema.compound.len(), "compound property", "compound properties"),
            plural(
                schema.flat_sequences.len() + schema.nested_sequences.len(),
                "sequence property",
                "sequence properties"
            ),
        ),
    );

    Ok(())
}
