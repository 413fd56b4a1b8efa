//! Schema command implementation.
//!
//! Prints the schema that `expand` would use.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::error::Result;
use crate::output::Printer;
use crate::schema::{resolve_schema, Schema};

use super::describe_source;

/// Output format for the schema
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFormat {
    Yaml,
    Json,
}

/// Print the schema in effect
#[derive(Args, Debug)]
pub struct SchemaArgs {
    /// Schema file (default: style-expand.yaml when present, else builtin)
    #[arg(long, short)]
    pub schema: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "yaml")]
    pub format: SchemaFormat,
}

pub fn run(args: SchemaArgs, printer: &Printer) -> Result<()> {
    let (schema, source) = resolve_schema(args.schema.as_deref(), Path::new("."))?;
    printer.info("Schema", &describe_source(&source));

    print!("{}", render(&schema, args.format)?);
    Ok(())
}

fn render(schema: &Schema, format: SchemaFormat) -> Result<String> {
    match format {
        SchemaFormat::Yaml => schema.to_yaml(),
        SchemaFormat::Json => schema.to_json().map(|json| format!("{}\n", json)),
    }
}
