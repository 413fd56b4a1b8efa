//! Expand command implementation.
//!
//! Reads rule documents, expands their styles and writes JSON.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;

use crate::document::{DocumentFormat, RuleDocument};
use crate::error::{ExpandError, Result};
use crate::output::{display_path, plural, Printer};
use crate::plugin::ExpandPlugin;
use crate::schema::resolve_schema;

use super::describe_source;

/// Path that stands for standard input.
const STDIN: &str = "-";

/// Expand rule documents and print the result as JSON
#[derive(Args, Debug)]
pub struct ExpandArgs {
    /// Rule documents (JSON or YAML); reads stdin when empty or `-`
    pub files: Vec<PathBuf>,

    /// Schema file (default: style-expand.yaml when present, else builtin)
    #[arg(long, short)]
    pub schema: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Print compact JSON
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: ExpandArgs, printer: &Printer) -> Result<()> {
    let (schema, source) = resolve_schema(args.schema.as_deref(), Path::new("."))?;
    printer.info("Schema", &describe_source(&source));

    let plugin = ExpandPlugin::new(schema);

    let inputs = if args.files.is_empty() {
        vec![PathBuf::from(STDIN)]
    } else {
        args.files.clone()
    };

    let mut documents = Vec::with_capacity(inputs.len());
    let mut total = 0;

    for input in &inputs {
        let document = read_document(input)?;
        if document.is_empty() {
            printer.warning("Empty", &format!("{} has no rules", describe_input(input)));
        }
        printer.status(
            "Expanding",
            &format!("{} ({})", describe_input(input), plural(document.len(), "rule", "rules")),
        );
        total += document.len();
        documents.push(document.expand(&plugin)?);
    }

    let rendered = render(&documents, !args.compact)?;
    write_output(args.output.as_deref(), &rendered)?;

    printer.status("Finished", &plural(total, "rule", "rules"));
    Ok(())
}

fn read_document(input: &Path) -> Result<RuleDocument> {
    let content = if input == Path::new(STDIN) {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).map_err(|e| ExpandError::Io {
            path: input.to_path_buf(),
            message: format!("Failed to read stdin: {}", e),
        })?;
        buf
    } else {
        fs::read_to_string(input).map_err(|e| ExpandError::Io {
            path: input.to_path_buf(),
            message: format!("Failed to read file: {}", e),
        })?
    };

    RuleDocument::parse(&content, DocumentFormat::from_path(input))
}

fn describe_input(input: &Path) -> String {
    if input == Path::new(STDIN) {
        "stdin".to_string()
    } else {
        display_path(input)
    }
}

/// A single document is written as-is; several are wrapped in an array.
fn render(documents: &[RuleDocument], pretty: bool) -> Result<String> {
    match documents {
        [single] => single.to_json(pretty),
        many => {
            let rendered = if pretty {
                serde_json::to_string_pretty(many)
            } else {
                serde_json::to_string(many)
            };
            rendered.map_err(|e| ExpandError::Config {
                message: format!("Failed to serialize rules: {}", e),
                help: None,
            })
        }
    }
}

fn write_output(output: Option<&Path>, rendered: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| ExpandError::Io {
                    path: parent.to_path_buf(),
                    message: format!("Failed to create output directory: {}", e),
                })?;
            }
            fs::write(path, format!("{}\n", rendered)).map_err(|e| ExpandError::Io {
                path: path.to_path_buf(),
                message: format!("Failed to write output: {}", e),
            })
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", rendered).map_err(|e| ExpandError::Io {
                path: PathBuf::from("<stdout>"),
                message: format!("Failed to write output: {}", e),
            })
        }
    }
}
