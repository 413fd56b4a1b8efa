pub mod completions;
pub mod expand;
pub mod init;
pub mod schema;

use clap::{ArgAction, Parser, Subcommand};

use crate::output::display_path;
use crate::schema::SchemaSource;

/// style-expand - Expand nested style objects into stylesheet values
#[derive(Parser, Debug)]
#[command(name = "style-expand")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Expand rule documents and print the result as JSON
    Expand(expand::ExpandArgs),

    /// Write the builtin schema to style-expand.yaml
    Init(init::InitArgs),

    /// Print the schema in effect
    Schema(schema::SchemaArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Initialise logging. `RUST_LOG` overrides the verbosity flag.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

/// Describe where a schema came from, for status output.
pub(crate) fn describe_source(source: &SchemaSource) -> String {
    match source {
        SchemaSource::Builtin => "builtin".to_string(),
        SchemaSource::File(path) => display_path(path),
    }
}
