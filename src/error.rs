use miette::Diagnostic;
use thiserror::Error;

/// Main error type for style-expand operations
#[derive(Error, Diagnostic, Debug)]
pub enum ExpandError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(style_expand::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(style_expand::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// A sequence value with no elements reached shape inspection.
    #[error("Empty sequence for property `{property}`")]
    #[diagnostic(
        code(style_expand::expand),
        help("Remove the property or give it at least one value")
    )]
    EmptySequence { property: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(style_expand::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl ExpandError {
    pub(crate) fn empty_sequence(property: &str) -> Self {
        ExpandError::EmptySequence {
            property: property.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExpandError>;
