use thiserror::Error;

/// Errors raised while applying a metadata line to a recipe
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MetaError {
    /// The key is not one of the recognised metadata keys
    #[error("invalid metadata key")]
    InvalidMetadataKey { key: String },
}

/// A failure while parsing a markup document, tied to the line that caused it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line_nr}: {source} ({line:?})")]
pub struct RecipeParseError {
    line: String,
    line_nr: usize,
    #[source]
    source: MetaError,
}

impl RecipeParseError {
    pub fn new(line: impl Into<String>, line_nr: usize, source: MetaError) -> Self {
        Self {
            line: line.into(),
            line_nr,
            source,
        }
    }

    /// The offending line, trimmed, sigil included
    pub fn line(&self) -> &str {
        &self.line
    }

    /// 1-based line number
    pub fn line_nr(&self) -> usize {
        self.line_nr
    }

    pub fn cause(&self) -> &MetaError {
        &self.source
    }
}

/// Errors that can occur when reading and parsing recipe files
#[derive(Error, Debug)]
pub enum Error {
    /// The markup could not be parsed
    #[error(transparent)]
    Parse(#[from] RecipeParseError),

    /// Failed to read the input
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Failed to serialize recipes
    #[error("Serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
