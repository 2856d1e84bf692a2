use thiserror::Error;

/// Errors raised around the structuring pipeline.
///
/// Classifying and parsing never fail; these variants cover loading
/// vocabularies, reading input and writing output.
#[derive(Error, Debug)]
pub enum StructureError {
    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// A configured vocabulary produced a pattern the regex engine rejected
    #[error("Invalid pattern: {0}")]
    PatternError(#[from] regex::Error),

    /// A vocabulary list was empty or contained only blank entries
    #[error("Invalid vocabulary: {0}")]
    InvalidVocabulary(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),

    /// Failed to read input text
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Failed to serialize blocks
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
