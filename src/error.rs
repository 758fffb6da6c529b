use thiserror::Error;

/// Errors that can occur outside the pure parsing/aggregation pipeline.
///
/// Parsing itself never fails: malformed recipe text degrades to absent or
/// empty fields, and structural problems are reported by the validator as a
/// list of issues rather than raised here.
#[derive(Error, Debug)]
pub enum GroceryError {
    /// Failed to read a recipe file or the store file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store file contained invalid JSON, or serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error while loading packs.toml / environment
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// A rounding rule in the configuration was malformed
    #[error("Invalid rounding rule: {0}")]
    InvalidRule(String),

    /// No recipe with the given id exists in the store
    #[error("Recipe not found: {0}")]
    NotFound(String),
}
