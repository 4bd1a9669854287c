//! Error types for field descriptions and entity metadata

use thiserror::Error;

/// Result type for fields operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur while building field descriptions from metadata
#[derive(Debug, Error)]
pub enum FieldsError {
    /// No metadata registered for an entity class
    #[error("entity metadata not found: {name}")]
    EntityNotFound { name: String },

    /// A dotted path walked through a field that is not an association
    #[error("field '{field}' of '{entity}' is not an association")]
    NotAnAssociation { entity: String, field: String },

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
