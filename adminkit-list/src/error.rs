//! Error types for list building

use adminkit_fields::FieldsError;
use thiserror::Error;

/// Result type for list building operations
pub type Result<T> = std::result::Result<T, ListError>;

/// Errors raised while building list fields
#[derive(Debug, Error)]
pub enum ListError {
    /// A field ended resolution without a display type
    #[error("Please define a type for field `{field}` in `{entity_class}`")]
    MissingType { field: String, entity_class: String },

    /// Field description could not be created from entity metadata
    #[error(transparent)]
    Fields(#[from] FieldsError),

    /// Builder configuration could not be extracted
    #[error("Failed to load list builder configuration: {0}")]
    Config(Box<figment::Error>),
}

impl From<figment::Error> for ListError {
    fn from(error: figment::Error) -> Self {
        ListError::Config(Box::new(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_type_names_field_and_entity() {
        let err = ListError::MissingType {
            field: "name".into(),
            entity_class: "App\\Entity\\Book".into(),
        };
        assert_eq!(
            err.to_string(),
            "Please define a type for field `name` in `App\\Entity\\Book`"
        );
    }

    #[test]
    fn fields_error_is_transparent() {
        let err: ListError = FieldsError::EntityNotFound {
            name: "Book".into(),
        }
        .into();
        assert_eq!(err.to_string(), "entity metadata not found: Book");
    }
}
