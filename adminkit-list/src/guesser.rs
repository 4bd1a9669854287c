//! Display type guessing.
//!
//! The list builder consults a `TypeGuesser` whenever a column is declared
//! without an explicit type. `MappingTypeGuesser` infers the type from the
//! persistence mapping the same way field definitions infer their display.

use adminkit_fields::{FieldDescription, FieldMapping};
use tracing::trace;

/// How sure a guesser is about its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Confidence {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Result of a type guess. The type may be empty when nothing could be inferred.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeGuess {
    type_: String,
    confidence: Confidence,
}

impl TypeGuess {
    pub fn new(type_: impl Into<String>, confidence: Confidence) -> Self {
        Self {
            type_: type_.into(),
            confidence,
        }
    }

    /// A guess carrying no type.
    pub fn empty() -> Self {
        Self::new("", Confidence::Low)
    }

    /// The guessed type, `None` when empty.
    pub fn type_(&self) -> Option<&str> {
        Some(self.type_.as_str()).filter(|t| !t.is_empty())
    }

    pub fn confidence(&self) -> Confidence {
        self.confidence
    }
}

/// Infers a display type for a field declared without one.
pub trait TypeGuesser: Send + Sync {
    fn guess(&self, field: &FieldDescription) -> TypeGuess;
}

impl<F> TypeGuesser for F
where
    F: Fn(&FieldDescription) -> TypeGuess + Send + Sync,
{
    fn guess(&self, field: &FieldDescription) -> TypeGuess {
        self(field)
    }
}

/// Guesses from the field's persistence mapping.
///
/// Relation fields are listed by their kind, columns by their column type.
/// Virtual fields (no mapping) get an empty guess.
#[derive(Debug, Clone, Copy, Default)]
pub struct MappingTypeGuesser;

impl MappingTypeGuesser {
    pub fn new() -> Self {
        Self
    }

    fn guess_column(column_type: &str) -> TypeGuess {
        let (type_, confidence) = match column_type {
            "array" | "simple_array" | "json" | "json_array" => ("array", Confidence::High),
            "boolean" => ("boolean", Confidence::High),
            "datetime" | "vardatetime" | "datetimetz" | "datetime_immutable"
            | "datetimetz_immutable" => ("datetime", Confidence::High),
            "date" | "date_immutable" => ("date", Confidence::High),
            "time" | "time_immutable" => ("time", Confidence::High),
            "decimal" | "float" => ("number", Confidence::Medium),
            "integer" | "bigint" | "smallint" => ("integer", Confidence::Medium),
            "string" => ("string", Confidence::Medium),
            "text" => ("text", Confidence::Medium),
            _ => ("string", Confidence::Low),
        };
        TypeGuess::new(type_, confidence)
    }
}

impl TypeGuesser for MappingTypeGuesser {
    fn guess(&self, field: &FieldDescription) -> TypeGuess {
        let guess = match field.field_mapping() {
            Some(FieldMapping::Association(assoc)) => {
                TypeGuess::new(assoc.kind.type_tag(), Confidence::High)
            }
            Some(FieldMapping::Column(column)) => Self::guess_column(&column.column_type),
            None => TypeGuess::empty(),
        };
        trace!(field = %field.name(), guess = ?guess.type_(), confidence = ?guess.confidence(), "guessed type");
        guess
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adminkit_fields::{AssociationMapping, ColumnMapping, MappingKind};
    use rstest::rstest;

    fn column(column_type: &str) -> FieldDescription {
        FieldDescription::new("value")
            .with_field_mapping(ColumnMapping::new("value", column_type))
    }

    #[rstest]
    #[case::boolean("boolean", "boolean")]
    #[case::datetime("datetime", "datetime")]
    #[case::datetimetz_immutable("datetimetz_immutable", "datetime")]
    #[case::date("date_immutable", "date")]
    #[case::time("time", "time")]
    #[case::decimal("decimal", "number")]
    #[case::bigint("bigint", "integer")]
    #[case::string("string", "string")]
    #[case::text("text", "text")]
    #[case::json("json", "array")]
    #[case::unknown("guid", "string")]
    fn guesses_from_column_type(#[case] column_type: &str, #[case] expected: &str) {
        let guess = MappingTypeGuesser.guess(&column(column_type));
        assert_eq!(guess.type_(), Some(expected));
    }

    #[test]
    fn unknown_column_type_is_low_confidence() {
        let guess = MappingTypeGuesser.guess(&column("guid"));
        assert_eq!(guess.confidence(), Confidence::Low);
        let guess = MappingTypeGuesser.guess(&column("boolean"));
        assert!(guess.confidence() > Confidence::Medium);
    }

    #[test]
    fn guesses_association_kind() {
        for kind in MappingKind::ALL {
            let field = FieldDescription::new("rel")
                .with_field_mapping(AssociationMapping::new("rel", kind, "Target"));
            let guess = MappingTypeGuesser.guess(&field);
            assert_eq!(guess.type_(), Some(kind.type_tag()));
            assert_eq!(guess.confidence(), Confidence::High);
        }
    }

    #[test]
    fn virtual_field_gets_empty_guess() {
        let guess = MappingTypeGuesser.guess(&FieldDescription::new("summary"));
        assert_eq!(guess.type_(), None);
        assert_eq!(guess, TypeGuess::empty());
    }

    #[test]
    fn closures_are_guessers() {
        let guesser = |_: &FieldDescription| TypeGuess::new("text", Confidence::Low);
        assert_eq!(guesser.guess(&FieldDescription::new("x")).type_(), Some("text"));
    }
}
