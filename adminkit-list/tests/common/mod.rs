//! Shared fixtures: entity metadata, a recording admin and stub guessers.

#![allow(dead_code)]

use adminkit_fields::{EntityMetadata, FieldDescription, MetadataRegistry};
use adminkit_list::{AdminContext, Confidence, TypeGuess, TypeGuesser};

pub const BOOK: &str = r#"
class: App\Entity\Book
fields:
  id:
    mapping: column
    type: string
  name:
    mapping: column
    type: string
  author:
    mapping: association
    kind: many-to-one
    target_entity: App\Entity\Author
    inversed_by: books
  readers:
    mapping: association
    kind: many-to-many
    target_entity: App\Entity\Reader
  categories:
    mapping: association
    kind: many-to-many
    target_entity: App\Entity\Category
"#;

pub const AUTHOR: &str = r#"
class: App\Entity\Author
fields:
  id:
    mapping: column
    type: string
  name:
    mapping: column
    type: string
  address:
    mapping: association
    kind: one-to-one
    target_entity: App\Entity\Address
  books:
    mapping: association
    kind: one-to-many
    target_entity: App\Entity\Book
    mapped_by: author
"#;

pub const ITEM: &str = r#"
class: App\Entity\Item
fields:
  command:
    mapping: association
    kind: many-to-one
    target_entity: App\Entity\Command
  product:
    mapping: association
    kind: many-to-one
    target_entity: App\Entity\Product
  offeredPrice:
    mapping: column
    type: decimal
    precision: 10
    scale: 2
"#;

pub fn registry() -> MetadataRegistry {
    MetadataRegistry::new()
        .with(EntityMetadata::from_yaml(BOOK).unwrap())
        .with(EntityMetadata::from_yaml(AUTHOR).unwrap())
        .with(EntityMetadata::from_yaml(ITEM).unwrap())
}

/// Admin double that records every call made by the builder.
pub struct RecordingAdmin {
    class: String,
    pub registered: Vec<String>,
    pub attached: Vec<String>,
}

impl RecordingAdmin {
    pub fn new(class: &str) -> Self {
        Self {
            class: class.to_string(),
            registered: Vec::new(),
            attached: Vec::new(),
        }
    }

    pub fn registrations_of(&self, name: &str) -> usize {
        self.registered.iter().filter(|n| *n == name).count()
    }
}

impl AdminContext for RecordingAdmin {
    fn entity_class(&self) -> &str {
        &self.class
    }

    fn add_list_field_description(&mut self, name: &str, _field: &FieldDescription) {
        self.registered.push(name.to_string());
    }

    fn attach_admin_class(&mut self, field: &mut FieldDescription) {
        self.attached.push(field.name().to_string());
        if let Some(target) = field.target_entity() {
            let code = format!("admin.{}", target.rsplit('\\').next().unwrap_or(target));
            field.set_association_admin(code.to_lowercase());
        }
    }
}

/// Guesser that always answers with the same type.
pub struct FixedGuesser(pub &'static str);

impl TypeGuesser for FixedGuesser {
    fn guess(&self, _field: &FieldDescription) -> TypeGuess {
        TypeGuess::new(self.0, Confidence::Low)
    }
}

/// Guesser that never finds a type.
pub fn empty_guesser() -> FixedGuesser {
    FixedGuesser("")
}
