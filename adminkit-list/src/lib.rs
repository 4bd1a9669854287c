//! List view field resolution
//!
//! `adminkit-list` decides how each column of an admin list view is rendered. Given
//! a `FieldDescription` declared by an admin, the `ListBuilder`:
//!
//! 1. resolves the display type (explicit, or guessed from the persistence mapping)
//! 2. normalises the reserved row-actions column
//! 3. fills sort option defaults for persisted fields
//! 4. picks a template from the configured type map, falling back to the
//!    association templates for relation fields
//! 5. asks the admin to attach the related entity's admin to relation fields
//!
//! Everything happens synchronously on caller-owned data; the builder itself only
//! holds its guesser and an immutable template map.

pub mod admin;
pub mod builder;
pub mod config;
pub mod constants;
pub mod error;
pub mod guesser;
pub mod mapper;
pub mod templates;

pub use admin::AdminContext;
pub use builder::ListBuilder;
pub use config::ListBuilderConfig;
pub use error::{ListError, Result};
pub use guesser::{Confidence, MappingTypeGuesser, TypeGuess, TypeGuesser};
pub use mapper::ListMapper;
pub use templates::TemplateMap;

pub use adminkit_fields::{
    FieldDescription, FieldDescriptionCollection, FieldMapping, FieldOptions, MappingKind,
};
