//! Field descriptions and persistence metadata
//!
//! `adminkit-fields` is the data model shared by the AdminKit list builders. It
//! knows nothing about templates or type guessing; it describes what a displayed
//! column is and where its value comes from.
//!
//! # Architecture
//!
//! - **Caller-owned**: a `FieldDescription` belongs to the admin that declared it;
//!   builders only mutate it
//! - **Typed options**: every option the builders read or write is a named member of
//!   `FieldOptions`, anything else stays in a flattened extension map
//! - **YAML metadata**: entity persistence metadata is plain serde data, one
//!   document per entity

pub mod collection;
pub mod description;
pub mod error;
pub mod metadata;
pub mod options;
pub mod types;

pub use collection::FieldDescriptionCollection;
pub use description::FieldDescription;
pub use error::{FieldsError, Result};
pub use metadata::{EntityMetadata, MetadataRegistry};
pub use options::{ActionOptions, FieldOptions};
pub use types::{AssociationMapping, ColumnMapping, FieldMapping, MappingKind, SortOrder};
