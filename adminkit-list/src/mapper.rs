//! ListMapper — declarative list configuration for one admin.
//!
//! ```rust,ignore
//! let mut list = ListMapper::new(&builder, &metadata, &mut item_admin);
//! list.add("command")?
//!     .add("product")?
//!     .add_with("offeredPrice", Some("currency"), FieldOptions::new())?;
//! let columns = list.finish();
//! ```

use adminkit_fields::{FieldDescriptionCollection, FieldOptions, MetadataRegistry};
use tracing::debug;

use crate::admin::AdminContext;
use crate::builder::ListBuilder;
use crate::error::Result;

/// Collects the list columns an admin declares, building each one as it is added.
pub struct ListMapper<'a> {
    builder: &'a ListBuilder,
    metadata: &'a MetadataRegistry,
    admin: &'a mut dyn AdminContext,
    list: FieldDescriptionCollection,
}

impl<'a> ListMapper<'a> {
    pub fn new(
        builder: &'a ListBuilder,
        metadata: &'a MetadataRegistry,
        admin: &'a mut dyn AdminContext,
    ) -> Self {
        Self {
            list: builder.base_list(),
            builder,
            metadata,
            admin,
        }
    }

    /// Add a column with a guessed type and default options.
    pub fn add(&mut self, name: &str) -> Result<&mut Self> {
        self.add_with(name, None, FieldOptions::default())
    }

    /// Add a column with an explicit type and/or options.
    pub fn add_with(
        &mut self,
        name: &str,
        type_: Option<&str>,
        options: FieldOptions,
    ) -> Result<&mut Self> {
        let class = self.admin.entity_class().to_string();
        let field = self
            .metadata
            .field_description(&class, name)?
            .with_options(options);
        self.builder
            .add_field(&mut self.list, type_, field, &mut *self.admin)?;
        debug!(entity = %class, field = %name, "list column added");
        Ok(self)
    }

    pub fn has(&self, name: &str) -> bool {
        self.list.has(name)
    }

    /// Drop a column from the list. The admin keeps its registration.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        self.list.remove(name);
        self
    }

    pub fn reorder<S: AsRef<str>>(&mut self, keys: &[S]) -> &mut Self {
        self.list.reorder(keys);
        self
    }

    pub fn keys(&self) -> Vec<&str> {
        self.list.names().collect()
    }

    pub fn finish(self) -> FieldDescriptionCollection {
        self.list
    }
}
