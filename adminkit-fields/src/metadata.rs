//! Entity persistence metadata and the registry that resolves field paths.
//!
//! One `EntityMetadata` document per entity class. The registry indexes them by
//! class name and turns declared list columns (`name`, `author.name`) into fresh
//! `FieldDescription`s carrying the right mapping and association chain.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::description::FieldDescription;
use crate::error::{FieldsError, Result};
use crate::types::{AssociationMapping, FieldMapping};

/// Persistence metadata of one entity class.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntityMetadata {
    pub class: String,
    #[serde(default)]
    pub fields: IndexMap<String, FieldMapping>,
}

impl EntityMetadata {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            fields: IndexMap::new(),
        }
    }

    /// Parse a metadata document. Mapping field names are taken from the map keys.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let mut meta: EntityMetadata = serde_yaml_ng::from_str(yaml)?;
        for (name, mapping) in meta.fields.iter_mut() {
            mapping.set_field_name(name);
        }
        Ok(meta)
    }

    /// Add a mapping under its own field name.
    pub fn field(mut self, mapping: impl Into<FieldMapping>) -> Self {
        let mapping = mapping.into();
        self.fields.insert(mapping.field_name().to_string(), mapping);
        self
    }

    pub fn mapping(&self, name: &str) -> Option<&FieldMapping> {
        self.fields.get(name)
    }
}

/// All known entity metadata, indexed by class name.
#[derive(Debug, Clone, Default)]
pub struct MetadataRegistry {
    entities: Vec<EntityMetadata>,
    class_index: HashMap<String, usize>,
}

impl MetadataRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) metadata for its class.
    pub fn register(&mut self, meta: EntityMetadata) {
        if let Some(&idx) = self.class_index.get(&meta.class) {
            self.entities[idx] = meta;
        } else {
            let idx = self.entities.len();
            self.class_index.insert(meta.class.clone(), idx);
            self.entities.push(meta);
        }
    }

    /// Builder-style `register`.
    pub fn with(mut self, meta: EntityMetadata) -> Self {
        self.register(meta);
        self
    }

    pub fn get(&self, class: &str) -> Option<&EntityMetadata> {
        self.class_index.get(class).map(|&i| &self.entities[i])
    }

    pub fn all(&self) -> &[EntityMetadata] {
        &self.entities
    }

    /// Create a description for `path` on `class`.
    ///
    /// Every segment but the last must be an association; each one is recorded
    /// in the parent association chain. A last segment with no mapping yields a
    /// virtual field.
    pub fn field_description(&self, class: &str, path: &str) -> Result<FieldDescription> {
        let mut current = self.lookup(class)?;
        let mut chain: Vec<AssociationMapping> = Vec::new();

        let (parents, leaf) = match path.rsplit_once('.') {
            Some((parents, leaf)) => (Some(parents), leaf),
            None => (None, path),
        };

        for segment in parents.into_iter().flat_map(|p| p.split('.')) {
            let assoc = current
                .mapping(segment)
                .and_then(FieldMapping::as_association)
                .ok_or_else(|| FieldsError::NotAnAssociation {
                    entity: current.class.clone(),
                    field: segment.to_string(),
                })?;
            chain.push(assoc.clone());
            current = self.lookup(&assoc.target_entity)?;
        }

        let mut field = FieldDescription::new(path).with_parent_association_mappings(chain);
        match current.mapping(leaf) {
            Some(mapping) => field = field.with_field_mapping(mapping.clone()),
            None => trace!(entity = %current.class, field = %leaf, "no mapping, virtual field"),
        }
        debug!(entity = %class, %path, kind = ?field.mapping_kind(), "field description created");
        Ok(field)
    }

    fn lookup(&self, class: &str) -> Result<&EntityMetadata> {
        self.get(class).ok_or_else(|| FieldsError::EntityNotFound {
            name: class.to_string(),
        })
    }
}
