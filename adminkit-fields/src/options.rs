//! Per-field list options.
//!
//! The builders only ever touch the members named here. Any other key a caller
//! declares is preserved in `extra` and round-trips untouched.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::{AssociationMapping, FieldMapping, SortOrder};

/// Options of one row-level action button.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ActionOptions {
    pub fn with_template(template: impl Into<String>) -> Self {
        Self {
            template: Some(template.into()),
            extra: IndexMap::new(),
        }
    }
}

/// Options of a listed field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FieldOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_parent_association_mappings: Option<Vec<AssociationMapping>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_field_mapping: Option<FieldMapping>,
    /// Internal default sort direction, written by the list builder.
    #[serde(
        rename = "_sort_order",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sort_order: Option<SortOrder>,
    /// Row actions keyed by action name, in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<IndexMap<String, ActionOptions>>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = Some(sortable);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add a row action. A later action with the same key replaces the earlier one.
    pub fn action(mut self, key: impl Into<String>, action: ActionOptions) -> Self {
        self.actions
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), action);
        self
    }

    /// Set an extension option not modelled by a typed member.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    pub fn get_extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
