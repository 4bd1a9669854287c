//! FieldDescription, the record of one displayed column.

use serde::{Deserialize, Serialize};

use crate::options::FieldOptions;
use crate::types::{AssociationMapping, FieldMapping, MappingKind};

/// Metadata of one listed attribute.
///
/// The description is owned by whoever declared the column. List builders fill
/// in `type_`, `template` and option defaults in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDescription {
    name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    template: Option<String>,
    #[serde(default)]
    options: FieldOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    field_mapping: Option<FieldMapping>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    parent_association_mappings: Vec<AssociationMapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    owner_class: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    association_admin: Option<String>,
}

impl FieldDescription {
    /// A virtual field: no persistence mapping, no type yet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_: None,
            template: None,
            options: FieldOptions::default(),
            field_mapping: None,
            parent_association_mappings: Vec::new(),
            owner_class: None,
            association_admin: None,
        }
    }

    pub fn with_options(mut self, options: FieldOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_field_mapping(mut self, mapping: impl Into<FieldMapping>) -> Self {
        self.field_mapping = Some(mapping.into());
        self
    }

    pub fn with_parent_association_mappings(mut self, chain: Vec<AssociationMapping>) -> Self {
        self.parent_association_mappings = chain;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The display type, `None` while unresolved. An empty tag reads as unresolved.
    pub fn type_(&self) -> Option<&str> {
        self.type_.as_deref().filter(|t| !t.is_empty())
    }

    pub fn set_type(&mut self, type_: impl Into<String>) {
        self.type_ = Some(type_.into());
    }

    pub fn clear_type(&mut self) {
        self.type_ = None;
    }

    /// The template path, `None` while unset. An empty path reads as unset.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref().filter(|t| !t.is_empty())
    }

    pub fn set_template(&mut self, template: impl Into<String>) {
        self.template = Some(template.into());
    }

    pub fn options(&self) -> &FieldOptions {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut FieldOptions {
        &mut self.options
    }

    pub fn field_mapping(&self) -> Option<&FieldMapping> {
        self.field_mapping.as_ref()
    }

    /// Relation kind of the underlying mapping, `None` for columns and virtual fields.
    pub fn mapping_kind(&self) -> Option<MappingKind> {
        self.field_mapping.as_ref().and_then(FieldMapping::kind)
    }

    /// Association chain walked to reach this field, outermost first.
    pub fn parent_association_mappings(&self) -> &[AssociationMapping] {
        &self.parent_association_mappings
    }

    /// Class name of the entity whose admin owns this field, once fixed.
    pub fn owner_class(&self) -> Option<&str> {
        self.owner_class.as_deref()
    }

    pub fn set_owner_class(&mut self, class: impl Into<String>) {
        self.owner_class = Some(class.into());
    }

    /// Code of the admin handling the related entity, set for relation fields.
    pub fn association_admin(&self) -> Option<&str> {
        self.association_admin.as_deref()
    }

    pub fn set_association_admin(&mut self, code: impl Into<String>) {
        self.association_admin = Some(code.into());
    }

    /// Target entity of the association, if this field is one.
    pub fn target_entity(&self) -> Option<&str> {
        self.field_mapping
            .as_ref()
            .and_then(FieldMapping::as_association)
            .map(|a| a.target_entity.as_str())
    }
}
