//! Persistence mapping types.
//!
//! A field is either backed by a plain column or by an association to another
//! entity. Association kinds are the four standard relation categories; nothing
//! else is ever treated as a relation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The relation category of an association mapping.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum MappingKind {
    ManyToOne,
    OneToOne,
    OneToMany,
    ManyToMany,
}

impl MappingKind {
    pub const ALL: [MappingKind; 4] = [
        MappingKind::ManyToOne,
        MappingKind::OneToOne,
        MappingKind::OneToMany,
        MappingKind::ManyToMany,
    ];

    /// Kebab-case name as used in metadata documents.
    pub fn as_str(self) -> &'static str {
        match self {
            MappingKind::ManyToOne => "many-to-one",
            MappingKind::OneToOne => "one-to-one",
            MappingKind::OneToMany => "one-to-many",
            MappingKind::ManyToMany => "many-to-many",
        }
    }

    /// Display type tag a field of this kind is listed as.
    pub fn type_tag(self) -> &'static str {
        match self {
            MappingKind::ManyToOne => "many_to_one",
            MappingKind::OneToOne => "one_to_one",
            MappingKind::OneToMany => "one_to_many",
            MappingKind::ManyToMany => "many_to_many",
        }
    }
}

impl fmt::Display for MappingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mapping of a scalar column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Filled from the owning map key when loaded from a metadata document.
    #[serde(default)]
    pub field_name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u32>,
}

impl ColumnMapping {
    pub fn new(field_name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            column_type: column_type.into(),
            nullable: false,
            length: None,
            precision: None,
            scale: None,
        }
    }
}

/// Mapping of a relation to another entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssociationMapping {
    #[serde(default)]
    pub field_name: String,
    pub kind: MappingKind,
    pub target_entity: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapped_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inversed_by: Option<String>,
}

impl AssociationMapping {
    pub fn new(
        field_name: impl Into<String>,
        kind: MappingKind,
        target_entity: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            kind,
            target_entity: target_entity.into(),
            mapped_by: None,
            inversed_by: None,
        }
    }
}

/// Raw persistence mapping of one field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "mapping", rename_all = "kebab-case")]
pub enum FieldMapping {
    Column(ColumnMapping),
    Association(AssociationMapping),
}

impl FieldMapping {
    pub fn field_name(&self) -> &str {
        match self {
            FieldMapping::Column(c) => &c.field_name,
            FieldMapping::Association(a) => &a.field_name,
        }
    }

    /// Relation kind, `None` for plain columns.
    pub fn kind(&self) -> Option<MappingKind> {
        match self {
            FieldMapping::Column(_) => None,
            FieldMapping::Association(a) => Some(a.kind),
        }
    }

    pub fn as_association(&self) -> Option<&AssociationMapping> {
        match self {
            FieldMapping::Association(a) => Some(a),
            FieldMapping::Column(_) => None,
        }
    }

    pub(crate) fn set_field_name(&mut self, name: &str) {
        match self {
            FieldMapping::Column(c) => c.field_name = name.to_string(),
            FieldMapping::Association(a) => a.field_name = name.to_string(),
        }
    }
}

impl From<ColumnMapping> for FieldMapping {
    fn from(mapping: ColumnMapping) -> Self {
        FieldMapping::Column(mapping)
    }
}

impl From<AssociationMapping> for FieldMapping {
    fn from(mapping: AssociationMapping) -> Self {
        FieldMapping::Association(mapping)
    }
}

/// Direction of the default sort on a sortable column.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
