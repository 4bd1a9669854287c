//! The admin capability a list builder works against.

use adminkit_fields::FieldDescription;

/// Administrative configuration of one entity, as seen by a list builder.
///
/// Implemented by the admin layer; the builder never owns or constructs one.
pub trait AdminContext {
    /// Class name of the administered entity, used in diagnostics.
    fn entity_class(&self) -> &str;

    /// Record `field` as a list column of this admin under `name`.
    fn add_list_field_description(&mut self, name: &str, field: &FieldDescription);

    /// Link a relation field to the admin of its target entity.
    fn attach_admin_class(&mut self, field: &mut FieldDescription);
}
