//! ListBuilder — resolves type, options and template of list columns.

use adminkit_fields::{FieldDescription, FieldDescriptionCollection, SortOrder};
use tracing::debug;

use crate::admin::AdminContext;
use crate::config::ListBuilderConfig;
use crate::constants::{
    ACTIONS_TYPE, ACTION_FIELD_NAME, ACTION_LIST_TEMPLATE, LEGACY_ACTION_TYPE,
};
use crate::error::{ListError, Result};
use crate::guesser::{MappingTypeGuesser, TypeGuesser};
use crate::templates::{action_template, association_template, TemplateMap};

/// Builds list view columns for an admin.
///
/// Holds no per-call state: the guesser and template map are read-only, so one
/// builder can serve any number of admins.
pub struct ListBuilder {
    guesser: Box<dyn TypeGuesser>,
    templates: TemplateMap,
}

impl ListBuilder {
    pub fn new(guesser: impl TypeGuesser + 'static, templates: TemplateMap) -> Self {
        Self {
            guesser: Box::new(guesser),
            templates,
        }
    }

    /// Mapping-based guessing with the configured template table.
    pub fn from_config(config: &ListBuilderConfig) -> Self {
        Self::new(MappingTypeGuesser, config.template_map())
    }

    /// A fresh, empty column collection.
    pub fn base_list(&self) -> FieldDescriptionCollection {
        FieldDescriptionCollection::new()
    }

    /// Resolve the type of `field` and fix it up.
    ///
    /// An explicit `type_` always wins. Without one the guesser is asked; an empty
    /// guess leaves the type unset, which `fix_field_description` reports unless the
    /// field is the row-actions column.
    pub fn build_field(
        &self,
        type_: Option<&str>,
        field: &mut FieldDescription,
        admin: &mut dyn AdminContext,
    ) -> Result<()> {
        match type_ {
            Some(explicit) => {
                debug!(field = %field.name(), type_ = %explicit, "explicit list type");
                field.set_type(explicit);
            }
            None => {
                let guess = self.guesser.guess(field);
                match guess.type_() {
                    Some(guessed) => {
                        debug!(field = %field.name(), type_ = %guessed, confidence = ?guess.confidence(), "guessed list type");
                        field.set_type(guessed);
                    }
                    None => {
                        debug!(field = %field.name(), "type guess came back empty");
                        field.clear_type();
                    }
                }
            }
        }

        self.fix_field_description(admin, field)
    }

    /// Build `field`, register it with `admin` and add it to `list`.
    ///
    /// A column already in `list` under the same name is replaced.
    pub fn add_field(
        &self,
        list: &mut FieldDescriptionCollection,
        type_: Option<&str>,
        mut field: FieldDescription,
        admin: &mut dyn AdminContext,
    ) -> Result<()> {
        self.build_field(type_, &mut field, admin)?;
        admin.add_list_field_description(field.name(), &field);
        list.add(field);
        Ok(())
    }

    /// Apply defaults to a typed (or action) field and pick its template.
    pub fn fix_field_description(
        &self,
        admin: &mut dyn AdminContext,
        field: &mut FieldDescription,
    ) -> Result<()> {
        if field.name() == ACTION_FIELD_NAME || field.type_() == Some(ACTIONS_TYPE) {
            self.build_action_field_description(field);
        }

        field.set_owner_class(admin.entity_class());

        if let Some(mapping) = field.field_mapping().cloned() {
            let chain = field.parent_association_mappings().to_vec();
            let options = field.options_mut();
            if options.sortable != Some(false) {
                options.sortable = Some(options.sortable.unwrap_or(true));
                if options.sort_parent_association_mappings.is_none() {
                    options.sort_parent_association_mappings = Some(chain);
                }
                if options.sort_field_mapping.is_none() {
                    options.sort_field_mapping = Some(mapping);
                }
            }
            // applies whatever `sortable` ended up as
            if options.sort_order.is_none() {
                options.sort_order = Some(SortOrder::Asc);
            }
        }

        let Some(type_) = field.type_() else {
            return Err(ListError::MissingType {
                field: field.name().to_string(),
                entity_class: admin.entity_class().to_string(),
            });
        };

        if field.template().is_none() {
            if let Some(template) = self.templates.get(type_) {
                field.set_template(template);
            }

            if field.template().is_none() {
                if let Some(kind) = field.mapping_kind() {
                    debug!(field = %field.name(), %kind, "association template fallback");
                    field.set_template(association_template(kind));
                }
            }
        }

        if let Some(kind) = field.mapping_kind() {
            debug!(field = %field.name(), %kind, "attaching related admin");
            admin.attach_admin_class(field);
        }

        Ok(())
    }

    /// Normalise the row-actions column: default template, `actions` type and a
    /// template for every declared action that lacks one.
    pub fn build_action_field_description<'a>(
        &self,
        field: &'a mut FieldDescription,
    ) -> &'a mut FieldDescription {
        if field.template().is_none() {
            field.set_template(ACTION_LIST_TEMPLATE);
        }

        if matches!(field.type_(), None | Some(LEGACY_ACTION_TYPE)) {
            field.set_type(ACTIONS_TYPE);
        }

        if let Some(actions) = field.options_mut().actions.as_mut() {
            for (key, action) in actions.iter_mut() {
                if action.template.is_none() {
                    action.template = Some(action_template(key));
                }
            }
        }

        debug!(field = %field.name(), "normalised actions field");
        field
    }
}
