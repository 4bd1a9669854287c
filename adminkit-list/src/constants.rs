//! Reserved field names, type tags and template paths.

/// Name of the row-actions pseudo column.
pub const ACTION_FIELD_NAME: &str = "_action";

/// Type tag of the row-actions column.
pub const ACTIONS_TYPE: &str = "actions";

/// Older type tag still accepted for the row-actions column.
pub const LEGACY_ACTION_TYPE: &str = "_action";

/// Template of the row-actions column.
pub const ACTION_LIST_TEMPLATE: &str = "@Admin/CRUD/list__action.html";

/// Fallback template of a many-to-one relation column.
pub const LIST_MANY_TO_ONE_TEMPLATE: &str = "@Admin/CRUD/Association/list_many_to_one.html";
/// Fallback template of a one-to-one relation column.
pub const LIST_ONE_TO_ONE_TEMPLATE: &str = "@Admin/CRUD/Association/list_one_to_one.html";
/// Fallback template of a one-to-many relation column.
pub const LIST_ONE_TO_MANY_TEMPLATE: &str = "@Admin/CRUD/Association/list_one_to_many.html";
/// Fallback template of a many-to-many relation column.
pub const LIST_MANY_TO_MANY_TEMPLATE: &str = "@Admin/CRUD/Association/list_many_to_many.html";

/// Environment prefix for list builder configuration overrides.
pub const ENV_PREFIX: &str = "ADMINKIT_LIST_";
