//! Type to template lookup.

use adminkit_fields::MappingKind;
use indexmap::IndexMap;

use crate::constants::{
    ACTION_LIST_TEMPLATE, LIST_MANY_TO_MANY_TEMPLATE, LIST_MANY_TO_ONE_TEMPLATE,
    LIST_ONE_TO_MANY_TEMPLATE, LIST_ONE_TO_ONE_TEMPLATE,
};

/// Standard list templates per display type.
const DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    ("actions", ACTION_LIST_TEMPLATE),
    ("array", "@Admin/CRUD/list_array.html"),
    ("boolean", "@Admin/CRUD/list_boolean.html"),
    ("date", "@Admin/CRUD/list_date.html"),
    ("time", "@Admin/CRUD/list_time.html"),
    ("datetime", "@Admin/CRUD/list_datetime.html"),
    ("text", "@Admin/CRUD/list_string.html"),
    ("textarea", "@Admin/CRUD/list_string.html"),
    ("email", "@Admin/CRUD/list_email.html"),
    ("trans", "@Admin/CRUD/list_trans.html"),
    ("string", "@Admin/CRUD/list_string.html"),
    ("integer", "@Admin/CRUD/list_string.html"),
    ("float", "@Admin/CRUD/list_string.html"),
    ("number", "@Admin/CRUD/list_string.html"),
    ("identifier", "@Admin/CRUD/list_string.html"),
    ("currency", "@Admin/CRUD/list_currency.html"),
    ("percent", "@Admin/CRUD/list_percent.html"),
    ("choice", "@Admin/CRUD/list_choice.html"),
    ("url", "@Admin/CRUD/list_url.html"),
    ("html", "@Admin/CRUD/list_html.html"),
];

/// Immutable mapping from display type to template path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateMap {
    templates: IndexMap<String, String>,
}

impl TemplateMap {
    /// An empty map: every template comes from the association fallback or the field itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard type table.
    pub fn standard() -> Self {
        DEFAULT_TEMPLATES.iter().copied().collect()
    }

    /// Template for `type_`. A blank entry reads as no entry.
    pub fn get(&self, type_: &str) -> Option<&str> {
        self.templates
            .get(type_)
            .map(String::as_str)
            .filter(|t| !t.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TemplateMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            templates: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<IndexMap<String, String>> for TemplateMap {
    fn from(templates: IndexMap<String, String>) -> Self {
        Self { templates }
    }
}

/// Owned copy of the standard table, used as configuration defaults.
pub(crate) fn standard_templates() -> IndexMap<String, String> {
    DEFAULT_TEMPLATES
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Fallback list template for a relation field.
pub fn association_template(kind: MappingKind) -> &'static str {
    match kind {
        MappingKind::ManyToOne => LIST_MANY_TO_ONE_TEMPLATE,
        MappingKind::OneToOne => LIST_ONE_TO_ONE_TEMPLATE,
        MappingKind::OneToMany => LIST_ONE_TO_MANY_TEMPLATE,
        MappingKind::ManyToMany => LIST_MANY_TO_MANY_TEMPLATE,
    }
}

/// Template of a single row action, e.g. `edit` -> `@Admin/CRUD/list__action_edit.html`.
pub fn action_template(key: &str) -> String {
    format!("@Admin/CRUD/list__action_{key}.html")
}
