//! Insertion-ordered collection of field descriptions.

use indexmap::IndexMap;

use crate::description::FieldDescription;

/// The columns of one list view, keyed by field name.
#[derive(Debug, Clone, Default)]
pub struct FieldDescriptionCollection {
    elements: IndexMap<String, FieldDescription>,
}

impl FieldDescriptionCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field under its name. A field with the same name is replaced in place.
    pub fn add(&mut self, field: FieldDescription) {
        self.elements.insert(field.name().to_string(), field);
    }

    pub fn get(&self, name: &str) -> Option<&FieldDescription> {
        self.elements.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut FieldDescription> {
        self.elements.get_mut(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.elements.contains_key(name)
    }

    /// Remove a field, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<FieldDescription> {
        self.elements.shift_remove(name)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldDescription> {
        self.elements.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.elements.keys().map(String::as_str)
    }

    /// Move the listed names to the front in the given order. Unknown names are
    /// ignored; unlisted fields keep their relative order after them.
    pub fn reorder<S: AsRef<str>>(&mut self, keys: &[S]) {
        let mut ordered = IndexMap::with_capacity(self.elements.len());
        for key in keys {
            if let Some((name, field)) = self.elements.shift_remove_entry(key.as_ref()) {
                ordered.insert(name, field);
            }
        }
        ordered.extend(self.elements.drain(..));
        self.elements = ordered;
    }
}

impl IntoIterator for FieldDescriptionCollection {
    type Item = FieldDescription;
    type IntoIter = indexmap::map::IntoValues<String, FieldDescription>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_values()
    }
}
