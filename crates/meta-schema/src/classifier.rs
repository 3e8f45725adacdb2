//! Attribute classification
//!
//! The reconciliation engine only asks four questions about an attribute.
//! [`AttributeClassifier`] is the seam; [`TypeClassifier`] answers them from
//! the attribute's declared type.

use std::collections::HashSet;

use crate::attribute::AttributeDefinition;
use crate::schema::Schema;

/// Pure predicates over schema attributes.
pub trait AttributeClassifier: Send + Sync {
    /// Can the list view sort on `name`?
    fn is_sortable(&self, schema: &Schema, name: &str) -> bool;

    /// Can the list view search on `name`?
    fn is_searchable(&self, schema: &Schema, name: &str) -> bool;

    /// Is `name` shown in the edit form by default?
    fn is_visible(&self, schema: &Schema, name: &str) -> bool;

    fn is_relation(&self, definition: &AttributeDefinition) -> bool {
        definition.is_relation()
    }
}

/// Classifier driven by scalar type names.
///
/// - the identity attribute is sortable and searchable but hidden
/// - relations are visible but neither sortable nor searchable
/// - scalars are sortable and searchable unless their type is listed as
///   non-sortable, and visible unless their type is listed as hidden
/// - unknown attribute names get `false` everywhere
#[derive(Debug, Clone)]
pub struct TypeClassifier {
    non_sortable: HashSet<String>,
    hidden: HashSet<String>,
}

impl TypeClassifier {
    /// Classifier with the built-in type lists.
    ///
    /// Non-sortable: `json`, `group`, `array`, `media`, `password`.
    /// Hidden: `password`.
    pub fn with_builtins() -> Self {
        let non_sortable = ["json", "group", "array", "media", "password"]
            .into_iter()
            .map(String::from)
            .collect();
        let hidden = ["password"].into_iter().map(String::from).collect();
        Self {
            non_sortable,
            hidden,
        }
    }

    /// Mark another scalar type as neither sortable nor searchable.
    pub fn with_non_sortable(mut self, attr_type: impl Into<String>) -> Self {
        self.non_sortable.insert(attr_type.into());
        self
    }

    /// Mark another scalar type as hidden from the edit form.
    pub fn with_hidden(mut self, attr_type: impl Into<String>) -> Self {
        self.hidden.insert(attr_type.into());
        self
    }

    fn is_orderable(&self, schema: &Schema, name: &str) -> bool {
        if schema.is_id_attribute(name) {
            return true;
        }
        match schema.attribute(name) {
            Some(AttributeDefinition::Scalar { attr_type }) => !self.non_sortable.contains(attr_type),
            Some(AttributeDefinition::Relation { .. }) | None => false,
        }
    }
}

impl Default for TypeClassifier {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl AttributeClassifier for TypeClassifier {
    fn is_sortable(&self, schema: &Schema, name: &str) -> bool {
        self.is_orderable(schema, name)
    }

    fn is_searchable(&self, schema: &Schema, name: &str) -> bool {
        self.is_orderable(schema, name)
    }

    fn is_visible(&self, schema: &Schema, name: &str) -> bool {
        if schema.is_id_attribute(name) {
            return false;
        }
        match schema.attribute(name) {
            Some(AttributeDefinition::Scalar { attr_type }) => !self.hidden.contains(attr_type),
            Some(AttributeDefinition::Relation { .. }) => true,
            None => false,
        }
    }
}
