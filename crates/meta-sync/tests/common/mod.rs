//! Shared fixtures for meta-sync integration tests

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use meta_schema::{
    AttributeClassifier, AttributeDefinition, ContentConfiguration, InMemorySchemaRegistry, Schema,
    TypeClassifier,
};
use meta_sync::MetadataSynchronizer;

/// `user` schema in the `users-permissions` namespace.
pub fn users_schema() -> Schema {
    Schema::new("user")
        .with_plugin("users-permissions")
        .with_attribute("age", AttributeDefinition::scalar("integer"))
        .with_attribute("username", AttributeDefinition::string())
        .with_attribute("email", AttributeDefinition::scalar("email"))
        .with_attribute("avatar", AttributeDefinition::scalar("media"))
}

/// `article` schema: a title and an author relation to `users_schema`.
pub fn article_schema() -> Schema {
    Schema::new("article")
        .with_attribute("title", AttributeDefinition::string())
        .with_attribute(
            "author",
            AttributeDefinition::plugin_relation("user", "users-permissions"),
        )
}

pub fn registry() -> InMemorySchemaRegistry {
    InMemorySchemaRegistry::new().with_schema(users_schema())
}

pub fn synchronizer() -> MetadataSynchronizer {
    synchronizer_with(TypeClassifier::default())
}

pub fn synchronizer_with(classifier: impl AttributeClassifier + 'static) -> MetadataSynchronizer {
    MetadataSynchronizer::new(Arc::new(classifier), Arc::new(registry()))
}

pub fn stored(json: &str) -> ContentConfiguration {
    ContentConfiguration::new(serde_json::from_str(json).expect("valid stored metadata"))
}

/// Type-driven classifier with individual `(model, attribute)` pairs forced
/// to be neither sortable nor searchable.
#[derive(Default)]
pub struct PinnedClassifier {
    inner: TypeClassifier,
    unsortable: HashSet<(String, String)>,
}

impl PinnedClassifier {
    pub fn unsortable(mut self, model: &str, attribute: &str) -> Self {
        self.unsortable.insert((model.to_string(), attribute.to_string()));
        self
    }

    fn pinned(&self, schema: &Schema, name: &str) -> bool {
        self.unsortable
            .contains(&(schema.name.clone(), name.to_string()))
    }
}

impl AttributeClassifier for PinnedClassifier {
    fn is_sortable(&self, schema: &Schema, name: &str) -> bool {
        !self.pinned(schema, name) && self.inner.is_sortable(schema, name)
    }

    fn is_searchable(&self, schema: &Schema, name: &str) -> bool {
        !self.pinned(schema, name) && self.inner.is_searchable(schema, name)
    }

    fn is_visible(&self, schema: &Schema, name: &str) -> bool {
        self.inner.is_visible(schema, name)
    }
}
