//! Schema registry for relation targets
//!
//! Relations name their target by model name plus an optional plugin
//! namespace. [`SchemaRegistry`] is the lookup the reconciliation engine is
//! handed; [`InMemorySchemaRegistry`] is the map-backed implementation.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::schema::Schema;

/// Resolves a relation's target model to its schema.
///
/// Resolved schemas are shared handles; a lookup never copies the schema.
#[async_trait]
pub trait SchemaRegistry: Send + Sync {
    /// Look up `target_model` in `namespace`. `None` when unknown.
    async fn resolve(&self, target_model: &str, namespace: Option<&str>) -> Option<Arc<Schema>>;
}

/// Registry key: model name within an optional namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SchemaKey {
    pub namespace: Option<String>,
    pub name: String,
}

impl SchemaKey {
    pub fn new(name: impl Into<String>, namespace: Option<&str>) -> Self {
        Self {
            namespace: namespace.map(String::from),
            name: name.into(),
        }
    }

    /// Key a schema is registered under.
    pub fn of(schema: &Schema) -> Self {
        Self::new(schema.name.clone(), schema.plugin.as_deref())
    }
}

impl fmt::Display for SchemaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(namespace) => write!(f, "{}::{}", namespace, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Registry holding schemas in memory.
///
/// # Example
///
/// ```
/// use meta_schema::{InMemorySchemaRegistry, Schema};
///
/// let mut registry = InMemorySchemaRegistry::new();
/// registry.register(Schema::new("user").with_plugin("users-permissions"));
/// assert!(registry.contains("user", Some("users-permissions")));
/// assert!(!registry.contains("user", None));
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySchemaRegistry {
    schemas: HashMap<SchemaKey, Arc<Schema>>,
}

impl InMemorySchemaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            schemas: HashMap::new(),
        }
    }

    /// Register a schema under its name and plugin.
    ///
    /// A schema already registered under the same key is replaced.
    pub fn register(&mut self, schema: Schema) {
        self.schemas.insert(SchemaKey::of(&schema), Arc::new(schema));
    }

    /// Builder form of [`register`](Self::register).
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.register(schema);
        self
    }

    pub fn get(&self, name: &str, namespace: Option<&str>) -> Option<&Schema> {
        self.schemas
            .get(&SchemaKey::new(name, namespace))
            .map(Arc::as_ref)
    }

    pub fn contains(&self, name: &str, namespace: Option<&str>) -> bool {
        self.get(name, namespace).is_some()
    }

    /// Sorted keys of every registered schema.
    pub fn list_models(&self) -> Vec<SchemaKey> {
        let mut keys: Vec<SchemaKey> = self.schemas.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

#[async_trait]
impl SchemaRegistry for InMemorySchemaRegistry {
    async fn resolve(&self, target_model: &str, namespace: Option<&str>) -> Option<Arc<Schema>> {
        let found = self
            .schemas
            .get(&SchemaKey::new(target_model, namespace))
            .cloned();
        if found.is_none() {
            tracing::debug!(
                target_model = %SchemaKey::new(target_model, namespace),
                "Relation target not registered"
            );
        }
        found
    }
}
