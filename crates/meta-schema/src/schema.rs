//! Schema definitions - an entity type with named, typed attributes
//!
//! # Example JSON
//!
//! ```json
//! {
//!   "name": "article",
//!   "attributes": {
//!     "title": { "type": "string" },
//!     "author": { "targetModel": "user", "plugin": "users-permissions" }
//!   },
//!   "options": { "idAttribute": "id" },
//!   "config": { "metadatas": { "title": { "list": { "sortable": false } } } }
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::attribute::AttributeDefinition;
use crate::metadata::{ContentConfiguration, Metadata, Metadatas};

/// Identity attribute name used when a schema does not declare one.
pub const DEFAULT_ID_ATTRIBUTE: &str = "id";

/// Structural definition of an entity type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    /// Model name, the key other schemas use in `targetModel`
    pub name: String,
    /// Namespace the model belongs to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin: Option<String>,
    /// Attributes in declaration order
    #[serde(default)]
    pub attributes: IndexMap<String, AttributeDefinition>,
    #[serde(default)]
    pub options: SchemaOptions,
    /// Previously persisted configuration
    #[serde(default)]
    pub config: ContentConfiguration,
}

/// Schema-level options
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_attribute: Option<String>,
}

impl Schema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_plugin(mut self, plugin: impl Into<String>) -> Self {
        self.plugin = Some(plugin.into());
        self
    }

    /// Append an attribute, replacing any previous definition of the same name.
    pub fn with_attribute(mut self, name: impl Into<String>, definition: AttributeDefinition) -> Self {
        self.attributes.insert(name.into(), definition);
        self
    }

    pub fn with_id_attribute(mut self, name: impl Into<String>) -> Self {
        self.options.id_attribute = Some(name.into());
        self
    }

    pub fn with_metadatas(mut self, metadatas: Metadatas) -> Self {
        self.config.metadatas = metadatas;
        self
    }

    /// Name of the identity attribute, `"id"` unless overridden.
    pub fn id_attribute(&self) -> &str {
        self.options
            .id_attribute
            .as_deref()
            .unwrap_or(DEFAULT_ID_ATTRIBUTE)
    }

    pub fn is_id_attribute(&self, name: &str) -> bool {
        name == self.id_attribute()
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeDefinition> {
        self.attributes.get(name)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Metadata stored on the schema itself for one attribute.
    pub fn stored_metadata(&self, name: &str) -> Option<&Metadata> {
        self.config.metadatas.get(name)
    }
}
