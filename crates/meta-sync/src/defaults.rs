//! Default metadata generation
//!
//! Builds the metadata an attribute gets when nothing has been configured
//! for it yet, with any overrides stored on the schema itself applied on
//! top.

use std::sync::Arc;

use meta_schema::{
    AttributeClassifier, EditMetadata, ListMetadata, Metadata, Metadatas, Schema, SchemaRegistry,
};

use crate::main_field::default_main_field;

/// List label of the identity attribute when nothing else provides one.
pub const DEFAULT_ID_LABEL: &str = "Id";

/// Generator for default per-attribute metadata
#[derive(Clone)]
pub struct DefaultMetadataGenerator {
    classifier: Arc<dyn AttributeClassifier>,
    registry: Arc<dyn SchemaRegistry>,
}

impl DefaultMetadataGenerator {
    pub fn new(classifier: Arc<dyn AttributeClassifier>, registry: Arc<dyn SchemaRegistry>) -> Self {
        Self {
            classifier,
            registry,
        }
    }

    /// Default metadata for every attribute of `schema`.
    ///
    /// The identity attribute always gets an empty edit descriptor and a
    /// sortable, searchable list descriptor; it is appended if the schema
    /// does not declare it.
    pub async fn defaults_for_schema(&self, schema: &Schema) -> Metadatas {
        let mut metadatas = Metadatas::with_capacity(schema.attributes.len() + 1);

        for name in schema.attributes.keys() {
            let mut metadata = self.default_for_attribute(schema, name).await;
            if schema.is_id_attribute(name) {
                metadata.edit = EditMetadata::default();
            }
            metadatas.insert(name.clone(), metadata);
        }

        let id_attribute = schema.id_attribute();
        let label = metadatas
            .get(id_attribute)
            .and_then(|metadata| metadata.list.label.clone())
            .unwrap_or_else(|| DEFAULT_ID_LABEL.to_string());
        metadatas.insert(id_attribute.to_string(), identity_metadata(label));

        metadatas
    }

    /// Default metadata for one attribute.
    ///
    /// Relations get a `mainField` picked on their target schema, even when
    /// the target cannot be resolved. Fields stored under
    /// `schema.config.metadatas[name]` override the computed ones.
    pub async fn default_for_attribute(&self, schema: &Schema, name: &str) -> Metadata {
        let label = upper_first(name);

        let mut edit = EditMetadata {
            label: Some(label.clone()),
            description: Some(String::new()),
            placeholder: Some(String::new()),
            visible: Some(self.classifier.is_visible(schema, name)),
            editable: Some(true),
            main_field: None,
        };

        if let Some(definition) = schema.attribute(name)
            && self.classifier.is_relation(definition)
            && let Some((target_model, namespace)) = definition.target()
        {
            let target = self.registry.resolve(target_model, namespace).await;
            edit.main_field = Some(default_main_field(target.as_deref()));
        }

        let mut list = ListMetadata {
            label: Some(label),
            searchable: Some(self.classifier.is_searchable(schema, name)),
            sortable: Some(self.classifier.is_sortable(schema, name)),
        };

        if let Some(stored) = schema.stored_metadata(name) {
            edit.overlay(&stored.edit);
            list.overlay(&stored.list);
        }

        Metadata { edit, list }
    }
}

/// Metadata of the identity attribute: not editable through the generic
/// form, always sortable and searchable.
pub fn identity_metadata(label: impl Into<String>) -> Metadata {
    Metadata {
        edit: EditMetadata::default(),
        list: ListMetadata {
            label: Some(label.into()),
            searchable: Some(true),
            sortable: Some(true),
        },
    }
}

fn upper_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
