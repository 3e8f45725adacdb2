//! MetadataSynchronizer implementation
//!
//! Reconciles a stored metadata configuration against the current shape of
//! its schema. Runs in three passes:
//!
//! 1. **prune**: stored entries of attributes that left the schema are dropped
//! 2. **merge**: generated defaults are overlaid with the remaining stored
//!    entries, field by field
//! 3. **re-validate**: the merge can bring back flags and display fields that
//!    were valid for an older schema, so every entry is checked again and
//!    repaired in place
//!
//! Nothing in here fails. Stale values are corrected, missing values are
//! defaulted, and a relation whose target cannot be resolved keeps its
//! stored `mainField`.

use std::sync::Arc;

use meta_schema::{
    AttributeClassifier, ContentConfiguration, EditMetadata, Metadata, Metadatas, Schema,
    SchemaRegistry,
};
use tracing::debug;

use crate::defaults::DefaultMetadataGenerator;
use crate::main_field::default_main_field;
use crate::report::SyncReport;

/// Engine reconciling stored metadata with a schema
///
/// The collaborators are shared behind `Arc`, so a synchronizer can be
/// cloned into concurrent tasks working on different schemas.
#[derive(Clone)]
pub struct MetadataSynchronizer {
    classifier: Arc<dyn AttributeClassifier>,
    registry: Arc<dyn SchemaRegistry>,
    defaults: DefaultMetadataGenerator,
}

impl MetadataSynchronizer {
    pub fn new(classifier: Arc<dyn AttributeClassifier>, registry: Arc<dyn SchemaRegistry>) -> Self {
        let defaults = DefaultMetadataGenerator::new(classifier.clone(), registry.clone());
        Self {
            classifier,
            registry,
            defaults,
        }
    }

    /// Generator used for the default pass.
    pub fn defaults(&self) -> &DefaultMetadataGenerator {
        &self.defaults
    }

    /// Compute the metadata configuration matching `schema`.
    ///
    /// With nothing stored the result is the generated defaults. The
    /// re-validation pass runs either way, since overrides kept in
    /// `schema.config` can be just as stale as a stored configuration.
    /// Feeding the result back in as `stored` returns it unchanged.
    pub async fn sync(&self, stored: &ContentConfiguration, schema: &Schema) -> Metadatas {
        let mut merged = self.defaults.defaults_for_schema(schema).await;

        if !stored.is_empty() {
            merge_stored(&mut merged, stored, schema);
        }

        for (name, entry) in merged.iter_mut() {
            self.revalidate(schema, name, entry).await;
        }

        merged
    }

    /// Reconcile and describe what changed relative to `stored`.
    pub async fn check(&self, stored: &ContentConfiguration, schema: &Schema) -> SyncReport {
        let reconciled = self.sync(stored, schema).await;
        SyncReport::between(&stored.metadatas, &reconciled)
    }

    async fn revalidate(&self, schema: &Schema, name: &str, entry: &mut Metadata) {
        if entry.list.is_sortable() && !self.classifier.is_sortable(schema, name) {
            debug!(model = %schema.name, attribute = %name, "Attribute is no longer sortable");
            entry.list.sortable = Some(false);
        }

        if entry.list.is_searchable() && !self.classifier.is_searchable(schema, name) {
            debug!(model = %schema.name, attribute = %name, "Attribute is no longer searchable");
            entry.list.searchable = Some(false);
        }

        let Some(main_field) = entry.edit.main_field.clone() else {
            return;
        };

        let definition = match schema.attribute(name) {
            Some(definition) if self.classifier.is_relation(definition) => definition,
            _ => {
                debug!(model = %schema.name, attribute = %name, "Dropping mainField of non-relation attribute");
                entry.edit.main_field = None;
                return;
            }
        };

        if schema.is_id_attribute(&main_field) {
            return;
        }

        let Some((target_model, namespace)) = definition.target() else {
            return;
        };

        // An unresolved target cannot be checked; the stored value stands.
        let Some(target) = self.registry.resolve(target_model, namespace).await else {
            return;
        };

        if !self.classifier.is_sortable(&target, &main_field) {
            let replacement = default_main_field(Some(&*target));
            debug!(
                model = %schema.name,
                attribute = %name,
                from = %main_field,
                to = %replacement,
                "Replacing mainField that is not sortable on target"
            );
            entry.edit.main_field = Some(replacement);
        }
    }
}

/// Overlay the stored entries of attributes still in `schema` onto `merged`.
fn merge_stored(merged: &mut Metadatas, stored: &ContentConfiguration, schema: &Schema) {
    for (name, entry) in &stored.metadatas {
        if !schema.has_attribute(name) {
            debug!(model = %schema.name, attribute = %name, "Dropping metadata of removed attribute");
            continue;
        }
        if let Some(base) = merged.get_mut(name) {
            base.overlay(entry);
        }
    }

    if let Some(identity) = merged.get_mut(schema.id_attribute()) {
        identity.edit = EditMetadata::default();
    }
}
