//! End-to-end integration test over the fixture schemas
//!
//! Exercises the complete flow: schema directory loading -> stored
//! configuration loading -> reconciliation -> re-reconciliation.

use std::path::PathBuf;
use std::sync::Arc;

use meta_schema::{
    ContentConfiguration, DocumentStore, InMemorySchemaRegistry, Schema, SchemaLoader,
    TypeClassifier,
};
use meta_sync::MetadataSynchronizer;
use pretty_assertions::assert_eq;
use serde_json::json;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures")
}

fn load_registry() -> InMemorySchemaRegistry {
    SchemaLoader::new()
        .load_dir(&fixtures().join("schemas"))
        .expect("fixture schemas load")
}

fn synchronizer(registry: InMemorySchemaRegistry) -> MetadataSynchronizer {
    MetadataSynchronizer::new(Arc::new(TypeClassifier::default()), Arc::new(registry))
}

fn article(registry: &InMemorySchemaRegistry) -> Schema {
    registry
        .get("article", None)
        .cloned()
        .expect("article fixture registered")
}

#[test]
fn test_fixture_registry() {
    let registry = load_registry();
    let models: Vec<String> = registry.list_models().iter().map(ToString::to_string).collect();
    assert_eq!(models, vec!["article", "category", "users-permissions::user"]);
}

#[tokio::test]
async fn test_reconcile_stored_fixture() {
    let registry = load_registry();
    let schema = article(&registry);
    let stored: ContentConfiguration = DocumentStore::new()
        .load(&fixtures().join("stored/article.json"))
        .unwrap();

    let result = synchronizer(registry).sync(&stored, &schema).await;

    let keys: Vec<&str> = result.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["id", "title", "body", "payload", "author", "category", "tags"]
    );

    let value = serde_json::to_value(&result).unwrap();

    // Identity: empty edit, stored label kept
    assert_eq!(
        value["id"],
        json!({"edit": {}, "list": {"label": "Identifier", "searchable": true, "sortable": true}})
    );

    // Stored fields survive untouched where still valid
    assert_eq!(
        value["title"],
        json!({
            "edit": {"label": "Headline", "description": "Shown on cards", "placeholder": "", "visible": true, "editable": true},
            "list": {"label": "Headline", "searchable": true, "sortable": true}
        })
    );

    // json cannot be sorted or searched any more
    assert_eq!(
        value["payload"]["list"],
        json!({"label": "Payload", "searchable": false, "sortable": false})
    );

    // media is not sortable on user -> first string attribute
    assert_eq!(value["author"]["edit"]["mainField"], "username");

    // no string attribute on category -> its identity attribute
    assert_eq!(value["category"]["edit"]["mainField"], "_id");

    // tag is not registered -> stored value passes through
    assert_eq!(value["tags"]["edit"]["mainField"], "slug");

    // removed attribute is gone
    assert!(value.get("legacyField").is_none());
}

#[tokio::test]
async fn test_reconciled_fixture_is_stable() {
    let registry = load_registry();
    let schema = article(&registry);
    let stored: ContentConfiguration = DocumentStore::new()
        .load(&fixtures().join("stored/article.json"))
        .unwrap();
    let sync = synchronizer(registry);

    let first = ContentConfiguration::new(sync.sync(&stored, &schema).await);
    let second = ContentConfiguration::new(sync.sync(&first, &schema).await);

    assert_eq!(first, second);
    assert!(sync.check(&second, &schema).await.is_clean());
}

#[tokio::test]
async fn test_concurrent_sync_of_every_fixture() {
    let registry = load_registry();
    let schemas: Vec<Schema> = registry
        .list_models()
        .iter()
        .filter_map(|key| registry.get(&key.name, key.namespace.as_deref()).cloned())
        .collect();
    let sync = synchronizer(registry);

    let handles: Vec<_> = schemas
        .into_iter()
        .map(|schema| {
            let sync = sync.clone();
            tokio::spawn(async move {
                let metadatas = sync.sync(&ContentConfiguration::default(), &schema).await;
                (schema, metadatas)
            })
        })
        .collect();

    for handle in handles {
        let (schema, metadatas) = handle.await.unwrap();
        assert!(metadatas.contains_key(schema.id_attribute()));
        for name in schema.attributes.keys() {
            assert!(metadatas.contains_key(name), "{}: {}", schema.name, name);
        }
    }
}
