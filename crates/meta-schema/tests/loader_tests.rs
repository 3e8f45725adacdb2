//! Tests for the DocumentStore and the SchemaLoader

use std::fs;

use meta_schema::{
    AttributeDefinition, ContentConfiguration, DocumentStore, Error, Schema, SchemaLoader,
    SchemaRegistry,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

// ============================================================================
// Schema documents
// ============================================================================

#[test]
fn test_parse_schema_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("article.json");
    fs::write(
        &path,
        r#"{
  "name": "article",
  "attributes": {
    "title": { "type": "string" },
    "author": { "targetModel": "user", "plugin": "users-permissions" }
  },
  "config": {
    "metadatas": {
      "title": { "list": { "sortable": false } }
    }
  }
}"#,
    )
    .unwrap();

    let schema = SchemaLoader::new().load_schema(&path).unwrap();
    assert_eq!(schema.name, "article");
    assert_eq!(schema.attribute("title"), Some(&AttributeDefinition::string()));
    assert_eq!(
        schema.attribute("author"),
        Some(&AttributeDefinition::plugin_relation("user", "users-permissions"))
    );
    assert_eq!(
        schema.stored_metadata("title").unwrap().list.sortable,
        Some(false)
    );
}

#[test]
fn test_parse_schema_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tag.toml");
    fs::write(
        &path,
        r#"
name = "tag"

[options]
idAttribute = "_id"

[attributes.label]
type = "string"

[attributes.articles]
targetModel = "article"
relation = "manyToMany"
"#,
    )
    .unwrap();

    let schema = SchemaLoader::new().load_schema(&path).unwrap();
    assert_eq!(schema.id_attribute(), "_id");
    let names: Vec<&str> = schema.attributes.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["label", "articles"]);
    assert_eq!(
        schema.attribute("articles").unwrap().target(),
        Some(("article", None))
    );
}

#[test]
fn test_parse_schema_yaml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("user.yml");
    fs::write(
        &path,
        "name: user\nplugin: users-permissions\nattributes:\n  username:\n    type: string\n  email:\n    type: email\n",
    )
    .unwrap();

    let schema = SchemaLoader::new().load_schema(&path).unwrap();
    assert_eq!(schema.plugin.as_deref(), Some("users-permissions"));
    assert_eq!(schema.attributes.len(), 2);
}

// ============================================================================
// Directory loading
// ============================================================================

#[tokio::test]
async fn test_load_dir_registers_by_name_and_plugin() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.json"), r#"{"name": "article"}"#).unwrap();
    fs::write(
        dir.path().join("b.yaml"),
        "name: user\nplugin: users-permissions\n",
    )
    .unwrap();
    fs::write(dir.path().join("notes.txt"), "not a schema").unwrap();

    let registry = SchemaLoader::new().load_dir(dir.path()).unwrap();

    assert_eq!(registry.len(), 2);
    assert!(registry.resolve("article", None).await.is_some());
    assert!(
        registry
            .resolve("user", Some("users-permissions"))
            .await
            .is_some()
    );
    assert!(registry.resolve("a", None).await.is_none());
}

#[test]
fn test_load_dir_skips_broken_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("good.json"), r#"{"name": "tag"}"#).unwrap();
    fs::write(dir.path().join("broken.json"), "{ this is not json").unwrap();

    let registry = SchemaLoader::new().load_dir(dir.path()).unwrap();

    assert_eq!(registry.len(), 1);
    assert!(registry.contains("tag", None));
}

// ============================================================================
// DocumentStore
// ============================================================================

#[test]
fn test_save_then_load_configuration() {
    let dir = TempDir::new().unwrap();
    let stored: ContentConfiguration = serde_json::from_str(
        r#"{"metadatas": {"title": {"edit": {"label": "Headline"}, "list": {"sortable": true}}}}"#,
    )
    .unwrap();

    let store = DocumentStore::new();
    for name in ["config.json", "config.toml", "config.yaml"] {
        let path = dir.path().join("nested").join(name);
        store.save(&path, &stored).unwrap();
        let loaded: ContentConfiguration = store.load(&path).unwrap();
        assert_eq!(loaded, stored, "format of {name}");
    }
}

#[test]
fn test_save_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("schema.json");

    DocumentStore::new()
        .save(&path, &Schema::new("tag"))
        .unwrap();

    let files: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .flatten()
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(files, vec!["schema.json"]);
}

#[test]
fn test_concurrent_saves_to_one_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("schema.json");
    let store = DocumentStore::new();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let path = &path;
                scope.spawn(move || store.save(path, &Schema::new(format!("tag{i}"))))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap().unwrap();
        }
    });

    let saved: Schema = store.load(&path).unwrap();
    assert!(saved.name.starts_with("tag"));

    let files: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .flatten()
        .map(|e| e.file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(files, vec!["schema.json"]);
}

#[test]
fn test_parse_error_names_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "name = [").unwrap();

    let err = DocumentStore::new().load::<Schema>(&path).unwrap_err();
    match err {
        Error::Parse { format, .. } => assert_eq!(format, "TOML"),
        other => panic!("unexpected error: {other}"),
    }
}
