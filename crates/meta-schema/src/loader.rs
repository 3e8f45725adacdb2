//! Loader for schema documents
//!
//! Fills an [`InMemorySchemaRegistry`] from a directory of schema files:
//!
//! ```text
//! schemas/
//!   article.json
//!   tag.toml
//!   user.yaml
//! ```
//!
//! Each file holds one [`Schema`]; it is registered under its `name` and
//! `plugin`, not under its file name.

use std::fs;
use std::path::Path;

use crate::registry::{InMemorySchemaRegistry, SchemaKey};
use crate::schema::Schema;
use crate::store::DocumentStore;
use crate::{Error, Result};

/// Loads schema documents from disk
#[derive(Debug, Default)]
pub struct SchemaLoader {
    store: DocumentStore,
}

impl SchemaLoader {
    pub fn new() -> Self {
        Self {
            store: DocumentStore::new(),
        }
    }

    /// Load a single schema document.
    pub fn load_schema(&self, path: &Path) -> Result<Schema> {
        self.store.load(path)
    }

    /// Load every schema document in `dir` into a registry.
    ///
    /// A missing directory yields an empty registry. Files that fail to
    /// parse are logged and skipped.
    pub fn load_dir(&self, dir: &Path) -> Result<InMemorySchemaRegistry> {
        let mut registry = InMemorySchemaRegistry::new();

        if !dir.exists() {
            return Ok(registry);
        }

        let entries = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if !path.is_file() || !DocumentStore::supports(&path) {
                continue;
            }
            match self.load_schema(&path) {
                Ok(schema) => {
                    tracing::debug!(model = %SchemaKey::of(&schema), path = ?path, "Loaded schema");
                    registry.register(schema);
                }
                Err(e) => {
                    tracing::warn!("Failed to load {:?}: {}", path, e);
                }
            }
        }

        Ok(registry)
    }
}
