//! Format-agnostic loading and saving of schema and configuration documents

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, Result};

/// Document store keyed on file extension.
///
/// - `.toml` -> TOML
/// - `.json` -> JSON
/// - `.yaml`, `.yml` -> YAML
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentStore;

impl DocumentStore {
    pub fn new() -> Self {
        Self
    }

    /// True if the extension of `path` is one the store can read.
    pub fn supports(path: &Path) -> bool {
        matches!(
            extension_of(path).as_str(),
            "toml" | "json" | "yaml" | "yml"
        )
    }

    /// Load a document, detecting its format from the extension.
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let extension = extension_of(path);

        match extension.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| parse_error(path, "TOML", e)),
            "json" => serde_json::from_str(&content).map_err(|e| parse_error(path, "JSON", e)),
            "yaml" | "yml" => {
                serde_yaml::from_str(&content).map_err(|e| parse_error(path, "YAML", e))
            }
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }

    /// Save a document in the format its extension names.
    ///
    /// The content goes to a temporary sibling first and is renamed over
    /// `path`, so readers never see a half-written file.
    pub fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<()> {
        let extension = extension_of(path);

        let content = match extension.as_str() {
            "toml" => toml::to_string_pretty(value).map_err(|e| serialize_error(path, "TOML", e))?,
            "json" => {
                serde_json::to_string_pretty(value).map_err(|e| serialize_error(path, "JSON", e))?
            }
            "yaml" | "yml" => {
                serde_yaml::to_string(value).map_err(|e| serialize_error(path, "YAML", e))?
            }
            _ => return Err(Error::UnsupportedFormat { extension }),
        };

        write_atomic(path, content.as_bytes())
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn parse_error(path: &Path, format: &str, err: impl ToString) -> Error {
    Error::Parse {
        path: path.to_path_buf(),
        format: format.into(),
        message: err.to_string(),
    }
}

fn serialize_error(path: &Path, format: &str, err: impl ToString) -> Error {
    Error::Serialize {
        path: path.to_path_buf(),
        format: format.into(),
        message: err.to_string(),
    }
}

/// Replace `path` with `content` through a staged sibling file.
///
/// Every call stages under its own name, so concurrent saves of one path
/// never share a temporary file; the last rename wins.
fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let staged = staging_path(path);

    if let Err(e) = stage(&staged, content) {
        let _ = fs::remove_file(&staged);
        return Err(Error::io(&staged, e));
    }

    fs::rename(&staged, path).map_err(|e| {
        let _ = fs::remove_file(&staged);
        Error::io(path, e)
    })
}

fn stage(staged: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(staged)?;
    file.write_all(content)?;
    file.sync_all()
}

/// Hidden sibling of `path`, unique per process and per call.
fn staging_path(path: &Path) -> PathBuf {
    static SEQUENCE: AtomicU64 = AtomicU64::new(0);

    let sequence = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    path.with_file_name(format!(
        ".{}.{}-{}.tmp",
        file_name,
        std::process::id(),
        sequence
    ))
}
