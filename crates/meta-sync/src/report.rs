//! Drift report between stored and reconciled metadata

use meta_schema::Metadatas;
use serde::{Deserialize, Serialize};

/// What reconciliation would change in a stored configuration
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SyncReport {
    /// Attributes that have no stored metadata yet
    pub added: Vec<String>,
    /// Stored attributes that are no longer part of the schema
    pub removed: Vec<String>,
    /// Stored attributes whose metadata gets repaired or completed
    pub changed: Vec<String>,
}

impl SyncReport {
    /// Compare a stored mapping against its reconciled form.
    pub fn between(stored: &Metadatas, reconciled: &Metadatas) -> Self {
        let mut report = Self::default();

        for (name, metadata) in reconciled {
            match stored.get(name) {
                None => report.added.push(name.clone()),
                Some(previous) if previous != metadata => report.changed.push(name.clone()),
                Some(_) => {}
            }
        }

        report.removed = stored
            .keys()
            .filter(|name| !reconciled.contains_key(*name))
            .cloned()
            .collect();

        report
    }

    /// True when the stored configuration is already up to date.
    pub fn is_clean(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}
