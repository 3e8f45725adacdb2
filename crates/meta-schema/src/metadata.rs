//! Per-attribute display metadata
//!
//! Every field is optional at the type level: the identity attribute's edit
//! descriptor is the empty object `{}`, and stored configurations routinely
//! carry only the fields a user changed. Absent fields are omitted when
//! serialized.
//!
//! Overlays are field-by-field with a fixed allowlist: `edit` accepts
//! label / description / placeholder / visible / editable / mainField and
//! `list` accepts label / searchable / sortable. A field the overlay leaves
//! unset keeps the base value.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Metadata keyed by attribute name, in attribute order.
pub type Metadatas = IndexMap<String, Metadata>;

/// Edit-form descriptor for one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editable: Option<bool>,
    /// Attribute of the related schema used to display this relation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_field: Option<String>,
}

impl EditMetadata {
    /// True for the `{}` descriptor.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Copy over every field `other` sets.
    pub fn overlay(&mut self, other: &EditMetadata) {
        take(&mut self.label, &other.label);
        take(&mut self.description, &other.description);
        take(&mut self.placeholder, &other.placeholder);
        take(&mut self.visible, &other.visible);
        take(&mut self.editable, &other.editable);
        take(&mut self.main_field, &other.main_field);
    }
}

/// List-view descriptor for one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub searchable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sortable: Option<bool>,
}

impl ListMetadata {
    /// Copy over every field `other` sets.
    pub fn overlay(&mut self, other: &ListMetadata) {
        take(&mut self.label, &other.label);
        take(&mut self.searchable, &other.searchable);
        take(&mut self.sortable, &other.sortable);
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable.unwrap_or(false)
    }

    pub fn is_searchable(&self) -> bool {
        self.searchable.unwrap_or(false)
    }
}

/// Display metadata of one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub edit: EditMetadata,
    #[serde(default)]
    pub list: ListMetadata,
}

impl Metadata {
    pub fn overlay(&mut self, other: &Metadata) {
        self.edit.overlay(&other.edit);
        self.list.overlay(&other.list);
    }
}

/// Persisted content-manager configuration of a schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContentConfiguration {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub metadatas: Metadatas,
}

impl ContentConfiguration {
    pub fn new(metadatas: Metadatas) -> Self {
        Self { metadatas }
    }

    /// True when nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.metadatas.is_empty()
    }
}

fn take<T: Clone>(slot: &mut Option<T>, value: &Option<T>) {
    if let Some(value) = value {
        *slot = Some(value.clone());
    }
}
