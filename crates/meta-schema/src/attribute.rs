//! Attribute definitions
//!
//! An attribute is either a plain typed value or a relation to another
//! schema. The serialized form is the loose object shape found in schema
//! documents: anything carrying `targetModel` is a relation, anything
//! carrying `type` is a scalar.
//!
//! ```json
//! { "title":  { "type": "string" },
//!   "author": { "targetModel": "user", "plugin": "users-permissions" } }
//! ```

use serde::{Deserialize, Serialize};

/// Type name of the generic text attribute.
pub const STRING_TYPE: &str = "string";

/// Definition of a single schema attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeDefinition {
    /// Reference to another schema, optionally namespaced by a plugin.
    Relation {
        #[serde(rename = "targetModel")]
        target_model: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        plugin: Option<String>,
        /// Cardinality label (e.g. `oneToMany`), carried through as-is.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        relation: Option<String>,
    },
    /// Plain value attribute.
    Scalar {
        #[serde(rename = "type")]
        attr_type: String,
    },
}

impl AttributeDefinition {
    /// Shorthand for a scalar attribute of the given type.
    pub fn scalar(attr_type: impl Into<String>) -> Self {
        Self::Scalar {
            attr_type: attr_type.into(),
        }
    }

    /// Shorthand for a `string` scalar.
    pub fn string() -> Self {
        Self::scalar(STRING_TYPE)
    }

    /// Shorthand for a relation without namespace.
    pub fn relation(target_model: impl Into<String>) -> Self {
        Self::Relation {
            target_model: target_model.into(),
            plugin: None,
            relation: None,
        }
    }

    /// Shorthand for a relation to a plugin-provided model.
    pub fn plugin_relation(target_model: impl Into<String>, plugin: impl Into<String>) -> Self {
        Self::Relation {
            target_model: target_model.into(),
            plugin: Some(plugin.into()),
            relation: None,
        }
    }

    pub fn is_relation(&self) -> bool {
        matches!(self, Self::Relation { .. })
    }

    /// Scalar type name, `None` for relations.
    pub fn attr_type(&self) -> Option<&str> {
        match self {
            Self::Scalar { attr_type } => Some(attr_type),
            Self::Relation { .. } => None,
        }
    }

    /// True for `string` scalars.
    pub fn is_string(&self) -> bool {
        self.attr_type() == Some(STRING_TYPE)
    }

    /// Target model and namespace, `None` for scalars.
    pub fn target(&self) -> Option<(&str, Option<&str>)> {
        match self {
            Self::Relation {
                target_model,
                plugin,
                ..
            } => Some((target_model, plugin.as_deref())),
            Self::Scalar { .. } => None,
        }
    }
}
