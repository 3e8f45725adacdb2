//! Schema model for content metadata reconciliation.
//!
//! This crate provides the data types the reconciliation engine works on
//! (schemas, attribute definitions, per-attribute display metadata) together
//! with the two capabilities it consumes:
//!
//! - [`AttributeClassifier`] answers sortable / searchable / visible / relation
//!   questions about an attribute.
//! - [`SchemaRegistry`] resolves a relation's target schema by model name.

pub mod attribute;
pub mod classifier;
pub mod error;
pub mod loader;
pub mod metadata;
pub mod registry;
pub mod schema;
pub mod store;

pub use attribute::AttributeDefinition;
pub use classifier::{AttributeClassifier, TypeClassifier};
pub use error::{Error, Result};
pub use loader::SchemaLoader;
pub use metadata::{ContentConfiguration, EditMetadata, ListMetadata, Metadata, Metadatas};
pub use registry::{InMemorySchemaRegistry, SchemaKey, SchemaRegistry};
pub use schema::{DEFAULT_ID_ATTRIBUTE, Schema, SchemaOptions};
pub use store::DocumentStore;
