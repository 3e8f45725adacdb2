//! Reconciliation of per-attribute content metadata.
//!
//! Given a [`Schema`](meta_schema::Schema) and the metadata configuration
//! stored for it, [`MetadataSynchronizer::sync`] computes the configuration
//! that matches the schema as it is now:
//!
//! - attributes without stored metadata get generated defaults
//! - stored metadata of removed attributes is dropped
//! - flags and relation display fields that the schema no longer supports
//!   are repaired
//!
//! Classification and relation-target lookup are injected through the
//! [`AttributeClassifier`](meta_schema::AttributeClassifier) and
//! [`SchemaRegistry`](meta_schema::SchemaRegistry) traits.

pub mod defaults;
pub mod logging;
pub mod main_field;
pub mod report;
pub mod synchronizer;

pub use defaults::DefaultMetadataGenerator;
pub use main_field::default_main_field;
pub use report::SyncReport;
pub use synchronizer::MetadataSynchronizer;
