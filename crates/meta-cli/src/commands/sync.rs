//! Defaults, sync, and check command implementations
//!
//! Every command loads the schema named by `--schema`, builds a registry from
//! `--schemas-dir` (the schema itself is always resolvable, so
//! self-relations work without a directory), and runs the synchronizer with
//! the type-driven classifier.

use std::path::Path;
use std::sync::Arc;

use colored::Colorize;

use meta_schema::{
    ContentConfiguration, DocumentStore, InMemorySchemaRegistry, Schema, SchemaLoader,
    TypeClassifier,
};
use meta_sync::{MetadataSynchronizer, SyncReport};

use crate::cli::SchemaArgs;
use crate::error::{CliError, Result};

/// Load the schema and build a synchronizer around its registry.
fn open(args: &SchemaArgs) -> Result<(Schema, MetadataSynchronizer)> {
    let loader = SchemaLoader::new();
    let schema = loader.load_schema(&args.schema)?;

    let mut registry = match &args.schemas_dir {
        Some(dir) if !dir.is_dir() => {
            return Err(CliError::user(format!(
                "Schemas directory not found: {}",
                dir.display()
            )));
        }
        Some(dir) => loader.load_dir(dir)?,
        None => InMemorySchemaRegistry::new(),
    };
    if !registry.contains(&schema.name, schema.plugin.as_deref()) {
        registry.register(schema.clone());
    }
    tracing::debug!(models = registry.len(), "Schema registry ready");

    let synchronizer =
        MetadataSynchronizer::new(Arc::new(TypeClassifier::default()), Arc::new(registry));
    Ok((schema, synchronizer))
}

fn load_stored(path: &Path) -> Result<ContentConfiguration> {
    Ok(DocumentStore::new().load(path)?)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Run the defaults command
///
/// Prints the metadata of a schema with nothing stored. Stale overrides in
/// the schema's own `config` are repaired, so `check` accepts the output.
pub async fn run_defaults(args: &SchemaArgs) -> Result<()> {
    let (schema, synchronizer) = open(args)?;
    let metadatas = synchronizer
        .sync(&ContentConfiguration::default(), &schema)
        .await;
    print_json(&ContentConfiguration::new(metadatas))
}

/// Run the sync command
///
/// Reconciles `stored` (or the schema's own config) and prints or writes
/// the result.
pub async fn run_sync(args: &SchemaArgs, stored: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let (schema, synchronizer) = open(args)?;
    let stored = match stored {
        Some(path) => load_stored(path)?,
        None => schema.config.clone(),
    };

    let reconciled = ContentConfiguration::new(synchronizer.sync(&stored, &schema).await);

    match output {
        Some(path) => {
            DocumentStore::new().save(path, &reconciled)?;
            println!(
                "{} Wrote {} attribute(s) to {}",
                "OK".green().bold(),
                reconciled.metadatas.len(),
                path.display().to_string().cyan()
            );
            Ok(())
        }
        None => print_json(&reconciled),
    }
}

/// Run the check command
///
/// Fails when the stored configuration would be changed by a sync.
pub async fn run_check(args: &SchemaArgs, stored: &Path, json: bool) -> Result<()> {
    let (schema, synchronizer) = open(args)?;
    let stored = load_stored(stored)?;

    let report = synchronizer.check(&stored, &schema).await;

    if json {
        print_json(&report)?;
    } else {
        print_report(&schema, &report);
    }

    if report.is_clean() {
        Ok(())
    } else {
        Err(CliError::user(format!(
            "Metadata of '{}' is out of date. Run `content-meta sync` to repair.",
            schema.name
        )))
    }
}

fn print_report(schema: &Schema, report: &SyncReport) {
    if report.is_clean() {
        println!(
            "{} Metadata of '{}' is up to date.",
            "OK".green().bold(),
            schema.name
        );
        return;
    }

    println!("{} Metadata of '{}' has drifted:", "DRIFTED".red().bold(), schema.name);
    for name in &report.added {
        println!("   {} {} (no stored metadata)", "+".green(), name.cyan());
    }
    for name in &report.removed {
        println!("   {} {} (attribute removed)", "-".red(), name.cyan());
    }
    for name in &report.changed {
        println!("   {} {} (needs repair)", "!".yellow(), name.cyan());
    }
}
