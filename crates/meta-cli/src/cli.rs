//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Content Meta - Reconcile per-attribute display metadata with a schema
#[derive(Parser, Debug)]
#[command(name = "content-meta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Schema inputs shared by every command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct SchemaArgs {
    /// Schema document to reconcile (JSON, TOML or YAML)
    #[arg(short, long)]
    pub schema: PathBuf,

    /// Directory holding the schemas relations point to
    #[arg(long, env = "CONTENT_META_SCHEMAS_DIR")]
    pub schemas_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print the default metadata of a schema
    ///
    /// Overrides kept in the schema's `config` section are applied and
    /// repaired the same way `sync` repairs stored metadata.
    Defaults {
        #[command(flatten)]
        schema: SchemaArgs,
    },

    /// Reconcile stored metadata with a schema
    ///
    /// Without --stored, the metadata kept in the schema's own `config`
    /// section is reconciled.
    ///
    /// Examples:
    ///   content-meta sync -s article.json --schemas-dir schemas/
    ///   content-meta sync -s article.json --stored metadata.json -o metadata.json
    Sync {
        #[command(flatten)]
        schema: SchemaArgs,

        /// Stored configuration document
        #[arg(long)]
        stored: Option<PathBuf>,

        /// Write the reconciled configuration here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check whether stored metadata is up to date with a schema
    Check {
        #[command(flatten)]
        schema: SchemaArgs,

        /// Stored configuration document
        #[arg(long)]
        stored: PathBuf,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
