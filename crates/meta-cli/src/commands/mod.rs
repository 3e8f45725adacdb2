//! Command implementations for meta-cli

pub mod sync;

pub use sync::{run_check, run_defaults, run_sync};
