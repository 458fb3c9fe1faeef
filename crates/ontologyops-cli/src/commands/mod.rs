//! Subcommand implementations.

pub mod diff;
pub mod history;
pub mod log;
pub mod merge;
pub mod restore;
pub mod show;
pub mod snapshot;

use clap::Args;
use ontologyops_engine::{EngineConfig, TrackedGraph};
use std::path::{Path, PathBuf};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Options shared by every subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Config file (otherwise discovered in the working directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Storage root, overriding the configured one
    #[arg(long, global = true)]
    pub storage: Option<PathBuf>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,
}

impl GlobalArgs {
    fn engine_config(&self) -> Result<EngineConfig, Box<dyn std::error::Error>> {
        let cwd = std::env::current_dir()?;
        let config = EngineConfig::load(self.config.as_deref(), &cwd)?;
        Ok(match &self.storage {
            Some(storage) => config.with_storage_path(storage.clone()),
            None => config,
        })
    }

    /// Open the tracked graph for an ontology file.
    pub fn open_graph(&self, ontology: &Path) -> Result<TrackedGraph, Box<dyn std::error::Error>> {
        let config = self.engine_config()?;
        Ok(TrackedGraph::for_ontology(&config, ontology)?)
    }
}
