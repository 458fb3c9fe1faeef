//! Snapshot capture command

use super::{CliResult, GlobalArgs};
use clap::Args;
use ontologyops_core::graph::GraphLoader;
use ontologyops_engine::commands::{apply_engine_command, EngineCommand, EngineCommandResult};
use ontologyops_store::NTriplesLoader;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SnapshotArgs {
    /// Ontology file (N-Triples)
    pub ontology: PathBuf,

    #[arg(long)]
    pub author: String,

    #[arg(long)]
    pub message: String,
}

pub fn execute(args: SnapshotArgs, global: &GlobalArgs) -> CliResult {
    let statements = NTriplesLoader::new().load(&args.ontology)?;
    let mut graph = global.open_graph(&args.ontology)?;

    let cmd = EngineCommand::Capture {
        statements,
        author: args.author,
        message: args.message,
    };
    match apply_engine_command(cmd, &mut graph)? {
        EngineCommandResult::Captured(result) => {
            println!("Created snapshot: {}", result.entry.fingerprint);
        }
    }
    Ok(())
}
