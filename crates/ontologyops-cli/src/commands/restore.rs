//! Restore a snapshot's statements to a file

use super::{CliResult, GlobalArgs};
use clap::Args;
use ontologyops_core::graph::GraphLoader;
use ontologyops_engine::commands::{apply_engine_query, EngineQuery, EngineQueryResult};
use ontologyops_store::NTriplesLoader;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct RestoreArgs {
    pub ontology: PathBuf,

    pub fingerprint: String,

    /// Destination file; defaults to overwriting the ontology itself
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: RestoreArgs, global: &GlobalArgs) -> CliResult {
    let graph = global.open_graph(&args.ontology)?;
    let query = EngineQuery::Restore {
        fingerprint: args.fingerprint.clone(),
    };
    let EngineQueryResult::Statements(statements) = apply_engine_query(query, &graph)? else {
        return Err("unexpected result for restore query".into());
    };

    let target = args.output.unwrap_or(args.ontology);
    NTriplesLoader::new().write(&statements, &target)?;
    println!(
        "Restored {} ({} statements) to {}",
        args.fingerprint,
        statements.len(),
        target.display()
    );
    Ok(())
}
