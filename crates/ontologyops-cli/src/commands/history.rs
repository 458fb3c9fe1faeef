//! History export

use super::{CliResult, GlobalArgs};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    pub ontology: PathBuf,
}

pub fn execute(args: HistoryArgs, global: &GlobalArgs) -> CliResult {
    let graph = global.open_graph(&args.ontology)?;
    let export = graph.export_history()?;
    tracing::debug!(versions = export.versions.len(), "Exported history");
    println!("{}", serde_json::to_string_pretty(&export)?);
    Ok(())
}
