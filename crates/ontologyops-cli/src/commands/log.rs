//! Version log listing

use super::{CliResult, GlobalArgs};
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct LogArgs {
    pub ontology: PathBuf,
}

pub fn execute(args: LogArgs, global: &GlobalArgs) -> CliResult {
    let graph = global.open_graph(&args.ontology)?;
    let entries = graph.log()?;
    if entries.is_empty() {
        println!("No snapshots recorded for {}", graph.name());
        return Ok(());
    }
    for entry in entries {
        println!(
            "{}  {}  {}  ({} entities)  {}",
            entry.fingerprint, entry.timestamp, entry.author, entry.entity_count, entry.message
        );
    }
    Ok(())
}
