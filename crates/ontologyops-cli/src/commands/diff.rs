//! Semantic diff command

use super::{CliResult, GlobalArgs};
use clap::Args;
use ontologyops_engine::commands::{apply_engine_query, EngineQuery, EngineQueryResult};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct DiffArgs {
    pub ontology: PathBuf,

    /// Base fingerprint
    pub from: String,

    /// Target fingerprint
    pub to: String,

    /// Print the structured diff as JSON instead of Markdown
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: DiffArgs, global: &GlobalArgs) -> CliResult {
    let graph = global.open_graph(&args.ontology)?;
    let query = EngineQuery::Diff {
        from: args.from,
        to: args.to,
    };
    let EngineQueryResult::Diff(result) = apply_engine_query(query, &graph)? else {
        return Err("unexpected result for diff query".into());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.structured_diff)?);
    } else {
        print!("{}", result.human_summary);
    }
    Ok(())
}
