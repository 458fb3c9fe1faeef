//! Show one entity

use super::{CliResult, GlobalArgs};
use clap::Args;
use ontologyops_engine::commands::{apply_engine_query, EngineQuery, EngineQueryResult};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub ontology: PathBuf,

    pub fingerprint: String,

    /// Full entity IRI
    pub entity: String,

    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ShowArgs, global: &GlobalArgs) -> CliResult {
    let graph = global.open_graph(&args.ontology)?;
    let query = EngineQuery::Entity {
        fingerprint: args.fingerprint,
        entity_id: args.entity,
    };
    let EngineQueryResult::Entity(view) = apply_engine_query(query, &graph)? else {
        return Err("unexpected result for entity query".into());
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }
    println!("{} ({})", view.id, view.kind);
    for (predicate, object) in &view.profile {
        println!("  {} {}", predicate, object);
    }
    Ok(())
}
