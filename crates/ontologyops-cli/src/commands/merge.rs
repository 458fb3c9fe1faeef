//! Merge command
//!
//! The merged statement set is written out (or printed as N-Triples) and
//! never captured; run `snapshot` on the result to record it. Conflicts are
//! advisory and go to stderr.

use super::{CliResult, GlobalArgs};
use clap::Args;
use ontologyops_core::graph::GraphLoader;
use ontologyops_core::merge::MergeStrategy;
use ontologyops_core::StatementSet;
use ontologyops_engine::commands::{apply_engine_query, EngineQuery, EngineQueryResult};
use ontologyops_store::NTriplesLoader;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct MergeArgs {
    pub ontology: PathBuf,

    pub a: String,

    pub b: String,

    /// union, intersection or manual
    #[arg(long, default_value = "union")]
    pub strategy: String,

    /// N-Triples file of statements taken from A (manual only)
    #[arg(long)]
    pub select_a: Option<PathBuf>,

    /// N-Triples file of statements taken from B (manual only)
    #[arg(long)]
    pub select_b: Option<PathBuf>,

    /// Write the merged graph here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
}

type BoxError = Box<dyn std::error::Error>;

fn read_selection(
    loader: &NTriplesLoader,
    path: Option<&PathBuf>,
) -> Result<StatementSet, BoxError> {
    match path {
        Some(path) => Ok(loader.load(path)?),
        None => Ok(StatementSet::new()),
    }
}

fn resolve_strategy(args: &MergeArgs, loader: &NTriplesLoader) -> Result<MergeStrategy, BoxError> {
    let strategy: MergeStrategy = args.strategy.parse()?;
    match strategy {
        MergeStrategy::Manual { .. } => Ok(MergeStrategy::manual(
            read_selection(loader, args.select_a.as_ref())?,
            read_selection(loader, args.select_b.as_ref())?,
        )),
        _ if args.select_a.is_some() || args.select_b.is_some() => {
            Err("--select-a/--select-b require --strategy manual".into())
        }
        other => Ok(other),
    }
}

pub fn execute(args: MergeArgs, global: &GlobalArgs) -> CliResult {
    let loader = NTriplesLoader::new();
    let strategy = resolve_strategy(&args, &loader)?;
    let graph = global.open_graph(&args.ontology)?;

    let query = EngineQuery::Merge {
        a: args.a,
        b: args.b,
        strategy: strategy.clone(),
    };
    let EngineQueryResult::Merge(outcome) = apply_engine_query(query, &graph)? else {
        return Err("unexpected result for merge query".into());
    };

    for conflict in &outcome.conflicts.entity {
        eprintln!(
            "Conflict: {} (A: {} statements, B: {} statements)",
            conflict.description, conflict.version_a_statements, conflict.version_b_statements
        );
    }

    match args.output {
        Some(path) => {
            loader.write(&outcome.statements, &path)?;
            println!(
                "Merged {} statements ({}) into {}",
                outcome.statements.len(),
                strategy.name(),
                path.display()
            );
        }
        None => print!("{}", loader.render(&outcome.statements)),
    }
    Ok(())
}
