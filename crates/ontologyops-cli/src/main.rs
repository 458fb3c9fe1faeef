//! OntologyOps CLI
//!
//! Command-line interface for ontology snapshot version control

use clap::{Parser, Subcommand};
use ontologyops_core::logging_facility::{self, Profile};

mod commands;

use commands::GlobalArgs;

#[derive(Debug, Parser)]
#[command(name = "ontologyops")]
#[command(about = "OntologyOps - Semantic version control for ontologies", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Capture the ontology as a new snapshot
    Snapshot(commands::snapshot::SnapshotArgs),
    /// Show the version log, newest first
    Log(commands::log::LogArgs),
    /// Semantic diff between two snapshots
    Diff(commands::diff::DiffArgs),
    /// Merge two snapshots
    Merge(commands::merge::MergeArgs),
    /// Write a snapshot's statements back out
    Restore(commands::restore::RestoreArgs),
    /// Show one entity in a snapshot
    Show(commands::show::ShowArgs),
    /// Export the full history as JSON
    History(commands::history::HistoryArgs),
}

fn main() {
    let cli = Cli::parse();
    logging_facility::init(Profile::from_json_flag(cli.global.log_json));

    let global = cli.global;
    let result = match cli.command {
        Commands::Snapshot(args) => commands::snapshot::execute(args, &global),
        Commands::Log(args) => commands::log::execute(args, &global),
        Commands::Diff(args) => commands::diff::execute(args, &global),
        Commands::Merge(args) => commands::merge::execute(args, &global),
        Commands::Restore(args) => commands::restore::execute(args, &global),
        Commands::Show(args) => commands::show::execute(args, &global),
        Commands::History(args) => commands::history::execute(args, &global),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
