use ontologyops_core::vocabulary::{owl, rdf, rdfs};
use ontologyops_core::{Statement, StatementSet};
use ontologyops_engine::{EngineConfig, TrackedGraph};
use tempfile::TempDir;

pub const EX: &str = "http://example.org/shop#";

#[allow(dead_code)]
pub fn ex(local: &str) -> String {
    format!("{EX}{local}")
}

#[allow(dead_code)]
pub fn class(local: &str, label: &str, comment: &str) -> Vec<Statement> {
    vec![
        Statement::new(ex(local), rdf::TYPE, owl::CLASS),
        Statement::literal(ex(local), rdfs::LABEL, label),
        Statement::literal(ex(local), rdfs::COMMENT, comment),
    ]
}

#[allow(dead_code)]
pub fn shop_v1() -> StatementSet {
    let mut statements = class("Customer", "Customer", "A person who buys");
    statements.extend(class("Product", "Product", "Something for sale"));
    statements.into_iter().collect()
}

#[allow(dead_code)]
pub fn shop_with_subscription() -> StatementSet {
    let mut statements = shop_v1();
    statements.extend(class("Subscription", "Subscription", "A recurring order"));
    statements
}

#[allow(dead_code)]
pub fn shop_relabeled() -> StatementSet {
    let mut statements = shop_v1();
    statements.remove(&Statement::literal(ex("Customer"), rdfs::LABEL, "Customer"));
    statements.insert(Statement::literal(ex("Customer"), rdfs::LABEL, "Client"));
    statements
}

/// Config rooted in a fresh temp dir
#[allow(dead_code)]
pub fn temp_config() -> (TempDir, EngineConfig) {
    let dir = TempDir::new().unwrap();
    let config = EngineConfig::default().with_storage_path(dir.path().join("versions"));
    (dir, config)
}

#[allow(dead_code)]
pub fn open_shop() -> (TempDir, EngineConfig, TrackedGraph) {
    let (dir, config) = temp_config();
    let graph = TrackedGraph::open(&config, "shop").unwrap();
    (dir, config, graph)
}
