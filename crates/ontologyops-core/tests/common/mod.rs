use ontologyops_core::vocabulary::{owl, rdf, rdfs};
use ontologyops_core::{Statement, StatementSet};

pub const EX: &str = "http://example.org/shop#";

/// Expand a local name in the example namespace
#[allow(dead_code)]
pub fn ex(local: &str) -> String {
    format!("{EX}{local}")
}

/// Class declaration with label and comment
#[allow(dead_code)]
pub fn class(local: &str, label: &str, comment: &str) -> Vec<Statement> {
    vec![
        Statement::new(ex(local), rdf::TYPE, owl::CLASS),
        Statement::literal(ex(local), rdfs::LABEL, label),
        Statement::literal(ex(local), rdfs::COMMENT, comment),
    ]
}

/// Customer and Product, each labeled and described
#[allow(dead_code)]
pub fn shop_v1() -> StatementSet {
    let mut statements = class("Customer", "Customer", "A person who buys");
    statements.extend(class("Product", "Product", "Something for sale"));
    statements.into_iter().collect()
}

/// `shop_v1` plus a Subscription class
#[allow(dead_code)]
pub fn shop_with_subscription() -> StatementSet {
    let mut statements = shop_v1();
    statements.extend(class("Subscription", "Subscription", "A recurring order"));
    statements
}

/// `shop_v1` with Customer relabeled to Client
#[allow(dead_code)]
pub fn shop_relabeled() -> StatementSet {
    let mut statements = shop_v1();
    statements.remove(&Statement::literal(ex("Customer"), rdfs::LABEL, "Customer"));
    statements.insert(Statement::literal(ex("Customer"), rdfs::LABEL, "Client"));
    statements
}
