// Content fingerprints: determinism, order independence, sensitivity

mod common;

use common::shop_v1;
use ontologyops_core::snapshot::{
    canonical_bytes, content_digest, fingerprint, fingerprint_with_length, prepare_capture,
};
use ontologyops_core::{Statement, StatementSet, VcError, Vocabulary};
use proptest::prelude::*;

#[test]
fn test_fingerprint_is_sixteen_hex_chars() {
    let fp = fingerprint(&shop_v1()).unwrap();
    assert_eq!(fp.len(), 16);
    assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_empty_graph_has_a_fingerprint() {
    let fp = fingerprint(&StatementSet::new()).unwrap();
    assert_eq!(fp.len(), 16);
}

#[test]
fn test_canonical_bytes_hash_to_content_digest() {
    let statements = shop_v1();
    let bytes = canonical_bytes(&statements).unwrap();
    let digest = content_digest(&statements).unwrap();
    assert_eq!(digest, ontologyops_core::snapshot::digest::hash_bytes(&bytes));
}

#[test]
fn test_configured_length() {
    let statements = shop_v1();
    let long = fingerprint_with_length(&statements, 32).unwrap();
    let short = fingerprint(&statements).unwrap();
    assert!(long.starts_with(&short));

    let err = fingerprint_with_length(&statements, 4).unwrap_err();
    assert_eq!(err, VcError::InvalidFingerprintLength { length: 4 });
}

#[test]
fn test_capture_record_counts() {
    let record = prepare_capture(&shop_v1(), &Vocabulary::default(), 16).unwrap();
    assert_eq!(record.statement_count, 6);
    assert_eq!(record.entity_count, 2);
    assert_eq!(record.fingerprint, fingerprint(&shop_v1()).unwrap());
}

fn arb_statement() -> impl Strategy<Value = Statement> {
    ("[a-d]", "[p-r]", "[w-z]").prop_map(|(s, p, o)| {
        Statement::new(format!("ex:{s}"), format!("ex:{p}"), format!("ex:{o}"))
    })
}

proptest! {
    #[test]
    fn prop_fingerprint_ignores_insertion_order(
        statements in prop::collection::vec(arb_statement(), 0..24)
    ) {
        let forward: StatementSet = statements.iter().cloned().collect();
        let backward: StatementSet = statements.iter().rev().cloned().collect();
        prop_assert_eq!(fingerprint(&forward).unwrap(), fingerprint(&backward).unwrap());
    }

    #[test]
    fn prop_fingerprint_ignores_duplicates(
        statements in prop::collection::vec(arb_statement(), 1..24)
    ) {
        let once: StatementSet = statements.iter().cloned().collect();
        let twice: StatementSet = statements.iter().chain(statements.iter()).cloned().collect();
        prop_assert_eq!(fingerprint(&once).unwrap(), fingerprint(&twice).unwrap());
    }

    #[test]
    fn prop_added_statement_changes_fingerprint(
        statements in prop::collection::vec(arb_statement(), 0..24),
        extra in arb_statement()
    ) {
        let base: StatementSet = statements.into_iter().collect();
        prop_assume!(!base.contains(&extra));
        let mut grown = base.clone();
        grown.insert(extra);
        prop_assert_ne!(content_digest(&base).unwrap(), content_digest(&grown).unwrap());
    }
}
