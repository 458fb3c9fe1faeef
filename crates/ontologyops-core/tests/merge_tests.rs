// Merge strategies and conflict detection

mod common;

use common::{ex, shop_relabeled, shop_v1, shop_with_subscription};
use ontologyops_core::vocabulary::rdfs;
use ontologyops_core::{
    build_index, detect_conflicts, merge, ExError, ExErrorKind, MergeStrategy, Statement,
    StatementSet, VcError, Vocabulary,
};
use proptest::prelude::*;

#[test]
fn test_union_keeps_both_labels() {
    let merged = merge(&shop_v1(), &shop_relabeled(), &MergeStrategy::Union).unwrap();
    assert!(merged.contains(&Statement::literal(ex("Customer"), rdfs::LABEL, "Customer")));
    assert!(merged.contains(&Statement::literal(ex("Customer"), rdfs::LABEL, "Client")));
    assert_eq!(merged.len(), shop_v1().len() + 1);
}

#[test]
fn test_intersection_drops_divergent_statements() {
    let merged = merge(&shop_v1(), &shop_relabeled(), &MergeStrategy::Intersection).unwrap();
    assert!(!merged.contains(&Statement::literal(ex("Customer"), rdfs::LABEL, "Customer")));
    assert!(!merged.contains(&Statement::literal(ex("Customer"), rdfs::LABEL, "Client")));
    assert_eq!(merged.len(), shop_v1().len() - 1);
}

#[test]
fn test_manual_takes_exact_selection() {
    let pick_a: StatementSet = vec![Statement::literal(ex("Customer"), rdfs::LABEL, "Customer")]
        .into_iter()
        .collect();
    let pick_b: StatementSet = shop_with_subscription()
        .with_subject(&ex("Subscription"))
        .cloned()
        .collect();
    let strategy = MergeStrategy::manual(pick_a.clone(), pick_b.clone());
    let merged = merge(&shop_v1(), &shop_with_subscription(), &strategy).unwrap();
    assert_eq!(merged, pick_a.union(&pick_b));
}

#[test]
fn test_manual_rejects_statement_missing_from_source() {
    let bogus: StatementSet = vec![Statement::literal(ex("Customer"), rdfs::LABEL, "Client")]
        .into_iter()
        .collect();
    let strategy = MergeStrategy::manual(bogus, StatementSet::new());
    let err = merge(&shop_v1(), &shop_relabeled(), &strategy).unwrap_err();
    assert!(matches!(err, VcError::InvalidSelection { .. }));

    let ex_err: ExError = err.into();
    assert_eq!(ex_err.kind(), ExErrorKind::InvalidSelection);
    assert_eq!(ex_err.code(), "ERR_INVALID_SELECTION");
}

#[test]
fn test_conflicts_report_relabeled_entity() {
    let vocab = Vocabulary::default();
    let a = build_index(&shop_v1(), &vocab);
    let b = build_index(&shop_relabeled(), &vocab);
    let report = detect_conflicts(&a.entities, &b.entities, &a.profiles, &b.profiles);

    assert_eq!(report.len(), 1);
    assert!(report.contains(&ex("Customer")));
    assert_eq!(report.entity[0].version_a_statements, 3);
    assert_eq!(report.entity[0].version_b_statements, 3);
}

#[test]
fn test_added_entity_is_not_a_conflict() {
    let vocab = Vocabulary::default();
    let a = build_index(&shop_v1(), &vocab);
    let b = build_index(&shop_with_subscription(), &vocab);
    assert!(detect_conflicts(&a.entities, &b.entities, &a.profiles, &b.profiles).is_empty());
}

fn arb_set() -> impl Strategy<Value = StatementSet> {
    prop::collection::vec(("[a-c]", "[p-q]", "[x-z]"), 0..16).prop_map(|triples| {
        triples
            .into_iter()
            .map(|(s, p, o)| Statement::new(format!("ex:{s}"), format!("ex:{p}"), format!("ex:{o}")))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_union_is_superset(a in arb_set(), b in arb_set()) {
        let merged = merge(&a, &b, &MergeStrategy::Union).unwrap();
        prop_assert!(a.iter().all(|s| merged.contains(s)));
        prop_assert!(b.iter().all(|s| merged.contains(s)));
    }

    #[test]
    fn prop_intersection_is_subset(a in arb_set(), b in arb_set()) {
        let merged = merge(&a, &b, &MergeStrategy::Intersection).unwrap();
        prop_assert!(merged.iter().all(|s| a.contains(s) && b.contains(s)));
    }
}
