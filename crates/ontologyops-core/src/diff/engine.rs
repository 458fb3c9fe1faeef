//! Semantic diff computation.
//!
//! The entry point is [`compute_diff`], which compares two loaded snapshots.
//! [`compute_index_diff`] works on bare indices for callers that have no
//! full snapshot at hand.

use crate::diff::model::{ProfileChange, SemanticDiff};
use crate::model::{ProfileIndex, Snapshot, SnapshotIndex, Statement};
use crate::vocabulary::Vocabulary;
use std::collections::{BTreeMap, BTreeSet};

/// Compute the semantic diff from snapshot `a` to snapshot `b`.
pub fn compute_diff(a: &Snapshot, b: &Snapshot, vocab: &Vocabulary) -> SemanticDiff {
    let mut diff = compute_index_diff(&a.index, &b.index, vocab);
    diff.from = a.fingerprint().to_string();
    diff.to = b.fingerprint().to_string();
    tracing::debug!(
        from = %diff.from,
        to = %diff.to,
        summary = %diff.summary(),
        "diff computed"
    );
    diff
}

/// Compute the semantic diff between two snapshot indices.
///
/// The returned diff has empty `from`/`to` fields.
pub fn compute_index_diff(
    a: &SnapshotIndex,
    b: &SnapshotIndex,
    vocab: &Vocabulary,
) -> SemanticDiff {
    let entities_a = a.entities.all();
    let entities_b = b.entities.all();

    let entities_added = entities_b
        .difference(&entities_a)
        .map(|id| id.to_string())
        .collect();
    let entities_removed = entities_a
        .difference(&entities_b)
        .map(|id| id.to_string())
        .collect();

    let properties_modified = modified_profiles(
        entities_a.intersection(&entities_b).copied(),
        &a.profiles,
        &b.profiles,
    );

    let edges_a = relationship_edges(a, vocab);
    let edges_b = relationship_edges(b, vocab);

    SemanticDiff {
        from: String::new(),
        to: String::new(),
        entities_added,
        entities_removed,
        properties_modified,
        relationships_added: edges_b.difference(&edges_a).cloned().collect(),
        relationships_removed: edges_a.difference(&edges_b).cloned().collect(),
    }
}

fn modified_profiles<'a>(
    shared: impl Iterator<Item = &'a str>,
    a: &ProfileIndex,
    b: &ProfileIndex,
) -> BTreeMap<String, ProfileChange> {
    let mut modified = BTreeMap::new();
    for id in shared {
        let pairs_a = a.pair_set(id);
        let pairs_b = b.pair_set(id);
        if pairs_a == pairs_b {
            continue;
        }
        let change = ProfileChange {
            added: pairs_b.difference(&pairs_a).map(|p| (*p).clone()).collect(),
            removed: pairs_a.difference(&pairs_b).map(|p| (*p).clone()).collect(),
        };
        modified.insert(id.to_string(), change);
    }
    modified
}

/// Edges between domain entities.
///
/// An edge is `(subject, predicate, object)` where the subject is an entity,
/// the object is a domain identifier other than the subject, and the
/// predicate is not the type predicate.
pub fn relationship_edges(index: &SnapshotIndex, vocab: &Vocabulary) -> BTreeSet<Statement> {
    let mut edges = BTreeSet::new();
    for subject in index.entities.all() {
        for (predicate, object) in index.profiles.get(subject) {
            if predicate == vocab.type_predicate()
                || object == subject
                || !vocab.is_domain_identifier(object)
            {
                continue;
            }
            edges.insert(Statement::new(subject, predicate.as_str(), object.as_str()));
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::build_index;
    use crate::model::StatementSet;
    use crate::vocabulary::{owl, rdf, rdfs};

    fn index(statements: Vec<Statement>) -> SnapshotIndex {
        let set: StatementSet = statements.into_iter().collect();
        build_index(&set, &Vocabulary::default())
    }

    #[test]
    fn test_self_diff_is_empty() {
        let idx = index(vec![
            Statement::new("ex:A", rdf::TYPE, owl::CLASS),
            Statement::literal("ex:A", rdfs::LABEL, "A"),
        ]);
        assert!(compute_index_diff(&idx, &idx, &Vocabulary::default()).is_empty());
    }

    #[test]
    fn test_edges_skip_type_literal_and_reserved() {
        let idx = index(vec![
            Statement::new("ex:A", rdf::TYPE, owl::CLASS),
            Statement::new("ex:B", rdf::TYPE, owl::CLASS),
            Statement::new("ex:A", rdfs::SUB_CLASS_OF, "ex:B"),
            Statement::new("ex:A", rdfs::SUB_CLASS_OF, owl::THING),
            Statement::new("ex:A", "ex:self", "ex:A"),
            Statement::literal("ex:A", rdfs::LABEL, "A"),
        ]);
        let edges = relationship_edges(&idx, &Vocabulary::default());
        assert_eq!(edges.len(), 1);
        assert!(edges.contains(&Statement::new("ex:A", rdfs::SUB_CLASS_OF, "ex:B")));
    }

    #[test]
    fn test_reclassification_alone_is_not_modification() {
        let a = index(vec![Statement::new("ex:X", rdf::TYPE, owl::CLASS)]);
        let mut b = a.clone();
        b.entities = Default::default();
        b.entities
            .insert(crate::model::EntityKind::Property, "ex:X");
        let diff = compute_index_diff(&a, &b, &Vocabulary::default());
        assert!(diff.is_empty());
    }
}
