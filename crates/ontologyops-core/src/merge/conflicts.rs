//! Advisory conflict detection.

use crate::model::{EntityIndex, ProfileIndex};
use serde::{Deserialize, Serialize};

/// One entity whose profile differs between the two sides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictEntry {
    pub entity: String,
    /// Distinct profile pairs of the entity in A
    pub version_a_statements: usize,
    /// Distinct profile pairs of the entity in B
    pub version_b_statements: usize,
    pub description: String,
}

/// Entity-level conflicts, sorted by entity id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictReport {
    pub entity: Vec<ConflictEntry>,
}

impl ConflictReport {
    pub fn is_empty(&self) -> bool {
        self.entity.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entity.len()
    }

    /// Whether `id` is reported as conflicting.
    pub fn contains(&self, id: &str) -> bool {
        self.entity.iter().any(|e| e.entity == id)
    }
}

/// Report every shared entity whose profile set differs between A and B.
pub fn detect_conflicts(
    entities_a: &EntityIndex,
    entities_b: &EntityIndex,
    profiles_a: &ProfileIndex,
    profiles_b: &ProfileIndex,
) -> ConflictReport {
    let all_a = entities_a.all();
    let all_b = entities_b.all();

    let entity = all_a
        .intersection(&all_b)
        .filter_map(|id| {
            let pairs_a = profiles_a.pair_set(id);
            let pairs_b = profiles_b.pair_set(id);
            (pairs_a != pairs_b).then(|| ConflictEntry {
                entity: id.to_string(),
                version_a_statements: pairs_a.len(),
                version_b_statements: pairs_b.len(),
                description: format!("Entity {id} modified in both versions"),
            })
        })
        .collect();

    ConflictReport { entity }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::build_index;
    use crate::model::{Statement, StatementSet};
    use crate::vocabulary::{owl, rdf, rdfs, Vocabulary};

    #[test]
    fn test_changed_label_conflicts() {
        let vocab = Vocabulary::default();
        let a: StatementSet = vec![
            Statement::new("ex:Customer", rdf::TYPE, owl::CLASS),
            Statement::literal("ex:Customer", rdfs::LABEL, "Customer"),
            Statement::new("ex:Product", rdf::TYPE, owl::CLASS),
        ]
        .into_iter()
        .collect();
        let b: StatementSet = vec![
            Statement::new("ex:Customer", rdf::TYPE, owl::CLASS),
            Statement::literal("ex:Customer", rdfs::LABEL, "Client"),
            Statement::literal("ex:Customer", rdfs::COMMENT, "A buyer"),
            Statement::new("ex:Product", rdf::TYPE, owl::CLASS),
        ]
        .into_iter()
        .collect();
        let ia = build_index(&a, &vocab);
        let ib = build_index(&b, &vocab);

        let report = detect_conflicts(&ia.entities, &ib.entities, &ia.profiles, &ib.profiles);
        assert_eq!(report.len(), 1);
        let entry = &report.entity[0];
        assert_eq!(entry.entity, "ex:Customer");
        assert_eq!(entry.version_a_statements, 2);
        assert_eq!(entry.version_b_statements, 3);
        assert_eq!(entry.description, "Entity ex:Customer modified in both versions");
    }
}
