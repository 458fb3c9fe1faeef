//! Semantic diff output types.
//!
//! Collections use `BTreeSet`/`BTreeMap` and sorted `Vec` for deterministic
//! serialization.

use crate::model::{ProfilePair, Statement};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Structured delta between two snapshots.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SemanticDiff {
    /// Fingerprint of the base snapshot
    #[serde(default)]
    pub from: String,
    /// Fingerprint of the target snapshot
    #[serde(default)]
    pub to: String,
    /// Entities in the target but not the base
    pub entities_added: BTreeSet<String>,
    /// Entities in the base but not the target
    pub entities_removed: BTreeSet<String>,
    /// Shared entities whose profile changed
    pub properties_modified: BTreeMap<String, ProfileChange>,
    /// Domain edges in the target but not the base
    pub relationships_added: Vec<Statement>,
    /// Domain edges in the base but not the target
    pub relationships_removed: Vec<Statement>,
}

/// Profile pairs gained and lost by one entity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileChange {
    pub added: Vec<ProfilePair>,
    pub removed: Vec<ProfilePair>,
}

impl SemanticDiff {
    /// True iff all five change collections are empty.
    ///
    /// `from`/`to` are identity, not change content.
    pub fn is_empty(&self) -> bool {
        self.entities_added.is_empty()
            && self.entities_removed.is_empty()
            && self.properties_modified.is_empty()
            && self.relationships_added.is_empty()
            && self.relationships_removed.is_empty()
    }

    /// One-line summary such as `+1 entities, ~2 modified`, or `No changes`.
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();
        if !self.entities_added.is_empty() {
            parts.push(format!("+{} entities", self.entities_added.len()));
        }
        if !self.entities_removed.is_empty() {
            parts.push(format!("-{} entities", self.entities_removed.len()));
        }
        if !self.properties_modified.is_empty() {
            parts.push(format!("~{} modified", self.properties_modified.len()));
        }
        if !self.relationships_added.is_empty() {
            parts.push(format!("+{} relationships", self.relationships_added.len()));
        }
        if !self.relationships_removed.is_empty() {
            parts.push(format!(
                "-{} relationships",
                self.relationships_removed.len()
            ));
        }
        if parts.is_empty() {
            "No changes".to_string()
        } else {
            parts.join(", ")
        }
    }
}

impl std::fmt::Display for SemanticDiff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let diff = SemanticDiff::default();
        assert!(diff.is_empty());
        assert_eq!(diff.summary(), "No changes");
    }

    #[test]
    fn test_fingerprints_do_not_affect_emptiness() {
        let diff = SemanticDiff {
            from: "aaaaaaaaaaaaaaaa".into(),
            to: "bbbbbbbbbbbbbbbb".into(),
            ..Default::default()
        };
        assert!(diff.is_empty());
    }

    #[test]
    fn test_summary_lists_nonempty_parts() {
        let mut diff = SemanticDiff::default();
        diff.entities_added.insert("ex:A".into());
        diff.properties_modified
            .insert("ex:B".into(), ProfileChange::default());
        diff.properties_modified
            .insert("ex:C".into(), ProfileChange::default());
        assert_eq!(diff.summary(), "+1 entities, ~2 modified");
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(SemanticDiff::default()).unwrap();
        for key in [
            "entities_added",
            "entities_removed",
            "properties_modified",
            "relationships_added",
            "relationships_removed",
        ] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
