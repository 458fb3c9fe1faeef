//! Merge strategies over statement sets.

use crate::errors::{Result, VcError};
use crate::model::{Statement, StatementSet};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How two statement sets are combined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "strategy")]
pub enum MergeStrategy {
    /// Every statement from either side
    #[default]
    Union,
    /// Only statements present verbatim on both sides
    Intersection,
    /// Exactly the caller's selections, each validated against its source
    Manual {
        from_a: StatementSet,
        from_b: StatementSet,
    },
}

impl MergeStrategy {
    /// Manual strategy with explicit selections.
    pub fn manual(from_a: StatementSet, from_b: StatementSet) -> Self {
        MergeStrategy::Manual { from_a, from_b }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MergeStrategy::Union => "union",
            MergeStrategy::Intersection => "intersection",
            MergeStrategy::Manual { .. } => "manual",
        }
    }
}

/// Parses strategy names; `manual` starts with empty selections.
impl FromStr for MergeStrategy {
    type Err = VcError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "union" => Ok(MergeStrategy::Union),
            "intersection" => Ok(MergeStrategy::Intersection),
            "manual" => Ok(MergeStrategy::manual(StatementSet::new(), StatementSet::new())),
            _ => Err(VcError::UnknownMergeStrategy {
                name: s.to_string(),
            }),
        }
    }
}

/// Merge statement sets `a` and `b`.
///
/// ## Errors
///
/// Returns `VcError::InvalidSelection` when a manual selection names a
/// statement absent from its claimed source. No partial result is returned.
pub fn merge(a: &StatementSet, b: &StatementSet, strategy: &MergeStrategy) -> Result<StatementSet> {
    let merged = match strategy {
        MergeStrategy::Union => a.union(b),
        MergeStrategy::Intersection => a.intersection(b),
        MergeStrategy::Manual { from_a, from_b } => {
            validate_selection("A", from_a, a)?;
            validate_selection("B", from_b, b)?;
            from_a.union(from_b)
        }
    };

    tracing::debug!(
        strategy = strategy.name(),
        a = a.len(),
        b = b.len(),
        merged = merged.len(),
        "merge computed"
    );
    Ok(merged)
}

fn validate_selection(side: &str, selection: &StatementSet, source: &StatementSet) -> Result<()> {
    match selection.iter().find(|s| !source.contains(s)) {
        Some(missing) => Err(invalid_selection(side, missing)),
        None => Ok(()),
    }
}

fn invalid_selection(side: &str, statement: &Statement) -> VcError {
    VcError::InvalidSelection {
        side: side.to_string(),
        statement: statement.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[(&str, &str, &str)]) -> StatementSet {
        items
            .iter()
            .map(|(s, p, o)| Statement::new(*s, *p, *o))
            .collect()
    }

    #[test]
    fn test_parse_strategy_names() {
        assert_eq!("union".parse::<MergeStrategy>().unwrap(), MergeStrategy::Union);
        assert_eq!(
            "Intersection".parse::<MergeStrategy>().unwrap(),
            MergeStrategy::Intersection
        );
        assert!(matches!(
            "manual".parse::<MergeStrategy>().unwrap(),
            MergeStrategy::Manual { .. }
        ));
        assert!(matches!(
            "rebase".parse::<MergeStrategy>(),
            Err(VcError::UnknownMergeStrategy { .. })
        ));
    }

    #[test]
    fn test_manual_without_selection_is_empty() {
        let a = set(&[("ex:a", "ex:p", "ex:b")]);
        let strategy = MergeStrategy::manual(StatementSet::new(), StatementSet::new());
        assert!(merge(&a, &a, &strategy).unwrap().is_empty());
    }

    #[test]
    fn test_manual_selection_from_wrong_side_fails() {
        let a = set(&[("ex:a", "ex:p", "ex:b")]);
        let b = set(&[("ex:c", "ex:p", "ex:d")]);
        let strategy = MergeStrategy::manual(b.clone(), StatementSet::new());
        let err = merge(&a, &b, &strategy).unwrap_err();
        match err {
            VcError::InvalidSelection { side, statement } => {
                assert_eq!(side, "A");
                assert!(statement.contains("ex:c"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
