//! Per-subject profile construction.

use crate::model::{ProfileIndex, StatementSet};

/// Group every statement's (predicate, object) pair under its subject.
///
/// Pairs are listed in canonical statement order, so two equal statement sets
/// always yield equal profiles.
pub fn profile(statements: &StatementSet) -> ProfileIndex {
    let mut profiles = ProfileIndex::new();
    for s in statements {
        profiles.push(s.subject.as_str(), s.pair());
    }
    profiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Statement;

    #[test]
    fn test_profile_groups_by_subject() {
        let statements: StatementSet = vec![
            Statement::new("ex:a", "ex:p", "ex:b"),
            Statement::literal("ex:a", "ex:label", "A"),
            Statement::new("ex:b", "ex:p", "ex:a"),
        ]
        .into_iter()
        .collect();
        let profiles = profile(&statements);
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles.get("ex:a").len(), 2);
        assert_eq!(
            profiles.get("ex:b"),
            &[("ex:p".to_string(), "ex:a".to_string())]
        );
    }
}
