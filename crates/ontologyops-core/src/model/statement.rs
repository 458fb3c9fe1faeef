//! Statements and statement sets.

use serde::{Deserialize, Serialize};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

/// A subject-predicate-object triple.
///
/// Identifiers are stored bare (`http://example.org/Customer`), blank nodes as
/// `_:label`, and literals in N-Triples lexical form including the quotes
/// (`"Customer"`, `"Kunde"@de`). Ordering is lexicographic by subject, then
/// predicate, then object.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "[String; 3]", into = "[String; 3]")]
pub struct Statement {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

impl Statement {
    /// Create a statement from three terms.
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Create a statement whose object is a plain string literal.
    pub fn literal(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        value: &str,
    ) -> Self {
        Self::new(subject, predicate, quote_literal(value))
    }

    /// Whether the object is a literal.
    pub fn has_literal_object(&self) -> bool {
        self.object.starts_with('"')
    }

    /// Unescaped lexical value of a literal object, without language tag or
    /// datatype. `None` when the object is an identifier.
    pub fn literal_value(&self) -> Option<String> {
        unquote_literal(&self.object)
    }

    /// The (predicate, object) pair of this statement.
    pub fn pair(&self) -> (String, String) {
        (self.predicate.clone(), self.object.clone())
    }
}

impl From<[String; 3]> for Statement {
    fn from([subject, predicate, object]: [String; 3]) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

impl From<Statement> for [String; 3] {
    fn from(s: Statement) -> Self {
        [s.subject, s.predicate, s.object]
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.subject, self.predicate, self.object)
    }
}

/// Quote and escape a plain literal value.
pub fn quote_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out.push('"');
    out
}

/// Extract and unescape the lexical value of a quoted literal term.
pub fn unquote_literal(term: &str) -> Option<String> {
    let rest = term.strip_prefix('"')?;
    let mut out = String::with_capacity(rest.len());
    let mut chars = rest.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' => return Some(out),
            '\\' => match chars.next()? {
                'n' => out.push('\n'),
                'r' => out.push('\r'),
                't' => out.push('\t'),
                other => out.push(other),
            },
            other => out.push(other),
        }
    }
    // Unterminated literal
    None
}

/// A deduplicated, ordered set of statements.
///
/// Duplicate triples collapse on insert; iteration is always in canonical
/// (sorted) order, independent of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatementSet {
    statements: BTreeSet<Statement>,
}

impl StatementSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a statement; returns false if it was already present.
    pub fn insert(&mut self, statement: Statement) -> bool {
        self.statements.insert(statement)
    }

    /// Remove a statement; returns false if it was not present.
    pub fn remove(&mut self, statement: &Statement) -> bool {
        self.statements.remove(statement)
    }

    pub fn contains(&self, statement: &Statement) -> bool {
        self.statements.contains(statement)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Iterate in canonical order.
    pub fn iter(&self) -> btree_set::Iter<'_, Statement> {
        self.statements.iter()
    }

    /// Statements present in either set.
    pub fn union(&self, other: &StatementSet) -> StatementSet {
        self.statements.union(&other.statements).cloned().collect()
    }

    /// Statements present in both sets.
    pub fn intersection(&self, other: &StatementSet) -> StatementSet {
        self.statements
            .intersection(&other.statements)
            .cloned()
            .collect()
    }

    /// Statements whose subject is `subject`.
    pub fn with_subject<'a>(&'a self, subject: &'a str) -> impl Iterator<Item = &'a Statement> {
        self.statements.iter().filter(move |s| s.subject == subject)
    }
}

impl FromIterator<Statement> for StatementSet {
    fn from_iter<I: IntoIterator<Item = Statement>>(iter: I) -> Self {
        Self {
            statements: iter.into_iter().collect(),
        }
    }
}

impl Extend<Statement> for StatementSet {
    fn extend<I: IntoIterator<Item = Statement>>(&mut self, iter: I) {
        self.statements.extend(iter);
    }
}

impl IntoIterator for StatementSet {
    type Item = Statement;
    type IntoIter = btree_set::IntoIter<Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.into_iter()
    }
}

impl<'a> IntoIterator for &'a StatementSet {
    type Item = &'a Statement;
    type IntoIter = btree_set::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicates_collapse() {
        let mut set = StatementSet::new();
        assert!(set.insert(Statement::new("ex:a", "ex:p", "ex:b")));
        assert!(!set.insert(Statement::new("ex:a", "ex:p", "ex:b")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_iteration_is_sorted() {
        let set: StatementSet = vec![
            Statement::new("ex:b", "ex:p", "ex:c"),
            Statement::new("ex:a", "ex:q", "ex:c"),
            Statement::new("ex:a", "ex:p", "ex:z"),
        ]
        .into_iter()
        .collect();
        let subjects: Vec<(&str, &str)> = set
            .iter()
            .map(|s| (s.subject.as_str(), s.predicate.as_str()))
            .collect();
        assert_eq!(
            subjects,
            vec![("ex:a", "ex:p"), ("ex:a", "ex:q"), ("ex:b", "ex:p")]
        );
    }

    #[test]
    fn test_literal_quoting() {
        let s = Statement::literal("ex:a", "ex:label", "say \"hi\"\n");
        assert_eq!(s.object, "\"say \\\"hi\\\"\\n\"");
        assert!(s.has_literal_object());
        assert_eq!(s.literal_value().as_deref(), Some("say \"hi\"\n"));
    }

    #[test]
    fn test_literal_value_ignores_language_tag() {
        let s = Statement::new("ex:a", "ex:label", "\"Kunde\"@de");
        assert_eq!(s.literal_value().as_deref(), Some("Kunde"));
        let iri = Statement::new("ex:a", "ex:p", "ex:b");
        assert!(iri.literal_value().is_none());
    }

    #[test]
    fn test_serializes_as_triple_array() {
        let s = Statement::new("ex:a", "ex:p", "ex:b");
        assert_eq!(
            serde_json::to_string(&s).unwrap(),
            r#"["ex:a","ex:p","ex:b"]"#
        );
    }
}
