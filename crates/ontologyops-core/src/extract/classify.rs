//! Entity classification.
//!
//! Rules are applied in priority order and the first rule that classifies an
//! identifier wins:
//!
//! 1. Subject of a type statement declaring a class → `class`
//! 2. Subject of a type statement declaring an object/data property → `property`
//! 3. Subject of a subclass relation → `class`
//! 4. Subject of any other type statement with an identifier object that is
//!    not a schema declaration, when the subject is not reserved → `individual`
//!
//! A punned identifier (rules 1 and 2 both apply) ends up as a class. Blank
//! nodes are never classified.

use crate::model::{EntityIndex, EntityKind, Statement, StatementSet};
use crate::vocabulary::Vocabulary;

/// Classify every identifiable subject of `statements`.
pub fn extract(statements: &StatementSet, vocab: &Vocabulary) -> EntityIndex {
    let mut index = EntityIndex::new();

    let typed: Vec<&Statement> = statements
        .iter()
        .filter(|s| s.predicate == vocab.type_predicate())
        .filter(|s| vocab.is_identifier(&s.object) && !vocab.is_blank(&s.subject))
        .collect();

    // Rule 1
    for s in typed.iter().filter(|s| vocab.is_class_declaration(&s.object)) {
        index.insert(EntityKind::Class, s.subject.as_str());
    }

    // Rule 2
    for s in typed
        .iter()
        .filter(|s| vocab.is_property_declaration(&s.object))
    {
        index.insert(EntityKind::Property, s.subject.as_str());
    }

    // Rule 3
    for s in statements
        .iter()
        .filter(|s| s.predicate == vocab.subclass_predicate())
        .filter(|s| !vocab.is_blank(&s.subject))
    {
        index.insert(EntityKind::Class, s.subject.as_str());
    }

    // Rule 4
    for s in typed
        .iter()
        .filter(|s| !vocab.is_schema_declaration(&s.object))
        .filter(|s| !vocab.is_reserved(&s.subject))
    {
        index.insert(EntityKind::Individual, s.subject.as_str());
    }

    tracing::debug!(
        classes = index.classes.len(),
        properties = index.properties.len(),
        individuals = index.individuals.len(),
        "Extracted entities"
    );

    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::{owl, rdf, rdfs};

    fn set(statements: Vec<Statement>) -> StatementSet {
        statements.into_iter().collect()
    }

    #[test]
    fn test_punned_identifier_is_a_class() {
        let statements = set(vec![
            Statement::new("ex:Both", rdf::TYPE, owl::CLASS),
            Statement::new("ex:Both", rdf::TYPE, owl::OBJECT_PROPERTY),
        ]);
        let index = extract(&statements, &Vocabulary::default());
        assert_eq!(index.kind_of("ex:Both"), Some(EntityKind::Class));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_declared_property_keeps_kind_when_subclassed() {
        let statements = set(vec![
            Statement::new("ex:p", rdf::TYPE, owl::DATATYPE_PROPERTY),
            Statement::new("ex:p", rdfs::SUB_CLASS_OF, "ex:Other"),
        ]);
        let index = extract(&statements, &Vocabulary::default());
        assert_eq!(index.kind_of("ex:p"), Some(EntityKind::Property));
    }

    #[test]
    fn test_blank_nodes_are_ignored() {
        let statements = set(vec![
            Statement::new("_:r1", rdf::TYPE, "http://www.w3.org/2002/07/owl#Restriction"),
            Statement::new("_:r2", rdfs::SUB_CLASS_OF, "ex:A"),
        ]);
        let index = extract(&statements, &Vocabulary::default());
        assert!(index.is_empty());
    }

    #[test]
    fn test_literal_type_object_is_ignored() {
        let statements = set(vec![Statement::new("ex:x", rdf::TYPE, "\"Class\"")]);
        let index = extract(&statements, &Vocabulary::default());
        assert!(index.is_empty());
    }
}
