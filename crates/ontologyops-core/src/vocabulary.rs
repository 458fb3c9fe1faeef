//! Vocabulary predicate separating schema machinery from domain data.
//!
//! Every component that needs to know whether an identifier belongs to a
//! well-known vocabulary (RDF, RDFS, OWL, XSD) asks a [`Vocabulary`] value
//! instead of checking string prefixes itself.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// RDF vocabulary constants
pub mod rdf {
    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:Property IRI
    pub const PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// rdfs:Class IRI
    pub const CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";

    /// rdfs:subClassOf IRI
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:comment IRI
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";

    /// rdfs:domain IRI
    pub const DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";

    /// rdfs:range IRI
    pub const RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
}

/// OWL vocabulary constants
pub mod owl {
    /// owl:Class IRI
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";

    /// owl:ObjectProperty IRI
    pub const OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";

    /// owl:DatatypeProperty IRI
    pub const DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";

    /// owl:AnnotationProperty IRI
    pub const ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";

    /// owl:Ontology IRI
    pub const ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";

    /// owl:Thing IRI
    pub const THING: &str = "http://www.w3.org/2002/07/owl#Thing";

    /// owl:NamedIndividual IRI
    pub const NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
}

/// Default reserved namespace prefix (covers RDF, RDFS, OWL and XSD).
pub const W3C_PREFIX: &str = "http://www.w3.org/";

/// Prefix marking a blank node identifier.
pub const BLANK_NODE_PREFIX: &str = "_:";

/// Configurable description of the schema vocabulary.
///
/// `reserved_prefixes` is the allow-list of namespaces treated as schema
/// machinery. The declaration sets drive entity classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    reserved_prefixes: Vec<String>,
    type_predicate: String,
    subclass_predicate: String,
    class_types: BTreeSet<String>,
    property_types: BTreeSet<String>,
    non_individual_types: BTreeSet<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            reserved_prefixes: vec![W3C_PREFIX.to_string()],
            type_predicate: rdf::TYPE.to_string(),
            subclass_predicate: rdfs::SUB_CLASS_OF.to_string(),
            class_types: [owl::CLASS, rdfs::CLASS].iter().map(|s| s.to_string()).collect(),
            property_types: [owl::OBJECT_PROPERTY, owl::DATATYPE_PROPERTY]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            non_individual_types: [owl::ONTOLOGY, owl::ANNOTATION_PROPERTY]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl Vocabulary {
    /// Default vocabulary with a replaced reserved-prefix list.
    ///
    /// An empty list reserves nothing.
    pub fn with_reserved_prefixes<I, S>(prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            reserved_prefixes: prefixes.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Reserved namespace prefixes, in configuration order.
    pub fn reserved_prefixes(&self) -> &[String] {
        &self.reserved_prefixes
    }

    /// The predicate used for type declarations (`rdf:type`).
    pub fn type_predicate(&self) -> &str {
        &self.type_predicate
    }

    /// The predicate used for subclass relations (`rdfs:subClassOf`).
    pub fn subclass_predicate(&self) -> &str {
        &self.subclass_predicate
    }

    /// Whether `id` lives in a reserved (schema) namespace.
    pub fn is_reserved(&self, id: &str) -> bool {
        self.reserved_prefixes
            .iter()
            .any(|prefix| id.starts_with(prefix.as_str()))
    }

    /// Whether `term` is an identifier rather than a literal.
    pub fn is_identifier(&self, term: &str) -> bool {
        !term.starts_with('"')
    }

    /// Whether `term` is a blank node.
    pub fn is_blank(&self, term: &str) -> bool {
        term.starts_with(BLANK_NODE_PREFIX)
    }

    /// Whether `term` identifies something in the domain: an identifier
    /// outside every reserved namespace.
    pub fn is_domain_identifier(&self, term: &str) -> bool {
        self.is_identifier(term) && !self.is_reserved(term)
    }

    /// `object` of a type statement declares a class.
    pub fn is_class_declaration(&self, object: &str) -> bool {
        self.class_types.contains(object)
    }

    /// `object` of a type statement declares an object or data property.
    pub fn is_property_declaration(&self, object: &str) -> bool {
        self.property_types.contains(object)
    }

    /// `object` of a type statement is a schema declaration that never makes
    /// its subject an individual.
    pub fn is_schema_declaration(&self, object: &str) -> bool {
        self.is_class_declaration(object)
            || self.is_property_declaration(object)
            || self.non_individual_types.contains(object)
    }
}
