//! Entity index and profile models.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A (predicate, object) pair from an entity's profile.
pub type ProfilePair = (String, String);

/// The three entity kinds an identifier can be classified under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Class,
    Property,
    Individual,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Class => "class",
            EntityKind::Property => "property",
            EntityKind::Individual => "individual",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entities grouped by kind.
///
/// An identifier appears under at most one kind: [`EntityIndex::insert`]
/// refuses to reclassify an identifier that is already indexed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityIndex {
    pub classes: BTreeSet<String>,
    pub properties: BTreeSet<String>,
    pub individuals: BTreeSet<String>,
}

impl EntityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify `id` under `kind` unless it is already classified.
    ///
    /// Returns true if the identifier was newly indexed.
    pub fn insert(&mut self, kind: EntityKind, id: impl Into<String>) -> bool {
        let id = id.into();
        if self.contains(&id) {
            return false;
        }
        self.of_kind_mut(kind).insert(id)
    }

    /// Identifiers of one kind.
    pub fn of_kind(&self, kind: EntityKind) -> &BTreeSet<String> {
        match kind {
            EntityKind::Class => &self.classes,
            EntityKind::Property => &self.properties,
            EntityKind::Individual => &self.individuals,
        }
    }

    fn of_kind_mut(&mut self, kind: EntityKind) -> &mut BTreeSet<String> {
        match kind {
            EntityKind::Class => &mut self.classes,
            EntityKind::Property => &mut self.properties,
            EntityKind::Individual => &mut self.individuals,
        }
    }

    /// The kind `id` is classified under, if any.
    pub fn kind_of(&self, id: &str) -> Option<EntityKind> {
        [EntityKind::Class, EntityKind::Property, EntityKind::Individual]
            .into_iter()
            .find(|kind| self.of_kind(*kind).contains(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.kind_of(id).is_some()
    }

    /// Union of all identifiers across the three kinds.
    pub fn all(&self) -> BTreeSet<&str> {
        self.classes
            .iter()
            .chain(self.properties.iter())
            .chain(self.individuals.iter())
            .map(String::as_str)
            .collect()
    }

    /// Total number of entities.
    pub fn len(&self) -> usize {
        self.classes.len() + self.properties.len() + self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-subject profiles: the ordered (predicate, object) pairs for which the
/// subject is the subject of a statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileIndex {
    profiles: BTreeMap<String, Vec<ProfilePair>>,
}

impl ProfileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair to `subject`'s profile.
    pub fn push(&mut self, subject: impl Into<String>, pair: ProfilePair) {
        self.profiles.entry(subject.into()).or_default().push(pair);
    }

    /// Profile of `subject`; empty when the subject has no statements.
    pub fn get(&self, subject: &str) -> &[ProfilePair] {
        self.profiles.get(subject).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Profile of `subject` as a set, for order-insensitive comparison.
    pub fn pair_set(&self, subject: &str) -> BTreeSet<&ProfilePair> {
        self.get(subject).iter().collect()
    }

    /// All subjects with a profile, in order.
    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

/// The derived index persisted with every snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotIndex {
    pub entities: EntityIndex,
    pub profiles: ProfileIndex,
}

/// One entity as seen in a particular snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: String,
    pub kind: EntityKind,
    pub profile: Vec<ProfilePair>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_classification_wins() {
        let mut index = EntityIndex::new();
        assert!(index.insert(EntityKind::Class, "ex:Punned"));
        assert!(!index.insert(EntityKind::Property, "ex:Punned"));
        assert_eq!(index.kind_of("ex:Punned"), Some(EntityKind::Class));
        assert!(index.properties.is_empty());
    }

    #[test]
    fn test_all_is_union_of_kinds() {
        let mut index = EntityIndex::new();
        index.insert(EntityKind::Class, "ex:A");
        index.insert(EntityKind::Property, "ex:p");
        index.insert(EntityKind::Individual, "ex:i");
        let all = index.all();
        assert_eq!(all.len(), 3);
        assert_eq!(index.len(), 3);
        assert!(all.contains("ex:p"));
    }

    #[test]
    fn test_profile_missing_subject_is_empty() {
        let profiles = ProfileIndex::new();
        assert!(profiles.get("ex:nobody").is_empty());
    }

    #[test]
    fn test_entity_index_serialized_field_names() {
        let mut index = EntityIndex::new();
        index.insert(EntityKind::Class, "ex:A");
        let json = serde_json::to_value(&index).unwrap();
        assert_eq!(json["classes"][0], "ex:A");
        assert!(json["properties"].as_array().unwrap().is_empty());
        assert!(json["individuals"].as_array().unwrap().is_empty());
    }
}
