//! Extracted entities and the ordered list that carries them between
//! stripping and restoration.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An entity value lifted out of an annotated line.
///
/// `position` is the zero-based word index in the clean line where the
/// entity tag opened. Restoration does not consult it; values are consumed
/// strictly in list order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ExtractedEntity {
    /// Word index in the clean line.
    pub position: usize,
    /// Opaque attribute value.
    pub value: String,
}

impl ExtractedEntity {
    /// Creates a new entity.
    #[must_use]
    pub fn new(position: usize, value: impl Into<String>) -> Self {
        Self {
            position,
            value: value.into(),
        }
    }
}

impl fmt::Display for ExtractedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.position, self.value)
    }
}

/// Entities of one line, in the order their opening tags appeared.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityList {
    entities: Vec<ExtractedEntity>,
}

impl EntityList {
    /// Creates an empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    /// Appends an entity, preserving append order.
    pub fn push(&mut self, entity: ExtractedEntity) {
        self.entities.push(entity);
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if no entities were extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterates over the entities in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ExtractedEntity> {
        self.entities.iter()
    }

    /// Iterates over the entity values in order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entities.iter().map(|e| e.value.as_str())
    }

    /// Returns the entities as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ExtractedEntity] {
        &self.entities
    }
}

impl fmt::Display for EntityList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, entity) in self.entities.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{entity}")?;
        }
        write!(f, "]")
    }
}

impl FromIterator<ExtractedEntity> for EntityList {
    fn from_iter<I: IntoIterator<Item = ExtractedEntity>>(iter: I) -> Self {
        Self {
            entities: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for EntityList {
    type Item = ExtractedEntity;
    type IntoIter = std::vec::IntoIter<ExtractedEntity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.into_iter()
    }
}

impl<'a> IntoIterator for &'a EntityList {
    type Item = &'a ExtractedEntity;
    type IntoIter = std::slice::Iter<'a, ExtractedEntity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
