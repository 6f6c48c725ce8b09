//! Core domain types for the perk directory.
//!
//! A [`Perk`] is an offer issued by a merchant. Only `title` and `merchant`
//! drive filtering; everything else the backend sends is carried along
//! untouched in [`Perk::attributes`].

use crate::error::{LoadError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;

// =============================================================================
// Identifiers
// =============================================================================

/// Unique identifier for a perk.
///
/// Backends hand out either numeric ids or opaque strings (document ids),
/// so both are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PerkId {
    Number(u64),
    Text(String),
}

impl fmt::Display for PerkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerkId::Number(n) => write!(f, "{}", n),
            PerkId::Text(s) => f.write_str(s),
        }
    }
}

impl From<u64> for PerkId {
    fn from(value: u64) -> Self {
        PerkId::Number(value)
    }
}

impl From<&str> for PerkId {
    fn from(value: &str) -> Self {
        PerkId::Text(value.to_string())
    }
}

// =============================================================================
// Perk
// =============================================================================

/// A single perk record as loaded from the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perk {
    #[serde(alias = "_id")]
    pub id: PerkId,
    pub title: String,
    /// Issuing merchant; empty when the backend omits it
    #[serde(default)]
    pub merchant: String,
    /// Remaining fields (description, category, discount, ...)
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Perk {
    pub fn new(id: impl Into<PerkId>, title: impl Into<String>, merchant: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            merchant: merchant.into(),
            attributes: Map::new(),
        }
    }

    /// Attach an opaque attribute (builder style, mostly for fixtures).
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

// =============================================================================
// PerkCollection
// =============================================================================

/// The full set of perks loaded by one activation, in backend order.
///
/// Construction enforces that ids are unique. The collection is immutable;
/// a new load replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerkCollection {
    perks: Vec<Perk>,
}

impl PerkCollection {
    /// Build a collection, rejecting duplicate ids.
    pub fn from_perks(perks: Vec<Perk>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(perks.len());
        for perk in &perks {
            if !seen.insert(&perk.id) {
                return Err(LoadError::DuplicateId {
                    id: perk.id.to_string(),
                });
            }
        }
        Ok(Self { perks })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.perks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.perks.is_empty()
    }

    pub fn as_slice(&self) -> &[Perk] {
        &self.perks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Perk> {
        self.perks.iter()
    }

    /// Look up a perk by id. Linear scan; collections are page-sized.
    pub fn get(&self, id: &PerkId) -> Option<&Perk> {
        self.perks.iter().find(|perk| &perk.id == id)
    }
}

impl<'a> IntoIterator for &'a PerkCollection {
    type Item = &'a Perk;
    type IntoIter = std::slice::Iter<'a, Perk>;

    fn into_iter(self) -> Self::IntoIter {
        self.perks.iter()
    }
}
