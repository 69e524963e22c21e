//! The city record — one named node and its adjacency list.

use serde::{Deserialize, Serialize};

use super::{MapError, MapResult, MAX_LINKS_PER_CITY, MAX_NAME_LEN};

/// One named location and the cities directly linked to it.
///
/// Neighbors are stored by name, in the order the links were added.
/// A link exists iff both endpoints list each other; `RouteMap` keeps
/// the relation symmetric through every mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Unique name (case-sensitive).
    pub name: String,
    /// Names of directly linked cities, in insertion order.
    #[serde(default)]
    pub neighbors: Vec<String>,
}

impl City {
    /// Create a city with no links.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            neighbors: Vec::new(),
        }
    }

    /// Number of links on this city.
    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether `name` is a direct neighbor.
    pub fn has_neighbor(&self, name: &str) -> bool {
        self.neighbors.iter().any(|n| n == name)
    }

    /// Validate this record against the format limits.
    pub fn validate(&self) -> MapResult<()> {
        if self.name.len() > MAX_NAME_LEN {
            return Err(MapError::NameTooLong {
                len: self.name.len(),
                max: MAX_NAME_LEN,
            });
        }
        if self.neighbors.len() > MAX_LINKS_PER_CITY as usize {
            return Err(MapError::TooManyLinks(MAX_LINKS_PER_CITY));
        }
        Ok(())
    }
}
