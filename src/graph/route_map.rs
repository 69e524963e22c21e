//! Core graph structure — the city store and its symmetric adjacency.

use std::collections::HashMap;

use log::{debug, warn};

use crate::types::{City, MapError, MapResult, MAX_LINKS_PER_CITY};

/// The in-memory map of cities and the routes between them.
///
/// Cities are kept in insertion order, with a name index for direct
/// lookup. Adjacency is symmetric at all times visible to callers: a
/// link exists iff both endpoints list each other, and every mutation
/// inserts or removes both sides together.
#[derive(Debug)]
pub struct RouteMap {
    /// All cities, in insertion order.
    cities: Vec<City>,
    /// Name index: city name -> position in `cities`.
    index: HashMap<String, usize>,
}

impl RouteMap {
    /// Create a new empty map.
    pub fn new() -> Self {
        Self {
            cities: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create from pre-existing records (used by the reader and builder).
    ///
    /// Validates record limits, name uniqueness, neighbor resolution,
    /// self-links, repeated links, and symmetry.
    pub fn from_parts(cities: Vec<City>) -> MapResult<Self> {
        let mut index = HashMap::with_capacity(cities.len());
        for (pos, city) in cities.iter().enumerate() {
            city.validate()?;
            if index.insert(city.name.clone(), pos).is_some() {
                return Err(MapError::DuplicateCity(city.name.clone()));
            }
        }

        for city in &cities {
            for (i, neighbor) in city.neighbors.iter().enumerate() {
                if neighbor == &city.name {
                    return Err(MapError::SelfLink(city.name.clone()));
                }
                if city.neighbors[..i].contains(neighbor) {
                    return Err(MapError::DuplicateLink(
                        city.name.clone(),
                        neighbor.clone(),
                    ));
                }
                let Some(&pos) = index.get(neighbor) else {
                    return Err(MapError::InvalidNeighbor(neighbor.clone()));
                };
                if !cities[pos].has_neighbor(&city.name) {
                    return Err(MapError::AsymmetricLink(
                        city.name.clone(),
                        neighbor.clone(),
                    ));
                }
            }
        }

        Ok(Self { cities, index })
    }

    /// Number of cities.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Whether the map has no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Total number of undirected links.
    pub fn link_count(&self) -> usize {
        self.cities.iter().map(City::degree).sum::<usize>() / 2
    }

    /// Whether a city with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get a city by name.
    pub fn get(&self, name: &str) -> Option<&City> {
        self.index.get(name).map(|&pos| &self.cities[pos])
    }

    /// All cities, in insertion order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Add a city. Returns false (no mutation) if the name is taken.
    pub fn add_city(&mut self, name: &str) -> bool {
        if self.index.contains_key(name) {
            debug!("add_city: {:?} already exists", name);
            return false;
        }
        self.index.insert(name.to_string(), self.cities.len());
        self.cities.push(City::new(name));
        true
    }

    /// Remove a city and every link to it. Returns false if absent.
    ///
    /// The name is purged from every other city's neighbor list before
    /// the record itself is dropped, so no dangling reference survives.
    pub fn remove_city(&mut self, name: &str) -> bool {
        let Some(&pos) = self.index.get(name) else {
            return false;
        };
        for city in &mut self.cities {
            city.neighbors.retain(|n| n != name);
        }
        self.cities.remove(pos);
        self.rebuild_index();
        debug!("remove_city: {:?}", name);
        true
    }

    /// Link two distinct existing cities. Returns false (no mutation)
    /// on a self-link, a missing city, an already-linked pair, or a
    /// full neighbor list.
    pub fn link_cities(&mut self, a: &str, b: &str) -> bool {
        if a == b {
            return false;
        }
        let (Some(&pa), Some(&pb)) = (self.index.get(a), self.index.get(b)) else {
            return false;
        };
        if self.cities[pa].has_neighbor(b) {
            return false;
        }
        if self.cities[pa].degree() >= MAX_LINKS_PER_CITY as usize
            || self.cities[pb].degree() >= MAX_LINKS_PER_CITY as usize
        {
            warn!("link_cities: {:?} <-> {:?} rejected, neighbor list full", a, b);
            return false;
        }
        // Both directions together, so partial links cannot exist.
        self.cities[pa].neighbors.push(b.to_string());
        self.cities[pb].neighbors.push(a.to_string());
        debug!("link_cities: {:?} <-> {:?}", a, b);
        true
    }

    /// Remove the link between two cities. Returns false (no mutation)
    /// if either city is missing or the pair is not linked.
    ///
    /// Remaining neighbors keep their insertion order.
    pub fn unlink_cities(&mut self, a: &str, b: &str) -> bool {
        let (Some(&pa), Some(&pb)) = (self.index.get(a), self.index.get(b)) else {
            return false;
        };
        // Checked on `a`'s side first; symmetry covers the other.
        let Some(ia) = self.cities[pa].neighbors.iter().position(|n| n == b) else {
            return false;
        };
        let Some(ib) = self.cities[pb].neighbors.iter().position(|n| n == a) else {
            return false;
        };
        self.cities[pa].neighbors.remove(ia);
        self.cities[pb].neighbors.remove(ib);
        debug!("unlink_cities: {:?} <-> {:?}", a, b);
        true
    }

    /// Whether two cities are directly linked.
    pub fn is_linked(&self, a: &str, b: &str) -> bool {
        self.get(a).map_or(false, |city| city.has_neighbor(b))
    }

    /// Neighbor names of a city, in insertion order. None if the city
    /// does not exist.
    pub fn linked_cities(&self, name: &str) -> Option<&[String]> {
        self.get(name).map(|city| city.neighbors.as_slice())
    }

    /// Depth-first path search from `src` to `dst`; see
    /// [`traversal::dfs_path`](super::traversal::dfs_path).
    pub fn find_path(&self, src: &str, dst: &str) -> Option<Vec<String>> {
        super::traversal::dfs_path(self, src, dst)
    }

    /// Position of a city in the insertion-ordered store.
    pub(crate) fn position_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// City record at a store position.
    pub(crate) fn city_at(&self, pos: usize) -> &City {
        &self.cities[pos]
    }

    /// Rebuild the name index from the current city list.
    fn rebuild_index(&mut self) {
        self.index.clear();
        for (pos, city) in self.cities.iter().enumerate() {
            self.index.insert(city.name.clone(), pos);
        }
    }
}

impl Default for RouteMap {
    fn default() -> Self {
        Self::new()
    }
}
