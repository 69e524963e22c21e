//! Fluent API for building RouteMap instances.

use crate::types::{City, MapResult};

use super::RouteMap;

/// Fluent builder for constructing a RouteMap.
///
/// Cities and links accumulate in call order; duplicates collapse.
/// `build` validates the accumulated map the same way the file reader
/// does.
pub struct RouteMapBuilder {
    cities: Vec<City>,
}

impl RouteMapBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self { cities: Vec::new() }
    }

    /// Add a city if it is not already present.
    pub fn city(mut self, name: &str) -> Self {
        self.entry(name);
        self
    }

    /// Link two cities, adding either endpoint that is missing.
    ///
    /// Self-links and repeated links are ignored.
    pub fn link(mut self, a: &str, b: &str) -> Self {
        if a == b {
            return self;
        }
        let pa = self.entry(a);
        let pb = self.entry(b);
        if !self.cities[pa].has_neighbor(b) {
            self.cities[pa].neighbors.push(b.to_string());
            self.cities[pb].neighbors.push(a.to_string());
        }
        self
    }

    /// Build the final RouteMap.
    pub fn build(self) -> MapResult<RouteMap> {
        RouteMap::from_parts(self.cities)
    }

    fn entry(&mut self, name: &str) -> usize {
        match self.cities.iter().position(|c| c.name == name) {
            Some(pos) => pos,
            None => {
                self.cities.push(City::new(name));
                self.cities.len() - 1
            }
        }
    }
}

impl Default for RouteMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
