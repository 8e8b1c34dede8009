use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::error::{Error, Result};

/// Location every built-in route heads towards by default.
pub const DEFAULT_DESTINATION: &str = "G";

/// Weighted edge within the map graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub target: String,
    /// Travel cost in minutes.
    pub weight: u32,
}

/// A named location together with its outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub code: String,
    pub name: String,
    pub edges: Vec<Edge>,
}

/// Static weighted graph of map locations.
///
/// Neighbour order is the order edges were added in, which fixes traversal
/// order for breadth-first search.
#[derive(Debug, Clone)]
pub struct MapGraph {
    locations: Arc<Vec<Location>>,
    index: HashMap<String, usize>,
}

/// Built-in world: each location with its outgoing edges in neighbour order.
const WORLD: &[(&str, &str, &[(&str, u32)])] = &[
    ("A", "新手村", &[("B", 5), ("C", 10)]),
    ("B", "迷霧森林", &[("A", 5), ("D", 15), ("E", 20)]),
    ("C", "礦坑", &[("A", 10), ("F", 25)]),
    ("D", "古代遺跡", &[("B", 15), ("G", 30)]),
    ("E", "精靈湖", &[("B", 20), ("G", 10)]),
    ("F", "巨龍山脈", &[("C", 25), ("G", 5)]),
    ("G", "魔王城", &[]),
];

impl MapGraph {
    /// The built-in seven location world map.
    pub fn world() -> Self {
        let locations: Vec<Location> = WORLD
            .iter()
            .map(|(code, name, edges)| Location {
                code: code.to_string(),
                name: name.to_string(),
                edges: edges
                    .iter()
                    .map(|(target, weight)| Edge {
                        target: target.to_string(),
                        weight: *weight,
                    })
                    .collect(),
            })
            .collect();
        let index = locations
            .iter()
            .enumerate()
            .map(|(position, location)| (location.code.clone(), position))
            .collect();

        Self {
            locations: Arc::new(locations),
            index,
        }
    }

    pub fn builder() -> MapGraphBuilder {
        MapGraphBuilder::default()
    }

    /// Return the outgoing edges of `code`. Locations without exits yield an
    /// empty slice.
    pub fn neighbors(&self, code: &str) -> Result<&[Edge]> {
        self.location(code).map(|location| location.edges.as_slice())
    }

    pub fn display_name(&self, code: &str) -> Result<&str> {
        self.location(code).map(|location| location.name.as_str())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    /// Locations in definition order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Weight of the cheapest direct edge `from → to`, if present.
    pub fn edge_weight(&self, from: &str, to: &str) -> Result<Option<u32>> {
        Ok(self
            .neighbors(from)?
            .iter()
            .filter(|edge| edge.target == to)
            .map(|edge| edge.weight)
            .min())
    }

    pub(crate) fn position(&self, code: &str) -> Result<usize> {
        self.index
            .get(code)
            .copied()
            .ok_or_else(|| Error::UnknownLocation {
                code: code.to_string(),
            })
    }

    fn location(&self, code: &str) -> Result<&Location> {
        let position = self.position(code)?;
        Ok(&self.locations[position])
    }
}

impl Default for MapGraph {
    fn default() -> Self {
        Self::world()
    }
}

/// Incremental constructor for [`MapGraph`].
#[derive(Debug, Default, Clone)]
pub struct MapGraphBuilder {
    locations: Vec<(String, String)>,
    edges: Vec<(String, String, u32)>,
}

impl MapGraphBuilder {
    pub fn location(mut self, code: impl Into<String>, name: impl Into<String>) -> Self {
        self.locations.push((code.into(), name.into()));
        self
    }

    /// Add a directed edge. Add the reverse edge as well for two-way travel.
    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>, weight: u32) -> Self {
        self.edges.push((from.into(), to.into(), weight));
        self
    }

    pub fn build(self) -> Result<MapGraph> {
        let mut index = HashMap::with_capacity(self.locations.len());
        let mut locations = Vec::with_capacity(self.locations.len());

        for (code, name) in self.locations {
            if index.contains_key(&code) {
                return Err(Error::DuplicateLocation { code });
            }
            index.insert(code.clone(), locations.len());
            locations.push(Location {
                code,
                name,
                edges: Vec::new(),
            });
        }

        for (from, to, weight) in self.edges {
            if !index.contains_key(&to) {
                return Err(Error::UnknownLocation { code: to });
            }
            let Some(&position) = index.get(&from) else {
                return Err(Error::UnknownLocation { code: from });
            };
            locations[position].edges.push(Edge { target: to, weight });
        }

        Ok(MapGraph {
            locations: Arc::new(locations),
            index,
        })
    }
}
