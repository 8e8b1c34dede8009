use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::MapGraph;

/// Shortest known distance and predecessor for one location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDistance {
    pub code: String,
    /// `None` when the location cannot be reached from the start.
    pub distance: Option<u32>,
    pub predecessor: Option<String>,
}

/// Single-source shortest-path table produced by [`dijkstra`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub start: String,
    /// One entry per location, in map order.
    pub nodes: Vec<NodeDistance>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl ShortestPaths {
    fn new(start: String, nodes: Vec<NodeDistance>) -> Self {
        let index = nodes
            .iter()
            .enumerate()
            .map(|(position, node)| (node.code.clone(), position))
            .collect();
        Self {
            start,
            nodes,
            index,
        }
    }

    /// Minimal cost from the start to `code`, or `None` if unreachable.
    pub fn distance(&self, code: &str) -> Result<Option<u32>> {
        self.entry(code).map(|node| node.distance)
    }

    pub fn predecessor(&self, code: &str) -> Result<Option<&str>> {
        self.entry(code).map(|node| node.predecessor.as_deref())
    }

    pub fn is_reachable(&self, code: &str) -> Result<bool> {
        Ok(self.distance(code)?.is_some())
    }

    /// Reachable locations and their distances, in map order.
    pub fn reachable(&self) -> impl Iterator<Item = (&str, u32)> {
        self.nodes
            .iter()
            .filter_map(|node| node.distance.map(|distance| (node.code.as_str(), distance)))
    }

    /// Reconstruct the cheapest path from the start to `target` by walking
    /// predecessors backwards.
    ///
    /// The walk visits at most one entry per location; a chain that is longer
    /// than that, or that stops before reaching the start, yields
    /// [`Error::MalformedPath`].
    pub fn path_to(&self, target: &str) -> Result<Vec<String>> {
        let node = self.entry(target)?;
        if node.distance.is_none() {
            return Err(Error::Unreachable {
                start: self.start.clone(),
                target: target.to_string(),
            });
        }

        let malformed = || Error::MalformedPath {
            target: target.to_string(),
        };

        let mut path = Vec::new();
        let mut current = Some(target);
        while let Some(code) = current {
            if path.len() >= self.nodes.len() {
                return Err(malformed());
            }
            path.push(code.to_string());
            if code == self.start {
                break;
            }
            current = self.entry(code)?.predecessor.as_deref();
        }

        if path.last().map(String::as_str) != Some(self.start.as_str()) {
            return Err(malformed());
        }

        path.reverse();
        Ok(path)
    }

    fn entry(&self, code: &str) -> Result<&NodeDistance> {
        self.index
            .get(code)
            .map(|&position| &self.nodes[position])
            .ok_or_else(|| Error::UnknownLocation {
                code: code.to_string(),
            })
    }
}

/// Fewest-hop route produced by [`bfs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HopPath {
    pub start: String,
    pub goal: String,
    /// Locations from start to goal inclusive.
    pub steps: Vec<String>,
    /// Locations in the order they were dequeued.
    pub explored: Vec<String>,
}

impl HopPath {
    /// Number of edges on the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Run Dijkstra's algorithm from `start` over the whole map.
///
/// Uses a binary min-heap with lazy deletion: improved distances push a new
/// entry and stale entries are skipped when popped.
pub fn dijkstra(graph: &MapGraph, start: &str) -> Result<ShortestPaths> {
    let start_position = graph.position(start)?;
    let locations = graph.locations();

    let mut distances: Vec<Option<u32>> = vec![None; locations.len()];
    let mut parents: Vec<Option<usize>> = vec![None; locations.len()];
    let mut queue = BinaryHeap::new();

    distances[start_position] = Some(0);
    queue.push(QueueEntry::new(start_position, 0));

    while let Some(entry) = queue.pop() {
        if let Some(best) = distances[entry.node] {
            if entry.cost > best {
                continue;
            }
        }

        for edge in &locations[entry.node].edges {
            let next = graph.position(&edge.target)?;
            let next_cost = entry.cost.saturating_add(edge.weight);
            if distances[next].map_or(true, |known| next_cost < known) {
                debug!(
                    from = %locations[entry.node].code,
                    to = %edge.target,
                    cost = next_cost,
                    "relaxed edge"
                );
                distances[next] = Some(next_cost);
                parents[next] = Some(entry.node);
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    let nodes = locations
        .iter()
        .enumerate()
        .map(|(position, location)| NodeDistance {
            code: location.code.clone(),
            distance: distances[position],
            predecessor: parents[position].map(|parent| locations[parent].code.clone()),
        })
        .collect();

    Ok(ShortestPaths::new(start.to_string(), nodes))
}

/// Run breadth-first search from `start` until `goal` is dequeued.
///
/// Nodes are marked visited when enqueued, so the first path recorded for
/// any node uses the fewest edges. Ties between equally short routes follow
/// neighbour insertion order.
pub fn bfs(graph: &MapGraph, start: &str, goal: &str) -> Result<HopPath> {
    let start_position = graph.position(start)?;
    let goal_position = graph.position(goal)?;
    let locations = graph.locations();

    let mut visited = vec![false; locations.len()];
    let mut explored = Vec::new();
    let mut queue = VecDeque::new();

    visited[start_position] = true;
    queue.push_back((start_position, vec![start_position]));

    while let Some((current, trail)) = queue.pop_front() {
        explored.push(current);
        debug!(node = %locations[current].code, depth = trail.len() - 1, "bfs dequeue");

        if current == goal_position {
            let codes = |positions: &[usize]| -> Vec<String> {
                positions
                    .iter()
                    .map(|&position| locations[position].code.clone())
                    .collect()
            };
            return Ok(HopPath {
                start: start.to_string(),
                goal: goal.to_string(),
                steps: codes(&trail),
                explored: codes(&explored),
            });
        }

        for edge in &locations[current].edges {
            let next = graph.position(&edge.target)?;
            if visited[next] {
                continue;
            }
            visited[next] = true;
            let mut next_trail = trail.clone();
            next_trail.push(next);
            queue.push_back((next, next_trail));
        }
    }

    Err(Error::RouteNotFound {
        start: start.to_string(),
        goal: goal.to_string(),
    })
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: usize,
    cost: u32,
}

impl QueueEntry {
    fn new(node: usize, cost: u32) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(code: &str, distance: Option<u32>, predecessor: Option<&str>) -> NodeDistance {
        NodeDistance {
            code: code.to_string(),
            distance,
            predecessor: predecessor.map(str::to_string),
        }
    }

    #[test]
    fn queue_entry_orders_as_min_heap() {
        let mut heap = BinaryHeap::new();
        heap.push(QueueEntry::new(0, 30));
        heap.push(QueueEntry::new(1, 5));
        heap.push(QueueEntry::new(2, 5));
        heap.push(QueueEntry::new(3, 10));

        let order: Vec<(usize, u32)> = std::iter::from_fn(|| heap.pop())
            .map(|entry| (entry.node, entry.cost))
            .collect();
        assert_eq!(order, vec![(1, 5), (2, 5), (3, 10), (0, 30)]);
    }

    #[test]
    fn cyclic_predecessors_are_reported() {
        let paths = ShortestPaths::new(
            "A".to_string(),
            vec![
                node("A", Some(0), None),
                node("B", Some(1), Some("C")),
                node("C", Some(2), Some("B")),
            ],
        );
        assert_eq!(
            paths.path_to("C"),
            Err(Error::MalformedPath {
                target: "C".to_string()
            })
        );
    }

    #[test]
    fn broken_predecessor_chain_is_reported() {
        let paths = ShortestPaths::new(
            "A".to_string(),
            vec![node("A", Some(0), None), node("B", Some(4), None)],
        );
        assert!(matches!(
            paths.path_to("B"),
            Err(Error::MalformedPath { .. })
        ));
    }

    #[test]
    fn start_path_is_single_location() {
        let graph = MapGraph::world();
        let paths = dijkstra(&graph, "C").unwrap();
        assert_eq!(paths.path_to("C").unwrap(), vec!["C".to_string()]);
        assert_eq!(paths.predecessor("C").unwrap(), None);
    }
}
