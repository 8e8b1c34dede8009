use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::MapGraph;
use crate::path::{bfs, dijkstra};

/// Supported routing algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RouteAlgorithm {
    /// Dijkstra's algorithm (lowest total travel cost).
    #[default]
    Dijkstra,
    /// Breadth-first search (fewest hops, weights ignored).
    Bfs,
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::Bfs => "bfs",
        };
        f.write_str(value)
    }
}

impl FromStr for RouteAlgorithm {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(RouteAlgorithm::Dijkstra),
            "bfs" => Ok(RouteAlgorithm::Bfs),
            other => Err(format!("unsupported algorithm '{other}'")),
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    /// Convenience constructor for lowest-cost routes.
    pub fn dijkstra(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::Dijkstra,
        }
    }

    /// Convenience constructor for fewest-hop routes.
    pub fn bfs(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm: RouteAlgorithm::Bfs,
        }
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: String,
    pub goal: String,
    pub steps: Vec<String>,
    /// Summed edge weight along `steps`.
    pub cost: u32,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute a route using the requested algorithm.
///
/// Dijkstra routes that cannot reach the goal are reported as
/// [`Error::RouteNotFound`], matching the breadth-first behaviour.
pub fn plan_route(graph: &MapGraph, request: &RouteRequest) -> Result<RoutePlan> {
    if !graph.contains(&request.goal) {
        return Err(Error::UnknownLocation {
            code: request.goal.clone(),
        });
    }

    let steps = match request.algorithm {
        RouteAlgorithm::Dijkstra => {
            let paths = dijkstra(graph, &request.start)?;
            match paths.path_to(&request.goal) {
                Ok(steps) => steps,
                Err(Error::Unreachable { .. }) => {
                    return Err(Error::RouteNotFound {
                        start: request.start.clone(),
                        goal: request.goal.clone(),
                    })
                }
                Err(err) => return Err(err),
            }
        }
        RouteAlgorithm::Bfs => bfs(graph, &request.start, &request.goal)?.steps,
    };

    let cost = route_cost(graph, &steps)?;

    Ok(RoutePlan {
        algorithm: request.algorithm,
        start: request.start.clone(),
        goal: request.goal.clone(),
        steps,
        cost,
    })
}

/// Sum the direct edge weights between consecutive steps.
pub fn route_cost(graph: &MapGraph, steps: &[String]) -> Result<u32> {
    let mut total = 0u32;
    for pair in steps.windows(2) {
        let weight = graph
            .edge_weight(&pair[0], &pair[1])?
            .ok_or_else(|| Error::RouteNotFound {
                start: pair[0].clone(),
                goal: pair[1].clone(),
            })?;
        total = total.saturating_add(weight);
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_round_trips_through_strings() {
        assert_eq!("BFS".parse::<RouteAlgorithm>(), Ok(RouteAlgorithm::Bfs));
        assert_eq!(
            "dijkstra".parse::<RouteAlgorithm>(),
            Ok(RouteAlgorithm::Dijkstra)
        );
        assert!("a-star".parse::<RouteAlgorithm>().is_err());
        assert_eq!(RouteAlgorithm::Bfs.to_string(), "bfs");
    }

    #[test]
    fn plans_cost_and_hops() {
        let graph = MapGraph::world();

        let cheapest = plan_route(&graph, &RouteRequest::dijkstra("A", "G")).unwrap();
        assert_eq!(cheapest.cost, 35);
        assert_eq!(cheapest.hop_count(), 3);

        let fewest = plan_route(&graph, &RouteRequest::bfs("A", "G")).unwrap();
        assert_eq!(fewest.steps, vec!["A", "B", "D", "G"]);
        assert_eq!(fewest.cost, 50);
    }

    #[test]
    fn unreachable_goal_is_route_not_found() {
        let graph = MapGraph::world();
        for request in [RouteRequest::dijkstra("G", "A"), RouteRequest::bfs("G", "A")] {
            assert_eq!(
                plan_route(&graph, &request),
                Err(Error::RouteNotFound {
                    start: "G".to_string(),
                    goal: "A".to_string(),
                })
            );
        }
    }

    #[test]
    fn unknown_endpoints_are_rejected() {
        let graph = MapGraph::world();
        assert!(matches!(
            plan_route(&graph, &RouteRequest::dijkstra("A", "Q")),
            Err(Error::UnknownLocation { .. })
        ));
        assert!(matches!(
            plan_route(&graph, &RouteRequest::bfs("Q", "A")),
            Err(Error::UnknownLocation { .. })
        ));
    }
}
