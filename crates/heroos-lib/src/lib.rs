//! Hero OS library entry points.
//!
//! This crate holds the algorithmic core of the Hero OS playground: an
//! inventory that can be sorted and binary searched by power, a fixed spell
//! table with constant-time lookup, and a small weighted world map with
//! Dijkstra and breadth-first pathfinding. Front ends (the CLI session) should
//! only depend on the functions exported here instead of reimplementing
//! behavior.

pub mod error;
pub mod graph;
pub mod inventory;
pub mod path;
pub mod routing;
pub mod search;
pub mod spells;

pub use error::{Error, Result};
pub use graph::{Edge, Location, MapGraph, MapGraphBuilder, DEFAULT_DESTINATION};
pub use inventory::{GenerationConfig, Inventory, Item};
pub use path::{bfs, dijkstra, HopPath, NodeDistance, ShortestPaths};
pub use routing::{plan_route, route_cost, RouteAlgorithm, RoutePlan, RouteRequest};
pub use search::{binary_search_by_power, sort_by_power, SearchDirection, SearchOutcome, SearchStep};
pub use spells::{SpellRecord, SpellRegistry};
