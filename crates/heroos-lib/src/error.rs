use thiserror::Error;

/// Convenient result alias for the Hero OS library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Raised when binary search is attempted before the inventory was sorted.
    #[error("binary search requires the inventory to be sorted by power first")]
    UnsortedInventory,

    /// Raised when a spell code is not present in the registry.
    #[error("unknown spell code: {code}{}", format_suggestions(.suggestions))]
    UnknownSpell {
        code: String,
        suggestions: Vec<String>,
    },

    /// Raised when a location code is not part of the map.
    #[error("unknown location code: {code}")]
    UnknownLocation { code: String },

    /// Raised when a map is built with the same location code twice.
    #[error("duplicate location code: {code}")]
    DuplicateLocation { code: String },

    /// Raised when breadth-first search exhausts the map without reaching the goal.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when a shortest-path query targets a location with no finite distance.
    #[error("{target} is unreachable from {start}")]
    Unreachable { start: String, target: String },

    /// Raised when the predecessor chain does not lead back to the start.
    #[error("predecessor chain for {target} does not terminate at the start location")]
    MalformedPath { target: String },

    /// Raised when inventory generation is asked to pick from an empty name pool.
    #[error("item name pool is empty")]
    EmptyNamePool,

    /// Raised when inventory generation receives an empty power range.
    #[error("invalid power range {min}..={max}")]
    InvalidPowerRange { min: i32, max: i32 },

    /// Raised when more items are requested than item ids can number.
    #[error("cannot generate {count} items; ids are limited to u32")]
    InventoryTooLarge { count: usize },
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
