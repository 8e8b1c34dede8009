//! Ranked search over the inventory: stable sort by power and an
//! instrumented binary search that records every midpoint it inspects.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::inventory::Inventory;

/// Decision taken after comparing the midpoint against the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchDirection {
    /// The midpoint holds the target.
    Found,
    /// Midpoint power was below the target; continue in the upper half.
    Right,
    /// Midpoint power was above the target; continue in the lower half.
    Left,
}

impl fmt::Display for SearchDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SearchDirection::Found => "found",
            SearchDirection::Right => "right",
            SearchDirection::Left => "left",
        };
        f.write_str(value)
    }
}

/// One iteration of the binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchStep {
    /// Inclusive lower bound searched during this step.
    pub low: usize,
    /// Inclusive upper bound searched during this step.
    pub high: usize,
    /// Midpoint index inspected.
    pub index: usize,
    /// Power stored at `index`.
    pub power: i32,
    pub direction: SearchDirection,
}

impl SearchStep {
    /// Inclusive range the search continues with after this step, as signed
    /// bounds. The upper bound is `-1` when the left half is empty.
    pub fn next_range(&self) -> Option<(i64, i64)> {
        match self.direction {
            SearchDirection::Found => None,
            SearchDirection::Right => Some((self.index as i64 + 1, self.high as i64)),
            SearchDirection::Left => Some((self.low as i64, self.index as i64 - 1)),
        }
    }
}

/// Result of [`binary_search_by_power`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchOutcome {
    pub target: i32,
    /// Index of the matching item, if any.
    pub found: Option<usize>,
    pub steps: Vec<SearchStep>,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        self.found.is_some()
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Midpoint indices in the order they were inspected.
    pub fn visited_indices(&self) -> Vec<usize> {
        self.steps.iter().map(|step| step.index).collect()
    }
}

/// Sort the inventory ascending by power and mark it sorted.
///
/// The sort is stable, so items sharing a power keep their generation order.
pub fn sort_by_power(inventory: &mut Inventory) {
    inventory.sort_by_power();
    debug!(items = inventory.len(), "sorted inventory by power");
}

/// Binary search the sorted inventory for an item with exactly `target` power.
///
/// Returns [`Error::UnsortedInventory`] without inspecting any item when the
/// inventory has not been sorted. With duplicate powers the first matching
/// midpoint wins.
pub fn binary_search_by_power(inventory: &Inventory, target: i32) -> Result<SearchOutcome> {
    if !inventory.is_sorted() {
        return Err(Error::UnsortedInventory);
    }

    let items = inventory.items();
    let mut steps = Vec::new();
    let mut found = None;

    if !items.is_empty() {
        let mut low = 0usize;
        let mut high = items.len() - 1;

        while low <= high {
            let mid = (low + high) / 2;
            let power = items[mid].power;
            let direction = match power.cmp(&target) {
                std::cmp::Ordering::Equal => SearchDirection::Found,
                std::cmp::Ordering::Less => SearchDirection::Right,
                std::cmp::Ordering::Greater => SearchDirection::Left,
            };
            debug!(low, high, mid, power, target, %direction, "binary search step");
            steps.push(SearchStep {
                low,
                high,
                index: mid,
                power,
                direction,
            });

            match direction {
                SearchDirection::Found => {
                    found = Some(mid);
                    break;
                }
                SearchDirection::Right => low = mid + 1,
                SearchDirection::Left => {
                    if mid == 0 {
                        break;
                    }
                    high = mid - 1;
                }
            }
        }
    }

    Ok(SearchOutcome {
        target,
        found,
        steps,
    })
}
