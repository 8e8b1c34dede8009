//! Inventory store holding the dropped items and their sortedness flag.
//!
//! The store bundles the item collection with the `sorted` marker so the
//! invariant "sorted implies non-decreasing by power" is enforced at every
//! mutating call instead of by convention. Only [`crate::search::sort_by_power`]
//! can set the flag; every other mutation clears it.

use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Number of items produced by a default regeneration.
pub const DEFAULT_ITEM_COUNT: usize = 10;

/// Lowest power a default item can roll.
pub const DEFAULT_MIN_POWER: i32 = 10;

/// Highest power a default item can roll.
pub const DEFAULT_MAX_POWER: i32 = 999;

/// Item names drawn from by a default regeneration.
pub const DEFAULT_ITEM_NAMES: [&str; 6] = ["生鏽劍", "勇者劍", "木  棒", "石中劍", "雷神槌", "平底鍋"];

/// A single dropped item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub power: i32,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, power: i32) -> Self {
        Self {
            id,
            name: name.into(),
            power,
        }
    }
}

/// Parameters for [`Inventory::regenerate_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub count: usize,
    pub names: Vec<String>,
    pub power_range: RangeInclusive<i32>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_ITEM_COUNT,
            names: DEFAULT_ITEM_NAMES.iter().map(|s| s.to_string()).collect(),
            power_range: DEFAULT_MIN_POWER..=DEFAULT_MAX_POWER,
        }
    }
}

/// Mutable collection of items plus the sortedness flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Inventory {
    items: Vec<Item>,
    sorted: bool,
}

impl Inventory {
    /// Create an empty, unsorted inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap items produced elsewhere. The result is never considered sorted,
    /// even if the items happen to be in order.
    pub fn from_items(items: Vec<Item>) -> Self {
        Self {
            items,
            sorted: false,
        }
    }

    /// Replace the contents with `count` freshly generated items.
    ///
    /// Each name is drawn uniformly from `name_pool` and each power uniformly
    /// from the inclusive `power_range`. Ids run from `0` to `count - 1`.
    /// The inventory is left unsorted regardless of its previous state. On
    /// error the current contents are kept untouched.
    pub fn regenerate<R, S>(
        &mut self,
        count: usize,
        name_pool: &[S],
        power_range: RangeInclusive<i32>,
        rng: &mut R,
    ) -> Result<()>
    where
        R: Rng + ?Sized,
        S: AsRef<str>,
    {
        if name_pool.is_empty() {
            return Err(Error::EmptyNamePool);
        }
        if power_range.is_empty() {
            return Err(Error::InvalidPowerRange {
                min: *power_range.start(),
                max: *power_range.end(),
            });
        }

        let limit = u32::try_from(count).map_err(|_| Error::InventoryTooLarge { count })?;

        let mut items = Vec::with_capacity(count);
        for id in 0..limit {
            let name = name_pool
                .choose(rng)
                .ok_or(Error::EmptyNamePool)?
                .as_ref()
                .to_string();
            let power = rng.gen_range(power_range.clone());
            items.push(Item::new(id, name, power));
        }

        debug!(count, "regenerated inventory");
        self.items = items;
        self.sorted = false;
        Ok(())
    }

    /// Regenerate using a bundled [`GenerationConfig`].
    pub fn regenerate_with<R>(&mut self, config: &GenerationConfig, rng: &mut R) -> Result<()>
    where
        R: Rng + ?Sized,
    {
        self.regenerate(
            config.count,
            config.names.as_slice(),
            config.power_range.clone(),
            rng,
        )
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Whether binary search preconditions currently hold.
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Reorder items ascending by power and mark the inventory sorted.
    ///
    /// `sort_by_key` is a stable merge sort, so equal powers keep their
    /// relative order.
    pub(crate) fn sort_by_power(&mut self) {
        self.items.sort_by_key(|item| item.power);
        self.sorted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn regenerate_fills_requested_count_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut inventory = Inventory::new();
        inventory
            .regenerate(25, &["a", "b"], 1..=3, &mut rng)
            .expect("valid parameters");

        assert_eq!(inventory.len(), 25);
        for (index, item) in inventory.items().iter().enumerate() {
            assert_eq!(item.id as usize, index);
            assert!(item.name == "a" || item.name == "b");
            assert!((1..=3).contains(&item.power));
        }
    }

    #[test]
    fn regenerate_clears_sorted_flag() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut inventory = Inventory::new();
        inventory
            .regenerate_with(&GenerationConfig::default(), &mut rng)
            .unwrap();
        inventory.sort_by_power();
        assert!(inventory.is_sorted());

        inventory
            .regenerate_with(&GenerationConfig::default(), &mut rng)
            .unwrap();
        assert!(!inventory.is_sorted());
    }

    #[test]
    fn regenerate_rejects_empty_name_pool() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut inventory = Inventory::from_items(vec![Item::new(0, "keep", 1)]);
        let empty: [&str; 0] = [];

        let err = inventory
            .regenerate(3, &empty, 1..=10, &mut rng)
            .unwrap_err();
        assert_eq!(err, Error::EmptyNamePool);
        assert_eq!(inventory.len(), 1, "failed regeneration keeps old items");
    }

    #[test]
    fn regenerate_rejects_empty_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut inventory = Inventory::new();
        #[allow(clippy::reversed_empty_ranges)]
        let err = inventory
            .regenerate(3, &["x"], 10..=1, &mut rng)
            .unwrap_err();
        assert_eq!(err, Error::InvalidPowerRange { min: 10, max: 1 });
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn regenerate_rejects_counts_beyond_item_ids() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut inventory = Inventory::from_items(vec![Item::new(0, "keep", 1)]);
        let count = u32::MAX as usize + 1;

        let err = inventory
            .regenerate(count, &["x"], 1..=10, &mut rng)
            .unwrap_err();
        assert_eq!(err, Error::InventoryTooLarge { count });
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn default_config_matches_constants() {
        let config = GenerationConfig::default();
        assert_eq!(config.count, 10);
        assert_eq!(config.names.len(), 6);
        assert_eq!(config.power_range, 10..=999);
    }

    #[test]
    fn from_items_is_never_sorted() {
        let inventory = Inventory::from_items(vec![Item::new(0, "a", 1), Item::new(1, "b", 2)]);
        assert!(!inventory.is_sorted());
    }
}
