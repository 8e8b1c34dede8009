//! Inventory command handler: generate, optionally sort, optionally search.

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use heroos_cli::config::SessionConfig;
use heroos_cli::output::{format_inventory, format_search, OutputFormat};
use heroos_cli::terminal::Style;
use heroos_lib::{binary_search_by_power, sort_by_power, Inventory, SearchOutcome};

/// Arguments for the inventory command.
#[derive(Debug, Clone, Default)]
pub struct InventoryCommandArgs {
    /// Sort by power before reporting.
    pub sort: bool,
    /// Power to binary search for; requires `sort`.
    pub search: Option<i32>,
}

/// JSON payload for the inventory command.
#[derive(Debug, Serialize)]
struct InventoryReport<'a> {
    inventory: &'a Inventory,
    #[serde(skip_serializing_if = "Option::is_none")]
    search: Option<SearchOutcome>,
}

/// Handle the inventory subcommand.
///
/// Searching an unsorted inventory is reported as an error rather than
/// sorting implicitly.
pub fn handle_inventory(
    config: &SessionConfig,
    args: &InventoryCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut inventory = Inventory::new();
    inventory
        .regenerate_with(&config.generation, &mut rng)
        .context("failed to generate inventory")?;

    if args.sort {
        sort_by_power(&mut inventory);
    }

    let search = args
        .search
        .map(|target| binary_search_by_power(&inventory, target))
        .transpose()
        .context("cannot search the inventory; pass --sort to sort it first")?;

    match format {
        OutputFormat::Json => {
            let report = InventoryReport {
                inventory: &inventory,
                search,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            let style = Style::detect();
            print!("{}", format_inventory(&inventory, &style));
            if let Some(outcome) = &search {
                print!("{}", format_search(&inventory, outcome, &style));
            }
        }
    }
    Ok(())
}
