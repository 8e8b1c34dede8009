//! Interactive menu loop.
//!
//! The session owns the inventory, borrows the shared spell registry, and
//! owns the world map. It is generic over its input and output so tests can
//! drive it with in-memory buffers.

use std::io::{BufRead, Write};
use std::thread;

use anyhow::{Context, Result};
use heroos_lib::{
    bfs, binary_search_by_power, dijkstra, sort_by_power, Error as LibError, Inventory, MapGraph,
    SpellRegistry,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::output::{
    format_hop_path, format_inventory, format_locations, format_logo, format_menu, format_search,
    format_shortest_paths, format_spell, format_spell_codes,
};
use crate::terminal::Style;

/// Menu selection parsed from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Inventory,
    Search,
    Cast,
    Navigate,
    Reset,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Inventory),
            "2" => Some(MenuChoice::Search),
            "3" => Some(MenuChoice::Cast),
            "4" => Some(MenuChoice::Navigate),
            "5" => Some(MenuChoice::Reset),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// One interactive session over a reader/writer pair.
pub struct Session<R, W> {
    input: R,
    output: W,
    inventory: Inventory,
    spells: &'static SpellRegistry,
    graph: MapGraph,
    rng: StdRng,
    config: SessionConfig,
    style: Style,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: SessionConfig, style: Style, input: R, output: W) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            input,
            output,
            inventory: Inventory::new(),
            spells: SpellRegistry::standard(),
            graph: MapGraph::world(),
            rng,
            config,
            style,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Consume the session and hand back its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        info!(seed = ?self.config.seed, "starting session");
        if self.config.show_logo {
            let logo = format_logo(&self.style);
            self.write(&logo)?;
        }
        self.reset()?;

        loop {
            let menu = format_menu(&self.style);
            self.write(&menu)?;
            let Some(line) = self.prompt(">>> Choose an option (1-6): ")? else {
                debug!("input closed, leaving session");
                break;
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                self.write("Invalid command, please try again.\n")?;
                self.pause();
                continue;
            };
            debug!(?choice, "menu selection");

            match choice {
                MenuChoice::Inventory => self.show_inventory()?,
                MenuChoice::Search => self.search_item()?,
                MenuChoice::Cast => self.cast_spell()?,
                MenuChoice::Navigate => self.navigate()?,
                MenuChoice::Reset => self.reset()?,
                MenuChoice::Exit => {
                    self.write("Shutting down... thanks for adventuring!\n")?;
                    break;
                }
            }
            self.pause();
        }

        info!("session finished");
        Ok(())
    }

    /// Regenerate the inventory from the configured generation parameters.
    pub fn reset(&mut self) -> Result<()> {
        self.inventory
            .regenerate_with(&self.config.generation, &mut self.rng)
            .context("failed to generate inventory")?;
        info!(items = self.inventory.len(), "inventory regenerated");
        let message = format!(
            ">>> System initialized: generated {} dropped items.\n",
            self.inventory.len()
        );
        self.write(&message)
    }

    fn show_inventory(&mut self) -> Result<()> {
        let table = format_inventory(&self.inventory, &self.style);
        self.write(&table)?;
        if self.inventory.is_sorted() {
            return Ok(());
        }

        let answer = self.prompt("  The inventory is a mess! Sort it by power? (y/n): ")?;
        if answer.is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y")) {
            sort_by_power(&mut self.inventory);
            self.write(">>> Sorting... done!\n")?;
            let table = format_inventory(&self.inventory, &self.style);
            self.write(&table)?;
        }
        Ok(())
    }

    fn search_item(&mut self) -> Result<()> {
        self.write("\n[Equipment search]\n")?;
        if !self.inventory.is_sorted() {
            return self.write_unsorted_notice();
        }

        let Some(line) = self.prompt(">>> Enter the exact power to look for: ")? else {
            return Ok(());
        };
        let Ok(target) = line.trim().parse::<i32>() else {
            return self.write("Please enter a number!\n");
        };

        match binary_search_by_power(&self.inventory, target) {
            Ok(outcome) => {
                let text = format_search(&self.inventory, &outcome, &self.style);
                self.write(&text)
            }
            Err(LibError::UnsortedInventory) => self.write_unsorted_notice(),
            Err(err) => Err(err.into()),
        }
    }

    fn write_unsorted_notice(&mut self) -> Result<()> {
        let p = self.style.palette;
        let message = format!(
            "{}Error:{} binary search needs sorted data! Organize the inventory first (option 1).\n",
            p.red, p.reset
        );
        self.write(&message)
    }

    fn cast_spell(&mut self) -> Result<()> {
        let codes = format_spell_codes(self.spells);
        self.write("\n[Quick cast]\n")?;
        self.write(&codes)?;
        let Some(line) = self.prompt(">>> Enter a spell code: ")? else {
            return Ok(());
        };
        let code = line.trim().to_lowercase();

        let spells = self.spells;
        match spells.lookup(&code) {
            Ok(spell) => {
                let text = format_spell(spell, &self.style);
                self.write(&text)
            }
            Err(err @ LibError::UnknownSpell { .. }) => {
                let message = format!(
                    "\n Fizzle... nothing happens ({err}). Check your spell code!\n"
                );
                self.write(&message)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn navigate(&mut self) -> Result<()> {
        let locations = format_locations(&self.graph);
        self.write("\n[Map navigation]\n")?;
        self.write(&locations)?;

        let Some(line) = self.prompt(">>> Enter a starting code (e.g. A): ")? else {
            return Ok(());
        };
        let start = line.trim().to_uppercase();
        if !self.graph.contains(&start) {
            return self.write("Invalid starting point!\n");
        }

        self.write("\n--- Choose a graph algorithm ---\n")?;
        self.write("1. Dijkstra (shortest travel time)\n")?;
        self.write("2. BFS (fewest transfers)\n")?;
        let Some(choice) = self.prompt(">>> Enter 1 or 2: ")? else {
            return Ok(());
        };

        match choice.trim() {
            "1" => self.run_dijkstra(&start),
            "2" => self.run_bfs(&start),
            _ => self.write("Invalid algorithm option.\n"),
        }
    }

    fn run_dijkstra(&mut self, start: &str) -> Result<()> {
        self.write(">>> Computing shortest paths (Dijkstra)...\n")?;
        let paths = dijkstra(&self.graph, start)?;
        let text = format_shortest_paths(
            &self.graph,
            &paths,
            &self.config.destination,
            &self.style,
        )?;
        self.write(&text)
    }

    fn run_bfs(&mut self, start: &str) -> Result<()> {
        self.write(">>> Running breadth-first search for the fewest transfers...\n")?;
        match bfs(&self.graph, start, &self.config.destination) {
            Ok(route) => {
                let text = format_hop_path(&self.graph, &route, &self.style)?;
                self.write(&text)
            }
            Err(LibError::RouteNotFound { goal, .. }) => {
                let name = self.graph.display_name(&goal)?.to_string();
                let explored = format!("\n  BFS finished: no route reaches {name}.\n");
                self.write(&explored)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        self.write(text)?;
        self.output.flush().context("failed to flush output")?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output
            .write_all(text.as_bytes())
            .context("failed to write output")
    }

    fn pause(&self) {
        if !self.config.delay.is_zero() {
            thread::sleep(self.config.delay);
        }
    }
}
