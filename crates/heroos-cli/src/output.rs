//! Text formatting for session and subcommand output.
//!
//! Every formatter returns a `String` so the session can write it to any
//! sink and tests can assert on it directly.

use clap::ValueEnum;
use heroos_lib::{
    HopPath, Inventory, MapGraph, Result, RoutePlan, SearchDirection, SearchOutcome,
    ShortestPaths, SpellRecord, SpellRegistry,
};

use crate::terminal::Style;

/// Width of the menu and table rules.
const RULE_WIDTH: usize = 50;

/// Output format for one-shot subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Banner shown when the interactive session starts.
pub fn format_logo(style: &Style) -> String {
    let p = &style.palette;
    let rule = style.glyphs.heavy_rule(RULE_WIDTH);
    format!(
        "{orange}{rule}\n  HERO OS v2.1\n  >> sorting | searching | hashing | graphs\n{rule}{reset}\n",
        orange = p.orange,
        reset = p.reset,
    )
}

pub fn format_menu(style: &Style) -> String {
    let p = &style.palette;
    let rule = style.glyphs.heavy_rule(RULE_WIDTH);
    let mut out = String::new();
    out.push_str(&format!("\n{}{}{}\n", p.gray, rule, p.reset));
    out.push_str(&format!("  {}Hero OS v2.1 - Main Menu{}\n", p.white_bold, p.reset));
    out.push_str("1. Organize inventory (sorting)\n");
    out.push_str("2. Find equipment (binary search)\n");
    out.push_str("3. Cast a spell (hashing)\n");
    out.push_str("4. Map navigation (Dijkstra / BFS)\n");
    out.push_str("5. Restart (regenerate data)\n");
    out.push_str("6. Shut down\n");
    out.push_str(&format!("{}{}{}\n", p.gray, rule, p.reset));
    out
}

/// Inventory table with its sortedness status.
pub fn format_inventory(inventory: &Inventory, style: &Style) -> String {
    let p = &style.palette;
    let rule = style.glyphs.rule(40);
    let status = if inventory.is_sorted() {
        format!("{}sorted (binary search ready){}", p.green, p.reset)
    } else {
        format!("{}unsorted{}", p.yellow, p.reset)
    };

    let mut out = String::new();
    out.push_str(&format!("\n[Inventory] status: {status}\n"));
    out.push_str(&format!("{}{}{}\n", p.gray, rule, p.reset));
    out.push_str(&format!("{:<5} {:<10} {:<10}\n", "ID", "Name", "Power"));
    out.push_str(&format!("{}{}{}\n", p.gray, rule, p.reset));
    if inventory.is_empty() {
        out.push_str("(empty)\n");
    }
    for item in inventory.items() {
        out.push_str(&format!(
            "{:<5} {}{:<10}{} {}{:<10}{}\n",
            item.id, p.white_bold, item.name, p.reset, p.cyan, item.power, p.reset
        ));
    }
    out
}

/// Step-by-step narration of a binary search.
pub fn format_search(inventory: &Inventory, outcome: &SearchOutcome, style: &Style) -> String {
    let p = &style.palette;
    let target = outcome.target;
    let mut out = String::new();
    out.push_str(&format!(
        "   Searching range [0 ~ {}]...\n",
        inventory.len() as i64 - 1
    ));

    for (number, step) in outcome.steps.iter().enumerate() {
        out.push_str(&format!(
            "   Step {}: checking index {} (power {}{}{})...\n",
            number + 1,
            step.index,
            p.cyan,
            step.power,
            p.reset
        ));
        if let Some((low, high)) = step.next_range() {
            let relation = match step.direction {
                SearchDirection::Right => ">",
                _ => "<",
            };
            out.push_str(&format!(
                "   target {target} {relation} {}, narrowing range to [{low} ~ {high}]\n",
                step.power
            ));
        }
    }

    match outcome.found.and_then(|index| inventory.get(index).map(|item| (index, item))) {
        Some((index, item)) => out.push_str(&format!(
            "\n  {}Found it!{} Slot {} holds [{}] with power {target} ({} steps)\n",
            p.green,
            p.reset,
            index + 1,
            item.name,
            outcome.step_count()
        )),
        None => out.push_str(&format!(
            "\n  {}Search finished:{} no equipment has exactly {target} power.\n",
            p.yellow, p.reset
        )),
    }
    out
}

/// Short list of castable codes shown before the spell prompt.
pub fn format_spell_codes(registry: &SpellRegistry) -> String {
    format!(
        "Available spell codes (keys): {}\n",
        registry.codes().collect::<Vec<_>>().join(", ")
    )
}

pub fn format_spell(spell: &SpellRecord, style: &Style) -> String {
    let p = &style.palette;
    let mut out = String::new();
    out.push_str(&format!(
        "\n  {}Cast succeeded!{} {}{}{} activates!\n",
        p.green, p.reset, p.white_bold, spell.name, p.reset
    ));
    out.push_str(&format!("   Element: {}\n", spell.element));
    out.push_str(&format!(
        "   Value: {}{}{} (positive deals damage, negative heals)\n",
        p.cyan, spell.damage, p.reset
    ));
    out
}

/// Location code table.
pub fn format_locations(graph: &MapGraph) -> String {
    let mut out = String::from("Location codes and names:\n");
    for location in graph.locations() {
        out.push_str(&format!("  {}: {}\n", location.code, location.name));
    }
    out
}

fn join_names(graph: &MapGraph, steps: &[String], style: &Style) -> Result<String> {
    let names = steps
        .iter()
        .map(|code| graph.display_name(code))
        .collect::<Result<Vec<_>>>()?;
    let separator = format!(" {} ", style.glyphs.arrow);
    Ok(names.join(separator.as_str()))
}

/// Every reachable distance from the start plus the recommended route to
/// `destination`, when it is reachable.
pub fn format_shortest_paths(
    graph: &MapGraph,
    paths: &ShortestPaths,
    destination: &str,
    style: &Style,
) -> Result<String> {
    let p = &style.palette;
    let mut out = String::new();
    out.push_str(&format!(
        "\nShortest travel times from [{}]:\n",
        graph.display_name(&paths.start)?
    ));
    for (code, distance) in paths.reachable() {
        out.push_str(&format!(
            "  {} to [{} ({})]: {}{}{} minutes\n",
            style.glyphs.arrow,
            graph.display_name(code)?,
            code,
            p.cyan,
            distance,
            p.reset
        ));
    }

    if let Some(total) = paths.distance(destination)? {
        let route = paths.path_to(destination)?;
        out.push_str(&format!(
            "\n  {}Recommended route to {}{} (total {} minutes): {}\n",
            p.green,
            graph.display_name(destination)?,
            p.reset,
            total,
            join_names(graph, &route, style)?
        ));
    }
    Ok(out)
}

/// Exploration trace and fewest-hop route from breadth-first search.
pub fn format_hop_path(graph: &MapGraph, route: &HopPath, style: &Style) -> Result<String> {
    let p = &style.palette;
    let mut out = String::new();
    for code in &route.explored {
        out.push_str(&format!("   BFS exploring: {}...\n", graph.display_name(code)?));
    }
    out.push_str(&format!(
        "\n  {}BFS found a route (fewest transfers):{} {} ({} stops)\n",
        p.green,
        p.reset,
        join_names(graph, &route.steps, style)?,
        route.hop_count()
    ));
    Ok(out)
}

/// Summary of a planned route for the `route` subcommand.
pub fn format_route_plan(graph: &MapGraph, plan: &RoutePlan, style: &Style) -> Result<String> {
    let p = &style.palette;
    let mut out = String::new();
    out.push_str(&format!(
        "Route from {} to {} ({}):\n",
        graph.display_name(&plan.start)?,
        graph.display_name(&plan.goal)?,
        plan.algorithm
    ));
    for (index, code) in plan.steps.iter().enumerate() {
        out.push_str(&format!(
            "{:>3}. {} ({})\n",
            index + 1,
            graph.display_name(code)?,
            code
        ));
    }
    out.push_str(&format!(
        "{}{} hops, {} minutes{}\n",
        p.gray,
        plan.hop_count(),
        plan.cost,
        p.reset
    ));
    Ok(out)
}
