//! Route command handler for computing paths between map locations.

use anyhow::{Context, Result};

use heroos_cli::output::{format_route_plan, OutputFormat};
use heroos_cli::terminal::Style;
use heroos_lib::{plan_route, MapGraph, RouteAlgorithm, RouteRequest};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Starting location code.
    pub from: String,
    /// Destination location code.
    pub to: String,
    /// Algorithm to use when planning the route.
    pub algorithm: RouteAlgorithm,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library RouteRequest, normalizing codes to upper case.
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest {
            start: self.from.trim().to_uppercase(),
            goal: self.to.trim().to_uppercase(),
            algorithm: self.algorithm,
        }
    }
}

/// Handle the route subcommand.
pub fn handle_route(args: &RouteCommandArgs, format: OutputFormat) -> Result<()> {
    let graph = MapGraph::world();
    let request = args.to_request();
    let plan = plan_route(&graph, &request).with_context(|| {
        format!(
            "failed to plan a {} route from {} to {}",
            request.algorithm, request.start, request.goal
        )
    })?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
        OutputFormat::Text => print!("{}", format_route_plan(&graph, &plan, &Style::detect())?),
    }
    Ok(())
}
