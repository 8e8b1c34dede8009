use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use heroos_cli::config::SessionConfig;
use heroos_cli::output::OutputFormat;
use heroos_lib::{RouteAlgorithm, DEFAULT_DESTINATION};

mod commands;

use commands::inventory::InventoryCommandArgs;
use commands::route::RouteCommandArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Hero OS: sorting, searching, hashing and graph algorithms")]
struct Cli {
    /// Seed for inventory generation (falls back to HEROOS_SEED).
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Pause after each menu action in milliseconds (falls back to HEROOS_DELAY_MS).
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Skip the start-up banner.
    #[arg(long, global = true)]
    no_logo: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive menu (default).
    Play,
    /// Generate an inventory, optionally sort it and binary search it.
    Inventory {
        /// Sort the inventory by power.
        #[arg(long)]
        sort: bool,
        /// Power value to binary search for (requires --sort).
        #[arg(long, allow_negative_numbers = true)]
        search: Option<i32>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Look up a spell by its code.
    Cast {
        /// Spell code, e.g. fire.
        code: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Compute a route between two map locations.
    Route {
        /// Starting location code.
        #[arg(long = "from")]
        from: String,
        /// Destination location code.
        #[arg(long = "to", default_value = DEFAULT_DESTINATION)]
        to: String,
        /// Routing algorithm: dijkstra or bfs.
        #[arg(long, default_value_t = RouteAlgorithm::Dijkstra)]
        algorithm: RouteAlgorithm,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = SessionConfig::resolve(cli.seed, cli.delay_ms, cli.no_logo);

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => commands::play::handle_play(config),
        Command::Inventory {
            sort,
            search,
            format,
        } => commands::inventory::handle_inventory(
            &config,
            &InventoryCommandArgs { sort, search },
            format,
        ),
        Command::Cast { code, format } => commands::cast::handle_cast(&code, format),
        Command::Route {
            from,
            to,
            algorithm,
            format,
        } => commands::route::handle_route(
            &RouteCommandArgs {
                from,
                to,
                algorithm,
            },
            format,
        ),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
