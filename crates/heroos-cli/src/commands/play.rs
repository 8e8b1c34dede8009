//! Play command handler running the interactive menu on stdin/stdout.

use std::io;

use anyhow::Result;

use heroos_cli::config::SessionConfig;
use heroos_cli::session::Session;
use heroos_cli::terminal::Style;

/// Handle the play subcommand (also the default when no subcommand is given).
pub fn handle_play(config: SessionConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, Style::detect(), stdin.lock(), stdout.lock());
    session.run()
}
