//! Cast command handler for one-shot spell lookups.

use anyhow::Result;

use heroos_cli::output::{format_spell, OutputFormat};
use heroos_cli::terminal::Style;
use heroos_lib::SpellRegistry;

/// Handle the cast subcommand.
///
/// The code is lower-cased before lookup; unknown codes fail the command.
pub fn handle_cast(code: &str, format: OutputFormat) -> Result<()> {
    let code = code.trim().to_lowercase();
    let spell = SpellRegistry::standard().lookup(&code)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(spell)?),
        OutputFormat::Text => print!("{}", format_spell(spell, &Style::detect())),
    }
    Ok(())
}
