//! Config subcommands handler

use anyhow::{bail, Result};
use std::io::{self, BufRead, Write};

use tsync::theme::current_theme;
use tsync::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let theme = current_theme();
    print!("{}", theme.primary_text(&config.to_toml()?));
    Ok(())
}

/// Print where the configuration file is read from.
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write a configuration file with default settings.
///
/// An existing file is only replaced with `--force` or after confirmation
/// on an interactive terminal.
pub fn handle_init(force: bool) -> Result<()> {
    let theme = current_theme();
    let config_path = Config::config_path()?;

    if config_path.exists() && !force {
        if !atty::is(atty::Stream::Stdin) {
            bail!(
                "Config file already exists: {} (use --force to overwrite)",
                config_path.display()
            );
        }
        if !prompt_confirmation(&format!("Overwrite {}?", config_path.display()))? {
            println!("{}", theme.primary_text("No changes made."));
            return Ok(());
        }
    }

    let path = Config::default().save()?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}

/// Prompt user for yes/no confirmation.
///
/// Returns true if user confirms (y/yes), false otherwise.
fn prompt_confirmation(message: &str) -> Result<bool> {
    let theme = current_theme();

    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;

    let response = input.trim().to_lowercase();
    Ok(response == "y" || response == "yes")
}
