mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use tsync::cli::{Cli, Commands, ConfigCommands};
use tsync::theme::current_theme;
use tsync::Config;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "TSYNC_LOG";

fn init_logging(verbose: bool) {
    let default = if verbose { "tsync=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "tsync", &mut std::io::stdout());
            Ok(())
        }
        Commands::Config { command } => match command {
            ConfigCommands::Show => commands::config::handle_show(),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
        },
        Commands::Tracks { tracks, json } => {
            let config = Config::load()?;
            commands::tracks::handle(&tracks, json, &config)
        }
        Commands::Fetch { stream_id, output } => {
            let config = Config::load()?;
            commands::fetch::handle(stream_id, output, &config)
        }
        Commands::Export {
            tracks,
            label,
            output,
        } => {
            let config = Config::load()?;
            commands::export::handle(&tracks, label.as_deref(), output, &config)
        }
        Commands::Follow {
            tracks,
            label,
            start,
            speed,
        } => {
            let config = Config::load()?;
            commands::follow::handle(&tracks, label.as_deref(), start, speed, &config)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        let theme = current_theme();
        eprintln!("{}", theme.error_text(&format!("Error: {:#}", e)));
        std::process::exit(1);
    }
}
