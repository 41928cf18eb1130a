//! Vitrine CLI application entry point
//!
//! Browse, filter and share views of a static product inventory from the
//! terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! vitrine
//! vitrine browse --state '?cat=Garden&sort=price_asc'
//!
//! # One-shot search, as cards or for scripts
//! vitrine search -Q lamp --in-stock
//! vitrine search -c Lighting --max 50 --format csv
//!
//! # Inspect and check inventories
//! vitrine show p1
//! vitrine validate data/inventory.json
//!
//! # Build a share string without loading anything
//! vitrine url -c Garden --sort price_desc
//! ```
//!
//! # Configuration
//!
//! On the first interactive run vitrine prompts for the inventory location.
//! Configuration is stored in the user's config directory
//! (`~/.config/vitrine/config.toml` on Linux).
//!
//! # Logging
//!
//! `VITRINE_LOG` takes an `EnvFilter` directive (e.g. `vitrine=debug`). Logs
//! go to stderr.

use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use vitrine::{
    VitrineError,
    cli::{Cli, Commands, ConfigCommands, generate_completions},
    commands,
    config::{VitrineConfig, first_time_setup},
    inventory::{CacheMode, Loader, Source},
    ui::{GridPresenter, OutputWriter, StdoutWriter},
};

type Result<T> = std::result::Result<T, VitrineError>;

const LOG_ENV: &str = "VITRINE_LOG";

/// Install the stderr subscriber
///
/// The interactive browser owns the terminal, so it only logs when
/// `VITRINE_LOG` asks for it.
fn init_tracing(verbose: bool, interactive: bool) {
    let filter = match EnvFilter::try_from_env(LOG_ENV) {
        Ok(filter) => filter,
        Err(_) if interactive => return,
        Err(_) => EnvFilter::new(if verbose {
            "vitrine=debug,info"
        } else {
            "vitrine=info,warn"
        }),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(io::stderr))
        .init();
}

fn handle_config_command(
    mut config: VitrineConfig,
    command: &ConfigCommands,
    out: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let text = toml::to_string_pretty(&config)
                .map_err(|e| VitrineError::Output(e.to_string()))?;
            out.write(text.trim_end());
        }
        ConfigCommands::Path => {
            out.write(&VitrineConfig::config_path()?.display().to_string());
        }
        ConfigCommands::Init => {
            first_time_setup()?;
        }
        ConfigCommands::SetInventory { location } => {
            config.set_inventory(location)?;
            out.success(&format!("Default inventory set to {}", location.trim()));
        }
    }
    Ok(())
}

/// Logging, configuration and output for commands that read config
fn prepare(cli: &Cli, command: &Commands) -> Result<(VitrineConfig, StdoutWriter)> {
    let interactive = matches!(command, Commands::Browse { .. });
    init_tracing(cli.verbose, interactive);

    let config = if interactive && io::stdin().is_terminal() {
        VitrineConfig::load_or_setup()?
    } else {
        VitrineConfig::load()?
    };
    let out = StdoutWriter::new(cli.quiet || config.quiet);
    tracing::debug!(?command, "dispatching");
    Ok((config, out))
}

fn run(cli: &Cli) -> Result<()> {
    let command = cli.get_command();
    let setup = || prepare(cli, &command);

    match &command {
        // Completion scripts never touch config or logging
        Commands::Completions { shell } => {
            generate_completions(*shell, &mut io::stdout());
        }
        Commands::Browse { state } => {
            let (config, out) = setup()?;
            let location = commands::resolve_inventory(cli.inventory.as_deref(), &config)?;
            commands::browse(&location, state.as_deref(), &config, &out)?;
        }
        Commands::Search { filter, format } => {
            let (config, out) = setup()?;
            let location = commands::resolve_inventory(cli.inventory.as_deref(), &config)?;
            let loader = Loader::new(Source::parse(&location, CacheMode::NoStore));
            let presenter = GridPresenter::stdout(config.columns);
            commands::search(
                loader,
                &filter.to_state(),
                format.unwrap_or(config.output),
                presenter,
                &out,
            )?;
        }
        Commands::Show { id } => {
            let (config, _) = setup()?;
            let location = commands::resolve_inventory(cli.inventory.as_deref(), &config)?;
            let loader = Loader::new(Source::parse(&location, CacheMode::NoStore));
            commands::show(loader, id, &mut GridPresenter::stdout(config.columns))?;
        }
        Commands::Validate { path } => {
            let (config, out) = setup()?;
            let location = match path {
                Some(path) => path.clone(),
                None => commands::resolve_inventory(cli.inventory.as_deref(), &config)?,
            };
            commands::validate(Loader::new(Source::parse(&location, CacheMode::NoStore)), &out)?;
        }
        Commands::Url { filter } => {
            let (_, out) = setup()?;
            out.write(&commands::url(&filter.to_state()));
        }
        Commands::Config { command } => {
            let (config, out) = setup()?;
            handle_config_command(config, command, &out)?;
        }
    }

    Ok(())
}

/// Main entry point for the vitrine application
///
/// Parses command-line arguments, loads configuration, and dispatches to the
/// appropriate command handler. Errors are printed and turn into a non-zero
/// exit code.
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            StdoutWriter::new(false).error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
