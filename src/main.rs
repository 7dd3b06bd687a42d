//! CabinetKit command line.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use cabinetkit::report::{render_check, render_quote};
use cabinetkit::{
    init_logging_with, Config, ConfigSnapshot, ConfiguratorSession, LogFormat, ModuleCatalog,
    PriceTables,
};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "cabinetkit",
    version,
    about = "Price and check saved cabinet configurations"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Settings file (.json or .toml). Defaults to the platform config directory.
    #[arg(long, value_name = "PATH", global = true)]
    settings: Option<PathBuf>,

    /// Log output format.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    log_format: LogFormatArg,
}

#[derive(Subcommand)]
enum Command {
    /// Print the itemised quote for a saved configuration.
    Quote {
        /// Saved configuration snapshot (JSON).
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,

        /// Catalog price tables (JSON).
        #[arg(long, value_name = "PATH")]
        prices: PathBuf,
    },

    /// List slots and report what blocks each wizard step.
    Check {
        /// Saved configuration snapshot (JSON).
        #[arg(value_name = "SNAPSHOT")]
        snapshot: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Pretty,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging_with(cli.log_format.into())?;

    let settings = load_settings(cli.settings.as_deref())?;

    match cli.command {
        Command::Quote { snapshot, prices } => {
            let (name, session) = open_session(&snapshot, &settings)?;
            let tables = PriceTables::load_from_file(&prices)
                .with_context(|| format!("Failed to load price tables from {}", prices.display()))?;
            let breakdown = session.quote(&tables);
            print!(
                "{}",
                render_quote(
                    &name,
                    session.config(),
                    &breakdown,
                    settings.display.measurement_system
                )
            );
        }
        Command::Check { snapshot } => {
            let (name, session) = open_session(&snapshot, &settings)?;
            println!("{}", name);
            print!(
                "{}",
                render_check(
                    session.config(),
                    session.bounds(),
                    settings.display.measurement_system
                )
            );
        }
    }

    Ok(())
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => match Config::default_path() {
            Ok(path) => Config::load_or_default(&path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            Err(err) => {
                tracing::warn!(error = %err, "Using default settings");
                Config::default()
            }
        },
    };
    Ok(config)
}

fn open_session(path: &Path, settings: &Config) -> anyhow::Result<(String, ConfiguratorSession)> {
    let snapshot = ConfigSnapshot::load_from_file(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let name = snapshot.name.clone();
    let session = ConfiguratorSession::from_snapshot(
        Arc::new(ModuleCatalog::standard()),
        settings.session_options(),
        snapshot,
    )?;
    Ok((name, session))
}
