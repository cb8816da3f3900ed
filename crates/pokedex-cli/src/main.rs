mod format;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use pokedex_core::config::{AppConfig, LoggingConfig};
use pokedex_runtime::{AppCatchList, Runtime};

#[derive(Parser)]
#[command(name = "pokedex", version, about = "Look up creatures and keep a catch list")]
struct Cli {
    /// Config file to use instead of the user config.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show details for a creature.
    Lookup { name: String },
    /// Look a creature up and add it to the catch list.
    Catch { name: String },
    /// Remove a creature from the catch list.
    Release { name: String },
    /// Show every caught creature.
    List,
}

impl Command {
    fn name(&self) -> Option<&str> {
        match self {
            Command::Lookup { name } | Command::Catch { name } | Command::Release { name } => {
                Some(name)
            }
            Command::List => None,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(name) = cli.command.name() {
        if name.trim().is_empty() {
            eprintln!("Please enter a name.");
            return ExitCode::from(2);
        }
    }

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("pokedex: {e}");
            return ExitCode::FAILURE;
        }
    };

    let _guard = init_tracing(&config.logging);

    let mut runtime = match Runtime::new(config) {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "Startup failed");
            eprintln!("pokedex: {e}");
            return ExitCode::FAILURE;
        }
    };

    let list = runtime.catch_list_mut();
    list.on_change(|records| tracing::debug!(count = records.len(), "Catch list changed"));

    match cli.command {
        Command::Lookup { name } => lookup(list, name.trim()).await,
        Command::Catch { name } => catch(list, name.trim()).await,
        Command::Release { name } => release(list, name.trim()).await,
        Command::List => {
            list.initialize().await;
            println!("{}", format::catch_list(list.records()));
            ExitCode::SUCCESS
        }
    }
}

/// Stderr always; a daily rolling file too when `logging.directory` is set.
/// `RUST_LOG` overrides the configured filter.
fn init_tracing(logging: &LoggingConfig) -> Option<WorkerGuard> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let stderr = fmt::layer().with_writer(std::io::stderr);

    match &logging.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "pokedex.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr)
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry().with(filter).with(stderr).init();
            None
        }
    }
}

async fn lookup(list: &AppCatchList, name: &str) -> ExitCode {
    match list.lookup(name).await {
        Ok(record) => {
            let caught = list.is_bookmarked(&record).await;
            println!("{}", format::details(&record, caught));
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("{}", e.user_message(name));
            ExitCode::FAILURE
        }
    }
}

async fn catch(list: &mut AppCatchList, name: &str) -> ExitCode {
    let record = match list.lookup(name).await {
        Ok(record) => record,
        Err(e) => {
            println!("{}", e.user_message(name));
            return ExitCode::FAILURE;
        }
    };

    let display = record.name().to_owned();
    if list.is_bookmarked(&record).await {
        println!("{display} is already in your catch list.");
    } else {
        list.on_bookmark_changed(record, true).await;
        println!("Caught {display}!");
    }
    ExitCode::SUCCESS
}

async fn release(list: &mut AppCatchList, name: &str) -> ExitCode {
    list.initialize().await;
    let Some(record) = list.find_by_name(name).cloned() else {
        println!("{name} is not in your catch list.");
        return ExitCode::FAILURE;
    };

    let display = record.name().to_owned();
    list.on_bookmark_changed(record, false).await;
    println!("Released {display}.");
    ExitCode::SUCCESS
}
