use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use lazydefaults_config::{Backend, FileFormat};
use tracing::Level;

mod commands;
mod utils;
use commands::{cmd_init, cmd_new, cmd_schema, cmd_show, cmd_sql};

/// lazydefaults command-line interface.
#[derive(Parser, Debug)]
#[command(name = "lazydefaults", author, version, about)]
struct Cli {
    /// Log level (error, warn, info, debug, trace). RUST_LOG takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    verbosity: String,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Initialize lazydefaults.json with defaults.
    Init,
    /// Create a new, empty model template.
    New {
        /// Model (table) name.
        name: String,
        /// Model file format; defaults to the configured model format.
        #[arg(short = 'f', long = "format", value_enum)]
        format: Option<FileFormat>,
    },
    /// Print CREATE TABLE statements for the configured models.
    Sql {
        /// SQL dialect; defaults to the configured backend.
        #[arg(short = 'b', long = "backend", value_enum)]
        backend: Option<Backend>,
    },
    /// Show what the configurator derived for each column.
    Show {
        /// Only show this table.
        table: Option<String>,
    },
    /// Write JSON Schemas for model and config files.
    Schema {
        /// Output directory for schema files.
        #[arg(short = 'o', long = "out", default_value = "schemas")]
        out: PathBuf,
    },
}

fn setup_logging(verbosity: &str, format: LogFormat) {
    let level = match verbosity.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "error" => Level::ERROR,
        _ => Level::WARN,
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.as_str()));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Text => subscriber.init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli.verbosity, cli.log_format);

    match cli.command {
        Commands::Init => cmd_init(),
        Commands::New { name, format } => cmd_new(name, format),
        Commands::Sql { backend } => cmd_sql(backend),
        Commands::Show { table } => cmd_show(table),
        Commands::Schema { out } => cmd_schema(out),
    }
}
