use clap::{Parser, Subcommand};

use akura_cli::commands::{config_ops, convert_ops, simulate_ops, table_ops};

#[derive(Parser)]
#[command(name = "akuratool", about = "Akura transliteration diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert Singlish text to Sinhala
    Convert {
        /// Text to convert; reads stdin line by line when omitted
        text: Vec<String>,
    },
    /// Replay an input key by key and show each edit
    Trace {
        /// Singlish input
        text: String,
        /// Print the token stream instead of keystroke edits
        #[arg(long)]
        tokens: bool,
    },
    /// Inspect the transliteration table
    Table {
        #[command(subcommand)]
        action: TableAction,
    },
    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Drive a live session from stdin
    Simulate,
}

#[derive(Subcommand)]
enum TableAction {
    /// Print every record in match order
    Dump,
    /// Show record counts by tier and category
    Stats,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Export default settings as TOML
    Export,
    /// Validate a custom settings TOML file
    Validate {
        /// Path to the TOML file
        file: String,
    },
}

#[cfg(feature = "trace")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("akura_core=debug,akura_session=debug")
            }),
        )
        .init();
}

#[cfg(not(feature = "trace"))]
fn init_tracing() {}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { text } => convert_ops::convert_cmd(&text),
        Command::Trace { text, tokens } => convert_ops::trace_cmd(&text, tokens),
        Command::Table { action } => match action {
            TableAction::Dump => table_ops::dump_cmd(),
            TableAction::Stats => table_ops::stats_cmd(),
        },
        Command::Config { action } => match action {
            ConfigAction::Export => config_ops::settings_export(),
            ConfigAction::Validate { file } => config_ops::settings_validate(&file),
        },
        Command::Simulate => simulate_ops::simulate_cmd(),
    }
}
