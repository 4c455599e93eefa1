//! CLI application for grocery receipt parsing and categorization.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, categorize, config, process, suggest};

/// Grocery receipt parser - Turn OCR receipt text into categorized items
#[derive(Parser)]
#[command(name = "rcpt")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and categorize a single OCR text file
    Process(process::ProcessArgs),

    /// Parse and categorize multiple OCR text files
    Batch(batch::BatchArgs),

    /// Categorize item names
    Categorize(categorize::CategorizeArgs),

    /// Suggest categories for an item name
    Suggest(suggest::SuggestArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // Logs go to stderr so stdout stays machine-readable
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Process(args) => process::run(args, config_path).await,
        Commands::Batch(args) => batch::run(args, config_path).await,
        Commands::Categorize(args) => categorize::run(args, config_path).await,
        Commands::Suggest(args) => suggest::run(args, config_path).await,
        Commands::Config(args) => config::run(args, config_path).await,
    }
}
