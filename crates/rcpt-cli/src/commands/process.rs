//! Process command - parse and categorize a single OCR text file.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tokio::io::AsyncReadExt;
use tracing::{debug, info, warn};

use rcpt_core::{Categorizer, ExtractionError, ExtractionResult, LineParser, ReceiptParser};

use super::load_config;
use super::output::{format_receipt, OutputFormat};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input text file produced by OCR ("-" reads stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Leave the store header out of the output
    #[arg(long)]
    no_store: bool,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;
    let parser = config.build_parser();
    let categorizer = config.build_categorizer()?;

    let text = read_input(&args.input).await?;
    info!("Processing {} ({} bytes)", args.input.display(), text.len());

    let result = process_text(&text, &parser, &categorizer)?;

    for warning in &result.warnings {
        warn!("{}", warning);
    }

    let output = format_receipt(&result.receipt, &result.warnings, args.format, !args.no_store)?;

    if let Some(output_path) = &args.output {
        tokio::fs::write(output_path, &output).await?;
        println!(
            "{} {} items written to {}",
            style("✓").green(),
            result.receipt.items.len(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Parse receipt text and categorize every item.
pub fn process_text(
    text: &str,
    parser: &LineParser,
    categorizer: &Categorizer,
) -> anyhow::Result<ExtractionResult> {
    let mut result = match parser.parse(text) {
        Ok(result) => result,
        Err(ExtractionError::EmptyInput) => anyhow::bail!("No text to process"),
        Err(ExtractionError::NoItems) => anyhow::bail!(
            "Could not identify any items in the receipt. Please try a clearer scan."
        ),
    };

    categorizer.categorize_receipt(&mut result.receipt);
    Ok(result)
}

async fn read_input(input: &Path) -> anyhow::Result<String> {
    if input.as_os_str() == "-" {
        let mut text = String::new();
        tokio::io::stdin().read_to_string(&mut text).await?;
        return Ok(text);
    }

    if !input.exists() {
        anyhow::bail!("Input file not found: {}", input.display());
    }

    Ok(tokio::fs::read_to_string(input).await?)
}
