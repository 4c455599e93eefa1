//! Suggest command - list likely categories for an item name.

use clap::Args;
use console::style;

use super::load_config;

/// Arguments for the suggest command.
#[derive(Args)]
pub struct SuggestArgs {
    /// Item name
    #[arg(required = true)]
    name: String,

    /// Minimum similarity (0-100), defaults to the configured threshold
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(0..=100))]
    threshold: Option<u8>,

    /// Print suggestions as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run(args: SuggestArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let categorizer = config.build_categorizer()?;

    let suggestions = match args.threshold {
        Some(threshold) => categorizer.suggest_categories_above(&args.name, threshold),
        None => categorizer.suggest_categories(&args.name),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("{} No suggestions for {:?}", style("ℹ").blue(), args.name);
        return Ok(());
    }

    for suggestion in &suggestions {
        println!(
            "{:>3}  {:<14} {}",
            suggestion.score,
            style(suggestion.category.as_str()).green(),
            suggestion.keyword
        );
    }

    Ok(())
}
