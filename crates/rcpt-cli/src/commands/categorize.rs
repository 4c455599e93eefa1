//! Categorize command - assign categories to item names.

use clap::Args;
use console::style;
use serde::Serialize;

use rcpt_core::{CategoryLabel, CategoryMatch};

use super::load_config;

/// Arguments for the categorize command.
#[derive(Args)]
pub struct CategorizeArgs {
    /// Item names to categorize
    #[arg(required_unless_present = "list")]
    names: Vec<String>,

    /// Show which matching stage decided each category
    #[arg(long)]
    explain: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// List all categories and exit
    #[arg(long, conflicts_with_all = ["names", "explain"])]
    list: bool,
}

#[derive(Serialize)]
struct NamedMatch<'a> {
    name: &'a str,
    #[serde(flatten)]
    result: CategoryMatch,
}

pub async fn run(args: CategorizeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let categorizer = config.build_categorizer()?;

    if args.list {
        let catalog = categorizer.snapshot();
        for category in categorizer.categories() {
            let keywords = catalog.keywords(category).len();
            println!("{:<14} {} keywords", category.as_str(), keywords);
        }
        return Ok(());
    }

    let matches: Vec<NamedMatch> = args
        .names
        .iter()
        .map(|name| NamedMatch {
            name,
            result: categorizer.classify(name),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
        return Ok(());
    }

    for m in &matches {
        let label = if m.result.category == CategoryLabel::Other {
            style(m.result.category.as_str()).yellow()
        } else {
            style(m.result.category.as_str()).green()
        };

        if args.explain {
            let detail = match (&m.result.keyword, m.result.score) {
                (Some(keyword), Some(score)) => {
                    format!(" ({:?} via {:?}, {})", m.result.stage, keyword, score)
                }
                _ => format!(" ({:?})", m.result.stage),
            };
            println!("{}: {}{}", m.name, label, detail);
        } else {
            println!("{}: {}", m.name, label);
        }
    }

    Ok(())
}
