mod export;
mod parser;
mod record;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::warn;

use record::CatalogSummary;

#[derive(Parser)]
#[command(name = "beauty_catalog", about = "Beauty product catalog extractor")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a catalog file and print the extracted products
    Extract {
        /// Catalog text file
        file: PathBuf,
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
        /// Also write the records to a date-stamped JSON file in DIR
        #[arg(long, value_name = "DIR")]
        json: Option<PathBuf>,
    },
    /// Show extraction statistics for a catalog file
    Stats {
        /// Catalog text file
        file: PathBuf,
    },
    /// Print the first lines of a catalog file as they will be read
    Preview {
        /// Catalog text file
        file: PathBuf,
        /// Max lines to display
        #[arg(short = 'n', long, default_value = "20")]
        lines: usize,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            file,
            category,
            limit,
            json,
        } => {
            let text = read_catalog(&file)?;
            let summary = parser::parse_catalog(&text);
            print_records(&summary, category.as_deref(), limit);
            for failure in &summary.failures {
                warn!("{failure}");
            }
            println!();
            print_stats(&summary);
            if let Some(dir) = json {
                let path = export::write_records(&summary.records, &dir)?;
                println!("Exported to {}", path.display());
            }
            Ok(())
        }
        Commands::Stats { file } => {
            let text = read_catalog(&file)?;
            let summary = parser::parse_catalog(&text);
            print_stats(&summary);
            let mut categories: Vec<_> = summary.categories.iter().collect();
            categories.sort();
            for c in categories {
                println!("  - {c}");
            }
            Ok(())
        }
        Commands::Preview { file, lines } => {
            let text = read_catalog(&file)?;
            for (i, line) in text.lines().take(lines).enumerate() {
                println!("{:>4} | {}", i + 1, line);
            }
            Ok(())
        }
    }
}

fn read_catalog(file: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("cannot read {}", file.display()))
}

fn print_records(summary: &CatalogSummary, category: Option<&str>, limit: usize) {
    let rows: Vec<_> = summary
        .records
        .iter()
        .filter(|r| category.map_or(true, |c| r.category.eq_ignore_ascii_case(c)))
        .take(limit)
        .collect();

    if rows.is_empty() {
        println!("No products extracted.");
        return;
    }

    // Compact, readable table
    println!(
        "{:>3} | {:<16} | {:<16} | {:<28} | {:<20} | {:>7} | {:>8}",
        "#", "Category", "Brand", "Product", "Characteristics", "Volume", "Price"
    );
    println!("{}", "-".repeat(116));

    for (i, r) in rows.iter().enumerate() {
        println!(
            "{:>3} | {:<16} | {:<16} | {:<28} | {:<20} | {:>7} | {:>8}",
            i + 1,
            truncate(&r.category, 16),
            truncate(&r.brand, 16),
            truncate(&r.product_name, 28),
            truncate(&r.characteristics, 20),
            r.volume,
            r.price
        );
    }
}

fn print_stats(summary: &CatalogSummary) {
    println!("Products:   {}", summary.total_records);
    println!("Parsed OK:  {}", summary.success_count);
    println!("Categories: {}", summary.categories.len());
    println!("Failures:   {}", summary.failures.len());
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
