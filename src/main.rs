use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;

use rig_planner::catalog::Catalog;
use rig_planner::engine::BuildStore;
use rig_planner::export::{export_csv, export_json};
use rig_planner::model::SavedState;

#[derive(Parser, Debug)]
#[command(name = "rig-planner")]
#[command(about = "Rig Planner - price and check a PC build from a product catalog")]
#[command(version)]
struct Args {
    /// Path to the product catalog (JSON array)
    #[arg(required = true)]
    catalog: PathBuf,

    /// Restore a saved build before printing the summary
    #[arg(long, value_name = "FILE")]
    build: Option<PathBuf>,

    /// Export the quote to CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export the quote to JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let catalog = Catalog::load(&args.catalog)?;
    println!("Catalog: {} products", catalog.len());

    let store = match &args.build {
        Some(path) => {
            let content = std::fs::read_to_string(path)?;
            let state: SavedState = serde_json::from_str(&content)?;
            BuildStore::restore(state)
        }
        None => BuildStore::new(),
    };

    print_summary(&store);

    if let Some(csv_path) = &args.csv {
        export_csv(&store, csv_path)?;
        println!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&store, json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    Ok(())
}

fn print_summary(store: &BuildStore) {
    for (cat, items) in store.selected_parts() {
        println!("{cat}:");
        for item in items {
            println!(
                "  {} x{} @ {} = {}",
                item.product.name,
                item.quantity,
                item.product.price,
                item.line_price()
            );
        }
    }

    println!("Total price: {}", store.total_price());
    println!("Estimated draw: {}W", store.estimated_wattage());

    let issues = store.compatibility_issues();
    if issues.is_empty() {
        println!("No compatibility issues.");
    } else {
        println!("Issues:");
        for issue in issues {
            println!("  {issue}");
        }
    }
}
