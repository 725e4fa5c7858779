use pretty_assertions::assert_eq;
use rig_planner::engine::BuildStore;
use rig_planner::export::{export_csv, export_json};
use rig_planner::model::{category, Product, Specs};

fn part(id: &str, name: &str, cat: &str, price: u64, wattage: u32) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        brand: String::new(),
        category: cat.to_string(),
        price,
        image: None,
        specs: Specs {
            wattage: Some(wattage),
            ..Specs::default()
        },
    }
}

fn sample_store() -> BuildStore {
    let mut store = BuildStore::new();
    store.add_part(
        category::PROCESSORS,
        &part("cpu-1", "Ryzen 5 7600", category::PROCESSORS, 1100, 65),
    );
    store.add_part(
        category::MEMORY,
        &part("ram-1", "Fury Beast", category::MEMORY, 300, 5),
    );
    store.add_part(
        category::MEMORY,
        &part("ram-1", "Fury Beast", category::MEMORY, 300, 5),
    );
    store
}

#[test]
fn json_quote_carries_lines_and_totals() {
    let store = sample_store();
    let path = std::env::temp_dir().join("rig-planner-quote-test.json");
    export_json(&store, &path).unwrap();

    let doc: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(doc["total_price"], serde_json::json!(1700));
    assert_eq!(doc["estimated_wattage"], serde_json::json!(75));
    assert_eq!(doc["compatibility_issues"], serde_json::json!([]));

    let lines = doc["lines"].as_array().unwrap();
    assert_eq!(lines.len(), 2);
    let ram = lines
        .iter()
        .find(|l| l["id"] == serde_json::json!("ram-1"))
        .unwrap();
    assert_eq!(ram["quantity"], serde_json::json!(2));
    assert_eq!(ram["line_total"], serde_json::json!(600));
}

#[test]
fn csv_quote_has_header_lines_and_total_row() {
    let store = sample_store();
    let path = std::env::temp_dir().join("rig-planner-quote-test.csv");
    export_csv(&store, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let rows: Vec<&str> = content.lines().collect();
    assert_eq!(rows[0], "Category,Id,Name,Unit Price,Quantity,Line Total");
    assert_eq!(rows.len(), 4); // header + 2 lines + total row
    assert!(rows[1].starts_with("memory,ram-1,Fury Beast,300,2,600"));
    assert_eq!(rows[3], "Total,,,,,1700");
}
