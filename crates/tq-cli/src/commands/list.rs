use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use tq_engine::branch::{Branch, resolve};
use tq_engine::Catalog;

pub fn run(root: &Path) -> Result<(), String> {
    let catalog = Catalog::discover(root);
    if let Some(warning) = catalog.warning() {
        eprintln!("{}", format!("warning: {warning}").yellow());
    }

    if catalog.is_empty() {
        println!("  No scenarios available.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Scenario", "Entry branch"]);

    for (i, scenario) in catalog.scenarios().iter().enumerate() {
        let entry = match resolve(root, &scenario.name, &Branch::root()) {
            Ok(path) if path.is_file() => "main.txt",
            _ => "missing",
        };
        table.add_row(vec![
            (i + 1).to_string(),
            scenario.display_name().to_string(),
            entry.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} scenario{}",
        catalog.len(),
        if catalog.len() == 1 { "" } else { "s" }
    );

    Ok(())
}
