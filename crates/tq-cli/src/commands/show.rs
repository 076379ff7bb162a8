use std::path::Path;

use colored::Colorize;
use tq_engine::{Branch, parse_file, resolve};

pub fn run(root: &Path, scenario: &str, branch: &str) -> Result<(), String> {
    let branch = Branch::parse(branch).map_err(|e| e.to_string())?;
    let path = resolve(root, scenario, &branch).map_err(|e| e.to_string())?;
    let content = parse_file(&path).map_err(|e| e.to_string())?;

    println!("  {} [{}]", scenario.bold(), branch.file_stem().dimmed());
    println!();
    print!("{}", content.render());

    if content.is_terminal() {
        println!("{}", "(ending: no choices)".dimmed());
    }

    Ok(())
}
