//! Single-indicator commands: list, summarize, describe.

use crate::setup::{load_descriptions, open_catalog};
use crate::DataArgs;
use decode_data::summarize;
use decode_render::report::summary_lines;
use std::path::Path;

pub fn run_list(data: &DataArgs) -> anyhow::Result<()> {
    let catalog = open_catalog(data)?;
    for name in catalog.list_indicators()? {
        println!("{}", name);
    }
    Ok(())
}

/// Per-indicator failures print as messages; only startup errors fail the command.
pub fn run_summarize(data: &DataArgs, indicator: &str) -> anyhow::Result<()> {
    let catalog = open_catalog(data)?;
    println!("Indicator: {}", indicator);
    match catalog.load(indicator).and_then(|ds| summarize(&ds)) {
        Ok(summary) => {
            for line in summary_lines(&summary) {
                println!("{}", line);
            }
        }
        Err(e) => println!("{}", e),
    }
    Ok(())
}

pub fn run_describe(descriptions: &Path, indicator: &str) -> anyhow::Result<()> {
    let table = load_descriptions(descriptions)?;
    match table.require(indicator) {
        Ok(d) => {
            println!("Indicator: {}", indicator);
            println!("Definition: {}", d.definition);
            println!("Insight: {}", d.insight);
        }
        Err(e) => println!("{}", e),
    }
    Ok(())
}
