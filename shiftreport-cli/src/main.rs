mod render;
mod report;

use anyhow::Result;
use clap::Parser;
use shiftreport_core::ShiftReportConfig;

/// Extract weekend-shift assignments from the analyst calendar exports
/// and print a sorted report.
///
/// Takes no arguments: the source files and the January/February window
/// are fixed. Only the export directories are configurable, via
/// ~/.config/shiftreport/config.toml.
#[derive(Parser)]
#[command(name = "shiftreport", version)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    // A broken config never aborts the run; the built-in directories
    // are used instead.
    let config = match ShiftReportConfig::load() {
        Ok(config) => config,
        Err(e) => {
            render::debug(&format!("Config unavailable ({e}), using defaults"));
            ShiftReportConfig::default()
        }
    };

    println!("Starting analysis...");

    let records = report::collect(&config);
    render::print_table(&records);

    Ok(())
}
