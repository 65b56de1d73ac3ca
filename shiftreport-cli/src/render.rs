//! Terminal rendering for the shift report.

use owo_colors::OwoColorize;
use shiftreport_core::ShiftRecord;

/// Print a dimmed diagnostic line.
pub fn debug(msg: &str) {
    println!("{}", format!("[debug] {msg}").dimmed());
}

/// Print the report table. Header and separator always print, even with
/// zero records.
pub fn print_table(records: &[ShiftRecord]) {
    println!();
    println!("{}", "Date       | Day | Shift | Name".bold());
    println!("-----------|-----|-------|------");

    for record in records {
        println!("{}", format_row(record));
    }
}

/// One table row: ISO date, weekday label, fixed-width shift tag, name.
fn format_row(record: &ShiftRecord) -> String {
    format!(
        "{} | {} | {:<5} | {}",
        record.date, record.day, record.shift, record.name
    )
}
