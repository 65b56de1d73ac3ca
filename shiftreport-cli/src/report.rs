//! Report assembly: run the extractor over both sources and sort.

use shiftreport_core::{
    ResolvedExport, SOURCES, ShiftRecord, ShiftReportConfig, ShiftSource, extract_records,
    resolve_export,
};

use crate::render;

/// Extract records from every configured source and sort them into
/// report order: date first, then shift tag.
pub fn collect(config: &ShiftReportConfig) -> Vec<ShiftRecord> {
    let mut records: Vec<ShiftRecord> = SOURCES
        .iter()
        .flat_map(|source| extract_source(config, source))
        .collect();

    records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    records
}

/// Extract one source file, degrading to an empty list when the file is
/// missing or unreadable.
fn extract_source(config: &ShiftReportConfig, source: &ShiftSource) -> Vec<ShiftRecord> {
    let path = match resolve_export(config, source.file_name) {
        ResolvedExport::Found(path) => path,
        ResolvedExport::Missing { primary, fallback } => {
            render::debug(&format!("File not found: {}", primary.display()));
            render::debug(&format!("Still not found: {}", fallback.display()));
            return Vec::new();
        }
    };

    render::debug(&format!("Reading {}", source.file_name));

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            render::debug(&format!("Error reading {}: {e}", path.display()));
            return Vec::new();
        }
    };

    let extraction = extract_records(&content, source.tag);
    render::debug(&format!("Found {} event blocks", extraction.blocks));
    render::debug(&format!(
        "-> Extracted {} weekend shifts",
        extraction.records.len()
    ));

    extraction.records
}
