//! The extraction pipeline: filter event blocks and expand them into
//! per-day weekend shift records.

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};

use crate::config::ShiftReportConfig;
use crate::ics::{EventBlock, parse_block, split_events};
use crate::record::{ShiftRecord, WeekendDay};

/// The report window is fixed: January and February of this year.
pub const TARGET_YEAR: i32 = 2026;
/// Last month (inclusive) of the window.
pub const LAST_MONTH: u32 = 2;

/// Result of extracting one source file's content.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub records: Vec<ShiftRecord>,
    /// Number of VEVENT segments seen before filtering, for diagnostics.
    pub blocks: usize,
}

/// Outcome of locating a source file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedExport {
    Found(PathBuf),
    /// Neither candidate path exists. Both are reported so the caller
    /// can log where it looked.
    Missing { primary: PathBuf, fallback: PathBuf },
}

/// Locate a source file: primary export dir first, then the fallback dir.
pub fn resolve_export(config: &ShiftReportConfig, file_name: &str) -> ResolvedExport {
    let primary = config.export_path().join(file_name);
    if primary.exists() {
        return ResolvedExport::Found(primary);
    }

    let fallback = config.fallback_path().join(file_name);
    if fallback.exists() {
        return ResolvedExport::Found(fallback);
    }

    ResolvedExport::Missing { primary, fallback }
}

/// Extract weekend shift records from raw export text.
///
/// Every degradation is per-block: a segment missing its summary or start
/// date, carrying an exclusion marker, falling outside the window, or
/// holding an unparseable date contributes nothing and poisons nothing.
pub fn extract_records(content: &str, shift_tag: &str) -> Extraction {
    let segments = split_events(content);
    let blocks = segments.len();

    let records = segments
        .iter()
        .map(|segment| parse_block(segment))
        .filter_map(|block| expand_block(&block, shift_tag))
        .flatten()
        .collect();

    Extraction { records, blocks }
}

/// Turn one parsed block into its weekend records, or None if any filter
/// rejects it.
fn expand_block(block: &EventBlock, shift_tag: &str) -> Option<Vec<ShiftRecord>> {
    let summary = block.summary.as_deref()?;
    let start_raw = block.start.as_deref()?;

    // Out-of-office entries are excluded, as are entries with a '+' in
    // the summary (placeholder / combined-shift markers in the rosters).
    // Both are plain substring tests.
    if summary.contains("OOO") || summary.contains('+') {
        return None;
    }

    let start = parse_ics_date(start_raw)?;

    if start.year() != TARGET_YEAR || start.month() > LAST_MONTH {
        return None;
    }

    let end = effective_end(block, start)?;
    Some(expand_weekends(start, end, summary, shift_tag))
}

/// Parse an 8-digit YYYYMMDD value.
fn parse_ics_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y%m%d").ok()
}

/// Resolve the last day covered by the event.
///
/// DTEND is exclusive by convention, so a present end date means
/// `end - 1 day`; an absent one means a single-day event. A present but
/// unparseable end date rejects the block.
fn effective_end(block: &EventBlock, start: NaiveDate) -> Option<NaiveDate> {
    match block.end.as_deref() {
        Some(raw) => parse_ics_date(raw)?.pred_opt(),
        None => Some(start),
    }
}

/// Walk every day from start to end inclusive and keep the weekend ones.
fn expand_weekends(
    start: NaiveDate,
    end: NaiveDate,
    summary: &str,
    shift_tag: &str,
) -> Vec<ShiftRecord> {
    start
        .iter_days()
        .take_while(|day| *day <= end)
        .filter_map(|date| {
            let day = WeekendDay::from_weekday(date.weekday())?;
            Some(ShiftRecord {
                date,
                day,
                name: summary.to_string(),
                shift: shift_tag.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(body: &str) -> String {
        format!("BEGIN:VCALENDAR\nBEGIN:VEVENT\n{body}\nEND:VEVENT\nEND:VCALENDAR")
    }

    #[test]
    fn block_without_summary_or_start_yields_nothing() {
        let no_summary = event("DTSTART;VALUE=DATE:20260103");
        assert!(extract_records(&no_summary, "AM").records.is_empty());

        let no_start = event("SUMMARY:Alice");
        assert!(extract_records(&no_start, "AM").records.is_empty());
    }

    #[test]
    fn ooo_and_plus_summaries_are_excluded() {
        let ooo = event("SUMMARY:Alice OOO\nDTSTART;VALUE=DATE:20260103");
        assert!(extract_records(&ooo, "AM").records.is_empty());

        let plus = event("SUMMARY:Alice + Bob\nDTSTART;VALUE=DATE:20260103");
        assert!(extract_records(&plus, "AM").records.is_empty());
    }

    #[test]
    fn single_friday_yields_nothing() {
        // 2026-01-02 is a Friday; no end date means a single-day event.
        let ics = event("SUMMARY:Alice\nDTSTART;VALUE=DATE:20260102");
        assert!(extract_records(&ics, "AM").records.is_empty());
    }

    #[test]
    fn multi_day_range_expands_to_weekend_days_only() {
        // Fri Jan 2 through exclusive end Jan 6 covers Jan 2-5:
        // Sat Jan 3 and Sun Jan 4 are the only weekend days.
        let ics = event(
            "SUMMARY:Alice\nDTSTART;VALUE=DATE:20260102\nDTEND;VALUE=DATE:20260106",
        );
        let records = extract_records(&ics, "AM").records;

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].date, NaiveDate::from_ymd_opt(2026, 1, 3).unwrap());
        assert_eq!(records[0].day, WeekendDay::Sat);
        assert_eq!(records[1].date, NaiveDate::from_ymd_opt(2026, 1, 4).unwrap());
        assert_eq!(records[1].day, WeekendDay::Sun);
        assert!(records.iter().all(|r| r.name == "Alice" && r.shift == "AM"));
    }

    #[test]
    fn events_outside_window_yield_nothing() {
        for start in ["20250103", "20270102", "20260307", "20261205"] {
            let ics = event(&format!("SUMMARY:Alice\nDTSTART;VALUE=DATE:{start}"));
            assert!(
                extract_records(&ics, "AM").records.is_empty(),
                "start {start} should be filtered out"
            );
        }
    }

    #[test]
    fn malformed_start_date_skips_only_that_block() {
        let content = format!(
            "{}{}",
            event("SUMMARY:Broken\nDTSTART;VALUE=DATE:20261341"),
            event("SUMMARY:Alice\nDTSTART;VALUE=DATE:20260103"),
        );
        let extraction = extract_records(&content, "PM");

        assert_eq!(extraction.blocks, 2);
        assert_eq!(extraction.records.len(), 1);
        assert_eq!(extraction.records[0].name, "Alice");
    }

    #[test]
    fn malformed_end_date_skips_the_block() {
        let ics = event(
            "SUMMARY:Alice\nDTSTART;VALUE=DATE:20260103\nDTEND;VALUE=DATE:20269901",
        );
        assert!(extract_records(&ics, "AM").records.is_empty());
    }

    #[test]
    fn end_equal_to_start_covers_no_days() {
        // Exclusive DTEND equal to DTSTART is an empty range.
        let ics = event(
            "SUMMARY:Alice\nDTSTART;VALUE=DATE:20260103\nDTEND;VALUE=DATE:20260103",
        );
        assert!(extract_records(&ics, "AM").records.is_empty());
    }

    #[test]
    fn resolve_prefers_primary_then_fallback() {
        let primary = tempfile::tempdir().unwrap();
        let fallback = tempfile::tempdir().unwrap();
        let config = ShiftReportConfig {
            export_dir: primary.path().to_path_buf(),
            fallback_dir: fallback.path().to_path_buf(),
        };

        // Neither path exists yet.
        match resolve_export(&config, "roster.ics") {
            ResolvedExport::Missing { primary, fallback } => {
                assert!(primary.ends_with("roster.ics"));
                assert!(fallback.ends_with("roster.ics"));
            }
            other => panic!("expected Missing, got {other:?}"),
        }

        // Present only in the fallback dir.
        std::fs::write(fallback.path().join("roster.ics"), "").unwrap();
        assert_eq!(
            resolve_export(&config, "roster.ics"),
            ResolvedExport::Found(fallback.path().join("roster.ics"))
        );

        // The primary dir wins once the file shows up there.
        std::fs::write(primary.path().join("roster.ics"), "").unwrap();
        assert_eq!(
            resolve_export(&config, "roster.ics"),
            ResolvedExport::Found(primary.path().join("roster.ics"))
        );
    }

    #[test]
    fn week_long_event_collects_both_weekends() {
        // Mon Jan 5 through exclusive Jan 19 covers Jan 5-18: two full weekends.
        let ics = event(
            "SUMMARY:Carol\nDTSTART;VALUE=DATE:20260105\nDTEND;VALUE=DATE:20260119",
        );
        let records = extract_records(&ics, "PM").records;

        let dates: Vec<String> = records.iter().map(|r| r.date.to_string()).collect();
        assert_eq!(
            dates,
            ["2026-01-10", "2026-01-11", "2026-01-17", "2026-01-18"]
        );
    }
}
