//! Tolerant VEVENT block scanning for calendar exports.
//!
//! This is deliberately not an RFC 5545 parser: the exports we read are
//! machine-generated with one property per line, so we split on the literal
//! `BEGIN:VEVENT` marker and scan lines for the three properties we care
//! about. Folded lines, timezones and recurrence rules are out of scope.

/// The fields pulled out of one VEVENT segment before any validation.
///
/// All fields are optional at this stage; the extraction pipeline decides
/// which absences make a block unusable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventBlock {
    /// Trimmed SUMMARY value.
    pub summary: Option<String>,
    /// Raw 8-digit DTSTART value (YYYYMMDD), not yet parsed as a date.
    pub start: Option<String>,
    /// Raw 8-digit DTEND value, if present.
    pub end: Option<String>,
}

/// Split raw export text into per-event segments.
///
/// The first split segment holds the VCALENDAR preamble and is discarded.
pub fn split_events(content: &str) -> Vec<&str> {
    content.split("BEGIN:VEVENT").skip(1).collect()
}

/// Scan one event segment for the summary, start and end properties.
///
/// First match wins for each field, matching line order in the export.
pub fn parse_block(segment: &str) -> EventBlock {
    let mut block = EventBlock::default();

    for line in segment.lines() {
        let line = line.trim_end_matches('\r');

        if block.summary.is_none()
            && let Some(rest) = line.strip_prefix("SUMMARY:")
        {
            block.summary = Some(rest.trim().to_string());
        } else if block.start.is_none()
            && let Some(date) = date_property(line, "DTSTART")
        {
            block.start = Some(date);
        } else if block.end.is_none()
            && let Some(date) = date_property(line, "DTEND")
        {
            block.end = Some(date);
        }
    }

    block
}

/// Match `NAME:` or `NAME;VALUE=DATE:` and return the value's leading
/// 8 digits, or None if the line is not that property or too short.
fn date_property(line: &str, name: &str) -> Option<String> {
    let rest = line.strip_prefix(name)?;

    let value = if let Some(v) = rest.strip_prefix(':') {
        v
    } else {
        rest.strip_prefix(";VALUE=DATE:")?
    };

    let digits: String = value.chars().take(8).collect();
    if digits.len() == 8 && digits.chars().all(|c| c.is_ascii_digit()) {
        Some(digits)
    } else {
        None
    }
}
