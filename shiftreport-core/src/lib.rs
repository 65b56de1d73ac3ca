//! Core types and pipeline for shiftreport.
//!
//! This crate holds everything the CLI needs to turn calendar export files
//! into weekend shift records:
//! - `record` — the ShiftRecord entity and its weekday label
//! - `ics` — tolerant VEVENT block scanning
//! - `extract` — filtering, date range resolution and weekend expansion
//! - `config` — where the export files live

pub mod config;
pub mod error;
pub mod extract;
pub mod ics;
pub mod record;
pub mod source;

pub use config::ShiftReportConfig;
pub use error::{ShiftReportError, ShiftReportResult};
pub use extract::{Extraction, ResolvedExport, extract_records, resolve_export};
pub use record::{ShiftRecord, WeekendDay};
pub use source::{SOURCES, ShiftSource};
