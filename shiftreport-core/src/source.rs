//! The fixed set of calendar export sources.

/// One export file and the shift tag stamped onto its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftSource {
    pub file_name: &'static str,
    pub tag: &'static str,
}

/// The two analyst rosters, in report order.
pub const SOURCES: [ShiftSource; 2] = [
    ShiftSource {
        file_name: "AMR AM Analysts.ics",
        tag: "AM",
    },
    ShiftSource {
        file_name: "AMR PM Analysts.ics",
        tag: "PM",
    },
];
