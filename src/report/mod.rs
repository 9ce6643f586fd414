//! The file-usage report
//!
//! One linear pass: open a session, register the file, list the
//! processes using it and print each record, resolving the executable
//! path of every process that still matches what was listed. Result
//! codes are printed after each step. The session is ended on every
//! path once it has been opened.

mod reporter;

pub use reporter::Reporter;

use crate::core::types::{ErrorCode, ProcessRecord};
use crate::process::Resolution;
use crate::session::ListOutcome;

/// Where the pipeline stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    SessionFailed,
    RegistrationFailed,
    ListFailed,
    Completed,
}

/// The listing step as it appears in a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListSummary {
    pub code: ErrorCode,
    pub returned: usize,
    pub needed: usize,
    pub truncated: bool,
    pub attempts: u32,
}

impl From<&ListOutcome> for ListSummary {
    fn from(outcome: &ListOutcome) -> Self {
        ListSummary {
            code: outcome.code,
            returned: outcome.records.len(),
            needed: outcome.needed,
            truncated: outcome.truncated,
            attempts: outcome.attempts,
        }
    }
}

/// One printed record and what was learned about its process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordReport {
    pub index: usize,
    pub record: ProcessRecord,
    pub resolution: Resolution,
}

/// Everything one run found out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub stage: Stage,
    pub start_code: ErrorCode,
    pub register_code: Option<ErrorCode>,
    pub list: Option<ListSummary>,
    pub records: Vec<RecordReport>,
}

impl Report {
    fn new(start_code: ErrorCode) -> Self {
        Report {
            stage: if start_code.is_success() {
                Stage::Completed
            } else {
                Stage::SessionFailed
            },
            start_code,
            register_code: None,
            list: None,
            records: Vec::new(),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.stage == Stage::Completed
    }

    pub fn is_truncated(&self) -> bool {
        self.list.map_or(false, |list| list.truncated)
    }

    /// Process ids of every reported holder
    pub fn pids(&self) -> Vec<u32> {
        self.records.iter().map(|r| r.record.pid).collect()
    }
}
