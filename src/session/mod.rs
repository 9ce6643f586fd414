//! Restart Manager sessions
//!
//! A tracking session is opened, one file is registered with it and the
//! service is asked which processes are using that file. The traits here
//! are the boundary to the operating system; the Windows implementation
//! lives in [`rm`].

pub mod list;
#[cfg(windows)]
pub mod rm;

pub use list::{fetch_list, ListOutcome, ListPolicy, TruncationPolicy};
#[cfg(windows)]
pub use rm::{RestartManager, RmSession};

use crate::core::types::{ErrorCode, ProcessRecord};
use std::ffi::OsStr;

/// Default number of record slots handed to the service
pub const DEFAULT_LIST_CAPACITY: usize = 10;

/// Largest record buffer handed to the service
pub const MAX_LIST_CAPACITY: usize = 1024;

/// What a single listing call produced
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawList {
    pub code: ErrorCode,
    /// Number of records needed to hold the complete set
    pub needed: usize,
    /// Records the service wrote into the buffer
    pub records: Vec<ProcessRecord>,
    pub reboot_reasons: u32,
}

/// Opens tracking sessions
pub trait ResourceTracker {
    type Session: TrackingSession;

    /// Start a session. The error is the code the service returned.
    fn start_session(&self) -> Result<Self::Session, ErrorCode>;
}

/// An open tracking session. Dropping it ends the session.
pub trait TrackingSession {
    fn session_key(&self) -> &str;

    /// Register one file path, passed through without normalisation
    fn register_file(&mut self, path: &OsStr) -> ErrorCode;

    /// List processes using the registered resources into `capacity` slots
    fn get_list(&mut self, capacity: usize) -> RawList;
}
