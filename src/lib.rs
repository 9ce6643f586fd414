//! fileblame: which processes have a file open
//!
//! Asks the Windows Restart Manager which processes are using a file
//! and resolves the executable path of each one that can be verified
//! as the process that was listed.

pub mod config;
pub mod core;
pub mod process;
pub mod report;
pub mod session;
#[cfg(windows)]
pub mod windows;

pub use crate::core::types::{
    AppType, ErrorCode, FileBlameError, FileBlameResult, FileTime, ProcessId, ProcessRecord,
};
pub use crate::report::{Report, Reporter, Stage};
pub use crate::session::{ListPolicy, TruncationPolicy};

use std::ffi::OsStr;
use std::io::Write;

/// Report the processes using `path` on this machine, writing the text
/// report to `out`
#[cfg(windows)]
pub fn report_file_usage<W: Write>(
    path: &OsStr,
    policy: ListPolicy,
    out: &mut W,
) -> FileBlameResult<Report> {
    use crate::process::SystemProcessInspector;
    use crate::session::RestartManager;

    Reporter::new(&RestartManager, &SystemProcessInspector)
        .with_policy(policy)
        .run(path, out)
}

/// The Restart Manager only exists on Windows
#[cfg(not(windows))]
pub fn report_file_usage<W: Write>(
    _path: &OsStr,
    _policy: ListPolicy,
    _out: &mut W,
) -> FileBlameResult<Report> {
    Err(FileBlameError::UnsupportedPlatform(
        std::env::consts::OS.to_string(),
    ))
}
