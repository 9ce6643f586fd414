//! Process inspection for reported records
//!
//! Opening a process with limited query rights, reading its creation
//! time and resolving its executable path. The platform implementation
//! lives in [`handle`].

#[cfg(windows)]
pub mod handle;
pub mod verify;

#[cfg(windows)]
pub use handle::{ProcessAccess, ProcessHandle, SystemProcessInspector};
pub use verify::{resolve_image_path, verify, Resolution, Verification, VerificationStatus};

use crate::core::types::{FileBlameResult, FileTime, ProcessId};

/// Opens processes by id for querying
pub trait ProcessInspector {
    type Process: ProcessQuery;

    /// Open `pid` requesting only limited query rights
    fn open_limited(&self, pid: ProcessId) -> FileBlameResult<Self::Process>;
}

/// Queries on an open process. Dropping the value closes the handle.
pub trait ProcessQuery {
    fn pid(&self) -> ProcessId;

    fn creation_time(&self) -> FileBlameResult<FileTime>;

    /// Full Win32 path of the process executable
    fn image_path(&self) -> FileBlameResult<String>;
}
