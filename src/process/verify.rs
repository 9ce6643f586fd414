//! Guarding against process id reuse
//!
//! A pid reported by the Restart Manager may have been recycled by the
//! time it is opened. The creation time of the freshly opened process
//! must equal the start time in the record before anything about the
//! process is trusted.

use super::{ProcessInspector, ProcessQuery};
use crate::core::types::{FileBlameError, FileTime, ProcessRecord};
use std::fmt;
use tracing::debug;

/// Outcome of matching a live process against a reported record
#[derive(Debug)]
pub enum Verification<P> {
    /// Same process that was listed; the open handle is handed back
    Verified(P),
    /// The pid now belongs to a different process
    StaleId { expected: FileTime, actual: FileTime },
    /// The process could not be opened or its creation time read
    HandleUnavailable(FileBlameError),
}

/// [`Verification`] without the handle, kept in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStatus {
    Verified,
    StaleId,
    HandleUnavailable,
}

impl<P> Verification<P> {
    pub fn status(&self) -> VerificationStatus {
        match self {
            Verification::Verified(_) => VerificationStatus::Verified,
            Verification::StaleId { .. } => VerificationStatus::StaleId,
            Verification::HandleUnavailable(_) => VerificationStatus::HandleUnavailable,
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationStatus::Verified => write!(f, "verified"),
            VerificationStatus::StaleId => write!(f, "stale id"),
            VerificationStatus::HandleUnavailable => write!(f, "handle unavailable"),
        }
    }
}

/// Open the process named by `record` and check it is the one listed
pub fn verify<I: ProcessInspector>(inspector: &I, record: &ProcessRecord) -> Verification<I::Process> {
    let process = match inspector.open_limited(record.pid) {
        Ok(process) => process,
        Err(e) => return Verification::HandleUnavailable(e),
    };

    let actual = match process.creation_time() {
        Ok(time) => time,
        Err(e) => return Verification::HandleUnavailable(e),
    };

    if actual != record.start_time {
        return Verification::StaleId {
            expected: record.start_time,
            actual,
        };
    }

    Verification::Verified(process)
}

/// Verified image path lookup for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub status: VerificationStatus,
    pub image_path: Option<String>,
}

/// Verify `record` and, only if verified, resolve its executable path.
///
/// Every failure is absorbed; the process handle is closed before return.
pub fn resolve_image_path<I: ProcessInspector>(inspector: &I, record: &ProcessRecord) -> Resolution {
    let verification = verify(inspector, record);
    let status = verification.status();

    let image_path = match verification {
        Verification::Verified(process) => match process.image_path() {
            Ok(path) => Some(path),
            Err(e) => {
                debug!(pid = record.pid, error = %e, "Image path not resolvable");
                None
            }
        },
        Verification::StaleId { expected, actual } => {
            debug!(
                pid = record.pid,
                expected = expected.ticks(),
                actual = actual.ticks(),
                "Process id was reused, skipping"
            );
            None
        }
        Verification::HandleUnavailable(e) => {
            debug!(pid = record.pid, error = %e, "Process not accessible, skipping");
            None
        }
    };

    Resolution { status, image_path }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{AppType, ErrorCode, FileBlameResult, ProcessId};
    use std::cell::Cell;
    use std::collections::HashMap;

    struct FakeProcess {
        pid: ProcessId,
        created: Option<FileTime>,
        path: Option<String>,
    }

    impl ProcessQuery for FakeProcess {
        fn pid(&self) -> ProcessId {
            self.pid
        }

        fn creation_time(&self) -> FileBlameResult<FileTime> {
            self.created
                .ok_or_else(|| FileBlameError::query_failed(self.pid, "no times"))
        }

        fn image_path(&self) -> FileBlameResult<String> {
            self.path
                .clone()
                .ok_or_else(|| FileBlameError::query_failed(self.pid, "no path"))
        }
    }

    #[derive(Default)]
    struct FakeInspector {
        live: HashMap<ProcessId, (Option<FileTime>, Option<String>)>,
        opened: Cell<usize>,
    }

    impl ProcessInspector for FakeInspector {
        type Process = FakeProcess;

        fn open_limited(&self, pid: ProcessId) -> FileBlameResult<FakeProcess> {
            let (created, path) = self.live.get(&pid).cloned().ok_or(FileBlameError::OpenProcess {
                pid,
                code: ErrorCode::InvalidParameter,
            })?;
            self.opened.set(self.opened.get() + 1);
            Ok(FakeProcess { pid, created, path })
        }
    }

    fn record(pid: ProcessId, start: u64) -> ProcessRecord {
        ProcessRecord::new(AppType::MainWindow, "app", pid, FileTime::new(start))
    }

    #[test]
    fn test_verified_resolves_path() {
        let mut inspector = FakeInspector::default();
        inspector
            .live
            .insert(10, (Some(FileTime::new(500)), Some("C:\\app.exe".to_string())));

        let resolution = resolve_image_path(&inspector, &record(10, 500));
        assert_eq!(resolution.status, VerificationStatus::Verified);
        assert_eq!(resolution.image_path.as_deref(), Some("C:\\app.exe"));
    }

    #[test]
    fn test_stale_id_hides_path() {
        let mut inspector = FakeInspector::default();
        inspector
            .live
            .insert(10, (Some(FileTime::new(900)), Some("C:\\other.exe".to_string())));

        match verify(&inspector, &record(10, 500)) {
            Verification::StaleId { expected, actual } => {
                assert_eq!(expected, FileTime::new(500));
                assert_eq!(actual, FileTime::new(900));
            }
            other => panic!("Expected StaleId, got {:?}", other.status()),
        }

        let resolution = resolve_image_path(&inspector, &record(10, 500));
        assert_eq!(resolution.status, VerificationStatus::StaleId);
        assert_eq!(resolution.image_path, None);
    }

    #[test]
    fn test_exited_process_is_unavailable() {
        let inspector = FakeInspector::default();
        let resolution = resolve_image_path(&inspector, &record(10, 500));
        assert_eq!(resolution.status, VerificationStatus::HandleUnavailable);
        assert_eq!(resolution.image_path, None);
        assert_eq!(inspector.opened.get(), 0);
    }

    #[test]
    fn test_unreadable_times_are_unavailable() {
        let mut inspector = FakeInspector::default();
        inspector.live.insert(10, (None, Some("C:\\app.exe".to_string())));
        let resolution = resolve_image_path(&inspector, &record(10, 500));
        assert_eq!(resolution.status, VerificationStatus::HandleUnavailable);
        assert_eq!(resolution.image_path, None);
    }

    #[test]
    fn test_verified_without_path() {
        let mut inspector = FakeInspector::default();
        inspector.live.insert(10, (Some(FileTime::new(500)), None));
        let resolution = resolve_image_path(&inspector, &record(10, 500));
        assert_eq!(resolution.status, VerificationStatus::Verified);
        assert_eq!(resolution.image_path, None);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(VerificationStatus::StaleId.to_string(), "stale id");
        assert_eq!(VerificationStatus::HandleUnavailable.to_string(), "handle unavailable");
    }
}
