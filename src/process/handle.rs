//! Safe process handle wrapper with RAII semantics

use super::{ProcessInspector, ProcessQuery};
use crate::core::types::{FileBlameError, FileBlameResult, FileTime, ProcessId};
use crate::windows::bindings::kernel32;
use crate::windows::types::Handle;
use std::fmt;

/// Access rights for process handles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessAccess {
    value: u32,
}

impl ProcessAccess {
    /// Limited query access, granted to more callers than full query access
    pub const QUERY_LIMITED_INFORMATION: Self = Self { value: 0x1000 };

    /// Get raw value
    pub fn value(&self) -> u32 {
        self.value
    }
}

/// Safe wrapper around a Windows process handle
pub struct ProcessHandle {
    handle: Handle,
    pid: ProcessId,
    access: ProcessAccess,
}

impl ProcessHandle {
    /// Open a process with specified access rights
    pub fn open(pid: ProcessId, access: ProcessAccess) -> FileBlameResult<Self> {
        let raw_handle = kernel32::open_process(pid, access.value())?;
        Ok(ProcessHandle {
            handle: Handle::new(raw_handle),
            pid,
            access,
        })
    }

    /// Open a process for limited queries
    pub fn open_limited(pid: ProcessId) -> FileBlameResult<Self> {
        Self::open(pid, ProcessAccess::QUERY_LIMITED_INFORMATION)
    }

    pub fn is_valid(&self) -> bool {
        !self.handle.is_null()
    }

    fn ensure_valid(&self) -> FileBlameResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(FileBlameError::query_failed(self.pid, "Process handle is null"))
        }
    }
}

impl ProcessQuery for ProcessHandle {
    fn pid(&self) -> ProcessId {
        self.pid
    }

    fn creation_time(&self) -> FileBlameResult<FileTime> {
        self.ensure_valid()?;
        unsafe { kernel32::process_creation_time(self.handle.raw()) }
    }

    fn image_path(&self) -> FileBlameResult<String> {
        self.ensure_valid()?;
        unsafe { kernel32::query_full_process_image_name(self.handle.raw()) }
    }
}

impl fmt::Debug for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessHandle")
            .field("pid", &self.pid)
            .field("valid", &self.is_valid())
            .field("access", &format!("0x{:X}", self.access.value()))
            .finish()
    }
}

/// Opens live processes on this machine
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessInspector;

impl ProcessInspector for SystemProcessInspector {
    type Process = ProcessHandle;

    fn open_limited(&self, pid: ProcessId) -> FileBlameResult<ProcessHandle> {
        ProcessHandle::open_limited(pid)
    }
}
