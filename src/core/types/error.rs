//! Custom error types for fileblame

use super::{ErrorCode, ProcessId};
use thiserror::Error;

/// Main error type for Restart Manager and process operations
#[derive(Error, Debug)]
pub enum FileBlameError {
    #[error("Restart Manager session could not be started: {}", .0.describe())]
    SessionStart(ErrorCode),

    #[error("Failed to register {path}: {}", .code.describe())]
    RegisterResource { path: String, code: ErrorCode },

    #[error("Failed to list processes: {}", .0.describe())]
    GetList(ErrorCode),

    #[error("Failed to open process {pid}: {}", .code.describe())]
    OpenProcess { pid: ProcessId, code: ErrorCode },

    #[error("Failed to query process {pid}: {reason}")]
    QueryProcess { pid: ProcessId, reason: String },

    #[error("Platform not supported: {0}")]
    UnsupportedPlatform(String),

    #[error("Windows API error {code}: {message}")]
    WindowsApi { code: ErrorCode, message: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for fileblame operations
pub type FileBlameResult<T> = Result<T, FileBlameError>;

/// HRESULT facility for wrapped Win32 error codes
#[cfg(windows)]
const FACILITY_WIN32: u32 = 7;

#[cfg(windows)]
impl From<::windows::core::Error> for FileBlameError {
    fn from(e: ::windows::core::Error) -> Self {
        let hresult = e.code().0 as u32;
        let raw = if (hresult >> 16) & 0x1FFF == FACILITY_WIN32 {
            hresult & 0xFFFF
        } else {
            hresult
        };
        FileBlameError::WindowsApi {
            code: ErrorCode::from(raw),
            message: e.message().to_string().trim_end().to_string(),
        }
    }
}

impl FileBlameError {
    /// Creates a process query error
    pub fn query_failed(pid: ProcessId, reason: impl Into<String>) -> Self {
        FileBlameError::QueryProcess {
            pid,
            reason: reason.into(),
        }
    }
}
