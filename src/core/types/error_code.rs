//! Win32 result codes returned by the Restart Manager and process APIs

use std::fmt;

/// Win32 error codes the Restart Manager and process queries hand back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ErrorCode {
    #[default]
    Success,
    FileNotFound,
    AccessDenied,
    InvalidHandle,
    OutOfMemory,
    InvalidParameter,
    SemTimeout,
    BadArguments,
    MoreData,
    MaxSessionsReached,
    Cancelled,
    Timeout,
    Unknown(u32),
}

impl From<u32> for ErrorCode {
    fn from(code: u32) -> Self {
        match code {
            0 => ErrorCode::Success,
            2 => ErrorCode::FileNotFound,
            5 => ErrorCode::AccessDenied,
            6 => ErrorCode::InvalidHandle,
            14 => ErrorCode::OutOfMemory,
            87 => ErrorCode::InvalidParameter,
            121 => ErrorCode::SemTimeout,
            160 => ErrorCode::BadArguments,
            234 => ErrorCode::MoreData,
            353 => ErrorCode::MaxSessionsReached,
            1223 => ErrorCode::Cancelled,
            1460 => ErrorCode::Timeout,
            _ => ErrorCode::Unknown(code),
        }
    }
}

impl ErrorCode {
    /// Raw numeric value as the API returned it
    pub fn raw(self) -> u32 {
        match self {
            ErrorCode::Success => 0,
            ErrorCode::FileNotFound => 2,
            ErrorCode::AccessDenied => 5,
            ErrorCode::InvalidHandle => 6,
            ErrorCode::OutOfMemory => 14,
            ErrorCode::InvalidParameter => 87,
            ErrorCode::SemTimeout => 121,
            ErrorCode::BadArguments => 160,
            ErrorCode::MoreData => 234,
            ErrorCode::MaxSessionsReached => 353,
            ErrorCode::Cancelled => 1223,
            ErrorCode::Timeout => 1460,
            ErrorCode::Unknown(code) => code,
        }
    }

    pub fn is_success(self) -> bool {
        self == ErrorCode::Success
    }

    /// Short human-readable name for logs
    pub fn describe(self) -> String {
        match self {
            ErrorCode::Success => "Success".to_string(),
            ErrorCode::FileNotFound => "File not found".to_string(),
            ErrorCode::AccessDenied => "Access denied".to_string(),
            ErrorCode::InvalidHandle => "Invalid handle".to_string(),
            ErrorCode::OutOfMemory => "Out of memory".to_string(),
            ErrorCode::InvalidParameter => "Invalid parameter".to_string(),
            ErrorCode::SemTimeout => "Semaphore timeout".to_string(),
            ErrorCode::BadArguments => "Bad arguments".to_string(),
            ErrorCode::MoreData => "More data is available".to_string(),
            ErrorCode::MaxSessionsReached => "Maximum sessions reached".to_string(),
            ErrorCode::Cancelled => "Cancelled".to_string(),
            ErrorCode::Timeout => "Timeout".to_string(),
            ErrorCode::Unknown(code) => format!("Unknown error: {}", code),
        }
    }
}

/// Report lines show the bare number, the way the Win32 API returned it
impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}
