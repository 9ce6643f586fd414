//! Core type definitions for fileblame
//!
//! Win32 result codes, process records as the Restart Manager reports
//! them, FILETIME timestamps and the crate error type.

mod error;
mod error_code;
mod file_time;
mod process_record;

pub use error::{FileBlameError, FileBlameResult};
pub use error_code::ErrorCode;
pub use file_time::FileTime;
pub use process_record::{AppType, ProcessRecord};

pub type ProcessId = u32;
