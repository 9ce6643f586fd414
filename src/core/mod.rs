//! Core module containing fundamental types for fileblame

pub mod types;

pub use types::{AppType, ErrorCode, FileBlameError, FileBlameResult, FileTime, ProcessRecord};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
