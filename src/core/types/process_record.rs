//! Process records reported by the Restart Manager

use super::{FileTime, ProcessId};
use std::fmt;

/// Restart Manager application classification (`RM_APP_TYPE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppType {
    Unknown,
    MainWindow,
    OtherWindow,
    Service,
    Explorer,
    Console,
    Critical,
    Other(u32),
}

impl From<u32> for AppType {
    fn from(raw: u32) -> Self {
        match raw {
            0 => AppType::Unknown,
            1 => AppType::MainWindow,
            2 => AppType::OtherWindow,
            3 => AppType::Service,
            4 => AppType::Explorer,
            5 => AppType::Console,
            1000 => AppType::Critical,
            _ => AppType::Other(raw),
        }
    }
}

impl AppType {
    /// Raw `RM_APP_TYPE` value
    pub fn raw(self) -> u32 {
        match self {
            AppType::Unknown => 0,
            AppType::MainWindow => 1,
            AppType::OtherWindow => 2,
            AppType::Service => 3,
            AppType::Explorer => 4,
            AppType::Console => 5,
            AppType::Critical => 1000,
            AppType::Other(raw) => raw,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AppType::Unknown => "unknown",
            AppType::MainWindow => "main window",
            AppType::OtherWindow => "other window",
            AppType::Service => "service",
            AppType::Explorer => "explorer",
            AppType::Console => "console",
            AppType::Critical => "critical",
            AppType::Other(_) => "other",
        }
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}

/// One process the Restart Manager reports as using a registered resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub app_type: AppType,
    pub app_name: String,
    pub pid: ProcessId,
    /// Used only to detect pid reuse
    pub start_time: FileTime,
    pub service_short_name: String,
    pub ts_session_id: u32,
    pub restartable: bool,
}

impl ProcessRecord {
    /// Creates a record with the fields the report prints
    pub fn new(
        app_type: AppType,
        app_name: impl Into<String>,
        pid: ProcessId,
        start_time: FileTime,
    ) -> Self {
        ProcessRecord {
            app_type,
            app_name: app_name.into(),
            pid,
            start_time,
            service_short_name: String::new(),
            ts_session_id: 0,
            restartable: false,
        }
    }

    /// Whether the holder is a Windows service
    pub fn is_service(&self) -> bool {
        self.app_type == AppType::Service
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_type_from_raw() {
        assert_eq!(AppType::from(0), AppType::Unknown);
        assert_eq!(AppType::from(3), AppType::Service);
        assert_eq!(AppType::from(1000), AppType::Critical);
        assert_eq!(AppType::from(77), AppType::Other(77));
        assert_eq!(AppType::Other(77).raw(), 77);
    }

    #[test]
    fn test_app_type_display_is_raw() {
        assert_eq!(AppType::Console.to_string(), "5");
        assert_eq!(AppType::Console.name(), "console");
    }

    #[test]
    fn test_record_new() {
        let record = ProcessRecord::new(AppType::Service, "Spooler", 1234, FileTime::new(42));
        assert_eq!(record.pid, 1234);
        assert_eq!(record.app_name, "Spooler");
        assert!(record.is_service());
        assert!(record.service_short_name.is_empty());
        assert!(!record.restartable);
    }
}
