//! Restart Manager backed tracking sessions

use super::{RawList, ResourceTracker, TrackingSession};
use crate::core::types::ErrorCode;
use crate::windows::rstrtmgr::{self, SessionHandle};
use crate::windows::utils::{os_str_to_wide, to_windows_error};
use std::ffi::OsStr;
use std::fmt;
use tracing::{debug, warn};

/// The system Restart Manager
#[derive(Debug, Default, Clone, Copy)]
pub struct RestartManager;

impl ResourceTracker for RestartManager {
    type Session = RmSession;

    fn start_session(&self) -> Result<RmSession, ErrorCode> {
        let (handle, key) = rstrtmgr::start_session()?;
        debug!(session = handle, key = %key, "Restart Manager session started");
        Ok(RmSession { handle, key })
    }
}

/// An open Restart Manager session, ended on drop
pub struct RmSession {
    handle: SessionHandle,
    key: String,
}

impl TrackingSession for RmSession {
    fn session_key(&self) -> &str {
        &self.key
    }

    fn register_file(&mut self, path: &OsStr) -> ErrorCode {
        let wide = os_str_to_wide(path);
        rstrtmgr::register_file(self.handle, &wide)
    }

    fn get_list(&mut self, capacity: usize) -> RawList {
        let list = rstrtmgr::get_list(self.handle, capacity);
        RawList {
            code: list.code,
            needed: list.needed,
            records: list.records,
            reboot_reasons: list.reboot_reasons,
        }
    }
}

impl Drop for RmSession {
    fn drop(&mut self) {
        let code = rstrtmgr::end_session(self.handle);
        if code.is_success() {
            debug!(session = self.handle, "Restart Manager session ended");
        } else {
            warn!(
                session = self.handle,
                error = %to_windows_error(code),
                "RmEndSession failed"
            );
        }
    }
}

impl fmt::Debug for RmSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RmSession")
            .field("handle", &self.handle)
            .field("key", &self.key)
            .finish()
    }
}
