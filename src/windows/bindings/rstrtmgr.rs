//! Rstrtmgr.dll bindings for the Restart Manager

use crate::core::types::{AppType, ErrorCode, FileTime, ProcessRecord};
use crate::windows::utils::wide_to_string;
use std::{mem, ptr};
use winapi::shared::minwindef::{DWORD, FALSE, UINT};
use winapi::um::restartmanager::{
    RmEndSession, RmGetList, RmRegisterResources, RmStartSession, CCH_RM_SESSION_KEY,
    RM_PROCESS_INFO,
};
use winapi::um::winnt::{LPCWSTR, WCHAR};

/// Raw session handle handed out by RmStartSession
pub type SessionHandle = DWORD;

/// Safe wrapper for RmStartSession. Returns the handle and session key.
pub fn start_session() -> Result<(SessionHandle, String), ErrorCode> {
    let mut session: DWORD = 0;
    let mut key = [0 as WCHAR; CCH_RM_SESSION_KEY as usize + 1];

    let code = unsafe { RmStartSession(&mut session, 0, key.as_mut_ptr()) };
    match ErrorCode::from(code) {
        ErrorCode::Success => Ok((session, wide_to_string(&key))),
        failure => Err(failure),
    }
}

/// Safe wrapper for RmEndSession
pub fn end_session(session: SessionHandle) -> ErrorCode {
    ErrorCode::from(unsafe { RmEndSession(session) })
}

/// Safe wrapper for RmRegisterResources with a single file.
///
/// `wide_path` must be NUL-terminated.
pub fn register_file(session: SessionHandle, wide_path: &[u16]) -> ErrorCode {
    if wide_path.last() != Some(&0) {
        return ErrorCode::InvalidParameter;
    }

    let mut file: LPCWSTR = wide_path.as_ptr();
    let code = unsafe {
        RmRegisterResources(
            session,
            1,
            &mut file,
            0,
            ptr::null_mut(),
            0,
            ptr::null_mut(),
        )
    };
    ErrorCode::from(code)
}

/// What RmGetList wrote
pub struct GetListResult {
    pub code: ErrorCode,
    pub needed: usize,
    pub records: Vec<ProcessRecord>,
    pub reboot_reasons: u32,
}

/// Safe wrapper for RmGetList with a buffer of `capacity` entries
pub fn get_list(session: SessionHandle, capacity: usize) -> GetListResult {
    let mut buffer: Vec<RM_PROCESS_INFO> = vec![unsafe { mem::zeroed() }; capacity];
    let mut needed: UINT = 0;
    let mut count = capacity as UINT;
    let mut reboot_reasons: DWORD = 0;

    let buffer_ptr = if capacity == 0 {
        ptr::null_mut()
    } else {
        buffer.as_mut_ptr()
    };

    let code = unsafe {
        RmGetList(
            session,
            &mut needed,
            &mut count,
            buffer_ptr,
            &mut reboot_reasons,
        )
    };

    let written = (count as usize).min(capacity);
    let records = buffer[..written].iter().map(to_record).collect();

    GetListResult {
        code: ErrorCode::from(code),
        needed: needed as usize,
        records,
        reboot_reasons,
    }
}

fn to_record(info: &RM_PROCESS_INFO) -> ProcessRecord {
    ProcessRecord {
        app_type: AppType::from(info.ApplicationType as u32),
        app_name: wide_to_string(&info.strAppName),
        pid: info.Process.dwProcessId,
        start_time: FileTime::from_parts(
            info.Process.ProcessStartTime.dwLowDateTime,
            info.Process.ProcessStartTime.dwHighDateTime,
        ),
        service_short_name: wide_to_string(&info.strServiceShortName),
        ts_session_id: info.TSSessionId,
        restartable: info.bRestartable != FALSE,
    }
}
