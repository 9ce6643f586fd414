//! Kernel32.dll bindings for process queries

use crate::core::types::{FileBlameError, FileBlameResult, FileTime};
use crate::windows::utils::{last_error, wide_to_string};
use winapi::shared::minwindef::{DWORD, FALSE, FILETIME};
use winapi::shared::winerror::ERROR_INSUFFICIENT_BUFFER;
use winapi::um::errhandlingapi::GetLastError;
use winapi::um::handleapi::CloseHandle;
use winapi::um::processthreadsapi::{GetProcessTimes, OpenProcess};
use winapi::um::winbase::QueryFullProcessImageNameW;
use winapi::um::winnt::HANDLE;

/// Longest path `QueryFullProcessImageNameW` can produce
const MAX_LONG_PATH: usize = 32_768;

/// Safe wrapper for OpenProcess
pub fn open_process(pid: u32, desired_access: u32) -> FileBlameResult<HANDLE> {
    unsafe {
        let handle = OpenProcess(desired_access, FALSE, pid);
        if handle.is_null() {
            Err(FileBlameError::OpenProcess {
                pid,
                code: last_error(),
            })
        } else {
            Ok(handle)
        }
    }
}

/// Safe wrapper for CloseHandle
///
/// # Safety
/// The handle must be a valid Windows handle
pub unsafe fn close_handle(handle: HANDLE) -> FileBlameResult<()> {
    if handle.is_null() {
        return Ok(());
    }

    if CloseHandle(handle) == FALSE {
        Err(FileBlameError::from(::windows::core::Error::from_win32()))
    } else {
        Ok(())
    }
}

/// Creation time of a process, from GetProcessTimes
///
/// # Safety
/// The handle must be a valid process handle with query access
pub unsafe fn process_creation_time(handle: HANDLE) -> FileBlameResult<FileTime> {
    let zero = || FILETIME {
        dwLowDateTime: 0,
        dwHighDateTime: 0,
    };
    let mut creation = zero();
    let mut exit = zero();
    let mut kernel = zero();
    let mut user = zero();

    if GetProcessTimes(handle, &mut creation, &mut exit, &mut kernel, &mut user) == FALSE {
        return Err(FileBlameError::from(::windows::core::Error::from_win32()));
    }

    Ok(FileTime::from_parts(
        creation.dwLowDateTime,
        creation.dwHighDateTime,
    ))
}

/// Full Win32 image path of a process, from QueryFullProcessImageNameW.
///
/// Starts at MAX_PATH and grows the buffer for long paths.
///
/// # Safety
/// The handle must be a valid process handle with limited query access
pub unsafe fn query_full_process_image_name(handle: HANDLE) -> FileBlameResult<String> {
    let mut capacity = winapi::shared::minwindef::MAX_PATH;

    loop {
        let mut buffer = vec![0u16; capacity];
        let mut size = capacity as DWORD;

        if QueryFullProcessImageNameW(handle, 0, buffer.as_mut_ptr(), &mut size) != FALSE {
            let len = (size as usize).min(buffer.len());
            return Ok(wide_to_string(&buffer[..len]));
        }

        if GetLastError() == ERROR_INSUFFICIENT_BUFFER && capacity < MAX_LONG_PATH {
            capacity = (capacity * 2).min(MAX_LONG_PATH);
            continue;
        }

        return Err(FileBlameError::from(::windows::core::Error::from_win32()));
    }
}
