//! Windows error code helpers

use crate::core::types::ErrorCode;
use winapi::um::errhandlingapi::GetLastError;
use ::windows::core::HRESULT;

/// Get the calling thread's last Windows error
pub fn last_error() -> ErrorCode {
    unsafe { ErrorCode::from(GetLastError()) }
}

/// Convert a Win32 code into a `windows` crate error
pub fn to_windows_error(code: ErrorCode) -> ::windows::core::Error {
    ::windows::core::Error::from(HRESULT::from_win32(code.raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_error_after_failed_call() {
        use winapi::um::handleapi::CloseHandle;
        unsafe {
            CloseHandle(std::ptr::null_mut());
        }
        assert_eq!(last_error(), ErrorCode::InvalidHandle);
    }

    #[test]
    fn test_to_windows_error() {
        let err = to_windows_error(ErrorCode::FileNotFound);
        assert_eq!(err.code(), HRESULT::from_win32(2));
    }
}
