//! Windows utility functions

pub mod error_codes;
pub mod string_conv;

pub use error_codes::{last_error, to_windows_error};
pub use string_conv::{os_str_to_wide, wide_to_string};
