//! Windows API layer
//!
//! Safe wrappers around the Restart Manager and the process query
//! functions. All unsafe FFI calls are contained within this module.

pub mod bindings;
pub mod types;
pub mod utils;

pub use bindings::{kernel32, rstrtmgr};
pub use types::Handle;
