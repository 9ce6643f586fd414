//! Windows API bindings
//!
//! Low-level wrappers over kernel32 and the Restart Manager (rstrtmgr).

pub mod kernel32;
pub mod rstrtmgr;
