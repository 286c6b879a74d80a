//! Page-level components, one per route.

pub mod login;
pub mod session_detail;
pub mod sessions;
