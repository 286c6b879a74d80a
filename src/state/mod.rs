//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `route`) so the guard and the chrome
//! can depend on small focused models that are testable without a DOM.

pub mod auth;
pub mod route;
