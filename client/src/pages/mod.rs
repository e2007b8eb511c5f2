//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub(crate) mod auth_submit;
pub mod dashboard;
pub mod login;
pub mod signup;
