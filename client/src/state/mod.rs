//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `auth`, `task_board`) so individual
//! pages can depend on small focused models.

pub mod auth;
pub mod session;
pub mod task_board;
