//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser-facing helpers: `localStorage`, native dialogs and route guards.
//! Each has a native fallback so the page logic built on them runs in tests.

pub mod auth;
pub mod dialogs;
pub mod format;
pub mod storage;
