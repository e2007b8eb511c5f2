//! Networking for the task API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Request shaping and error translation live in the shared `tasks` crate;
//! `api` only supplies the browser transport and the configured base URL.

pub mod api;
