//! Reusable UI components shared by pages.

pub mod task_card;
