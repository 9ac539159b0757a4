//! mindscreen-core
//!
//! Pure domain types shared by the scoring engine and whatever stores or
//! broadcasts its results. No scoring logic lives here.

pub mod error;
pub mod models;
