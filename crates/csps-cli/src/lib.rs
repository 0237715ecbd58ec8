//! CLI library components for the People Survey reshaper.

pub mod commands;
pub mod logging;
pub mod output;
pub mod summary;
pub mod types;
