//! CLI library components for ringboard.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
