//! CLI library components for the GFR slope assessment tool.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
