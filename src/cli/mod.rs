//! CLI module for cropdoc
//!
//! Handles command-line argument parsing and configuration management.

pub mod args;
pub mod config;

pub use args::Args;
pub use config::Config;
