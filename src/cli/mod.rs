//! Command-line interface for doclaunch.
//!
//! - [`args`] - Argument definitions using clap derive macros

pub mod args;

pub use args::Cli;
