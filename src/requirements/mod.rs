//! Prerequisite detection.
//!
//! This module verifies that the files and tools a launch depends on are
//! present before anything is provisioned or spawned.
//!
//! # Modules
//!
//! - [`check`] - Prerequisite definitions and the [`CheckContext`] seam
//! - [`checker`] - Ordered, fail-fast evaluation
//! - [`interpreter`] - Local interpreter resolution
//! - [`probe`] - PATH lookup

pub mod check;
pub mod checker;
pub mod interpreter;
pub mod probe;

pub use check::{CheckContext, Prerequisite, PrerequisiteCheck, SystemContext};
pub use checker::PrerequisiteChecker;
pub use interpreter::{InterpreterResolver, ResolvedInterpreter};
pub use probe::{parse_system_path, resolve_tool_path};
