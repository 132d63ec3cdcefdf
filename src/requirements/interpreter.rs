//! Local interpreter resolution.

use crate::requirements::check::CheckContext;
use crate::ui::hints;
use std::path::PathBuf;

/// An interpreter found on the search path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInterpreter {
    /// The candidate name that matched (e.g. "python3").
    pub name: String,
    /// Where it resolved to.
    pub path: PathBuf,
}

/// Tries candidate command names in order.
#[derive(Debug, Clone)]
pub struct InterpreterResolver {
    candidates: Vec<String>,
    min_version: String,
}

impl InterpreterResolver {
    /// Create a resolver over `candidates`, tried in the given order.
    pub fn new(candidates: Vec<String>, min_version: impl Into<String>) -> Self {
        Self {
            candidates,
            min_version: min_version.into(),
        }
    }

    /// First candidate that resolves, or `None` when none do.
    pub fn resolve(&self, context: &dyn CheckContext) -> Option<ResolvedInterpreter> {
        self.candidates.iter().find_map(|name| {
            context.resolve(name).map(|path| ResolvedInterpreter {
                name: name.clone(),
                path,
            })
        })
    }

    /// Remediation shown when nothing resolves.
    pub fn remediation(&self) -> String {
        hints::interpreter_missing(&self.min_version, &self.candidates)
    }
}
