//! Ordered prerequisite evaluation.
//!
//! The checker runs prerequisites in the order they were given and stops
//! at the first failure. Nothing after a failed check is evaluated, so a
//! missing file never triggers a Docker probe.

use crate::error::{LauncherError, Result};
use crate::requirements::check::{CheckContext, Prerequisite, PrerequisiteCheck};

/// Runs prerequisites against a [`CheckContext`].
pub struct PrerequisiteChecker<'a> {
    context: &'a dyn CheckContext,
}

impl<'a> PrerequisiteChecker<'a> {
    /// Create a checker bound to a context.
    pub fn new(context: &'a dyn CheckContext) -> Self {
        Self { context }
    }

    /// Whether a single prerequisite holds.
    pub fn passes(&self, prereq: &Prerequisite) -> bool {
        match &prereq.check {
            PrerequisiteCheck::FileExists(path) => self.context.file_exists(path),
            PrerequisiteCheck::OnPath(binary) => self.context.resolve(binary).is_some(),
            PrerequisiteCheck::CommandSucceeds { program, args } => {
                self.context.succeeds(program, args)
            }
        }
    }

    /// Check every prerequisite in order, failing on the first miss.
    pub fn check_all(&self, prereqs: &[Prerequisite]) -> Result<()> {
        for prereq in prereqs {
            if self.passes(prereq) {
                tracing::debug!(prerequisite = %prereq.name, "prerequisite satisfied");
                continue;
            }
            tracing::debug!(prerequisite = %prereq.name, "prerequisite failed");
            return Err(LauncherError::PreconditionMissing {
                name: prereq.name.clone(),
                message: prereq.failure.clone(),
                remediation: prereq.remediation.clone(),
            });
        }
        Ok(())
    }

    /// Evaluate every prerequisite without stopping, for reporting.
    pub fn report(&self, prereqs: &[Prerequisite]) -> Vec<(String, bool)> {
        prereqs
            .iter()
            .map(|p| (p.name.clone(), self.passes(p)))
            .collect()
    }
}
