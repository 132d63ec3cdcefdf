//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.

use std::sync::{Arc, Mutex};

use super::{SpinnerHandle, UserInterface};

/// Captures every message instead of printing it.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
    spinners: Arc<Mutex<Vec<String>>>,
}

impl MockUI {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Progress messages shown.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Success messages shown.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Warnings shown.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Errors shown.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Hints shown.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Every spinner event, in order (`start: ..`, `ok: ..`, `err: ..`).
    pub fn spinner_events(&self) -> Vec<String> {
        self.spinners.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }

    fn start_spinner(&mut self, msg: &str) -> Box<dyn SpinnerHandle> {
        if let Ok(mut events) = self.spinners.lock() {
            events.push(format!("start: {}", msg));
        }
        Box::new(MockSpinner {
            events: Arc::clone(&self.spinners),
        })
    }
}

/// Spinner that records into its parent [`MockUI`].
#[derive(Debug)]
pub struct MockSpinner {
    events: Arc<Mutex<Vec<String>>>,
}

impl MockSpinner {
    fn record(&self, event: String) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, msg: &str) {
        self.record(format!("update: {}", msg));
    }

    fn finish_success(&mut self, msg: &str) {
        self.record(format!("ok: {}", msg));
    }

    fn finish_error(&mut self, msg: &str) {
        self.record(format!("err: {}", msg));
    }
}
