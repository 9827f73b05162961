//! Diagnostics reported to the host during a round.
//!
//! Diagnostics never abort processing. Every message is also emitted as a
//! `tracing` event so hosts without a sink of their own still see it.

use std::fmt;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Note,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Note => write!(f, "note"),
            Severity::Error => write!(f, "error"),
        }
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Receiver of diagnostics for the current compilation context.
pub trait Messager {
    fn print_message(&mut self, severity: Severity, message: String);

    fn note(&mut self, message: String) {
        self.print_message(Severity::Note, message);
    }

    fn error(&mut self, message: String) {
        self.print_message(Severity::Error, message);
    }
}

/// Collects diagnostics in arrival order.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticSink {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

impl Messager for DiagnosticSink {
    fn print_message(&mut self, severity: Severity, message: String) {
        match severity {
            Severity::Note => tracing::info!("{message}"),
            Severity::Error => tracing::error!("{message}"),
        }
        self.diagnostics.push(Diagnostic { severity, message });
    }
}
