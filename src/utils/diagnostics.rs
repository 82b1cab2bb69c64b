//! Diagnostic reporting for typed evaluation.
//!
//! The host compiler owns the real error manager; functions only need a
//! sink that accepts a message and a location.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::functions::value::SourceSpan;
use crate::utils::error::FunctionError;

/// A single reported problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Human-readable message
    pub message: String,
    /// Location in the stylesheet, if known
    pub span: Option<SourceSpan>,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>, span: Option<SourceSpan>) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }

    /// Format with line and column resolved against `source`.
    pub fn format_with_source(&self, source: &str) -> String {
        let Some(span) = self.span else {
            return self.message.clone();
        };

        let start = span.start.min(source.len());
        let prefix = source.get(..start).unwrap_or(source);
        let line = prefix.matches('\n').count() + 1;
        let last_newline = prefix.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let col = prefix.len() - last_newline + 1;

        let mut msg = format!("{}:{}: {}", line, col, self.message);
        if let Some(extract) = span.extract(source) {
            msg = format!("{}\n  --> `{}`", msg, extract);
        }
        msg
    }
}

impl From<&FunctionError> for Diagnostic {
    fn from(err: &FunctionError) -> Self {
        Diagnostic::new(err.kind.to_string(), err.span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Some(span) => write!(f, "{} at {}", self.message, span),
            None => f.write_str(&self.message),
        }
    }
}

/// Sink for diagnostics raised during typed evaluation.
pub trait ErrorReporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

/// An `ErrorReporter` that keeps everything it is given.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticBag {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticBag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Take all accumulated diagnostics.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

impl ErrorReporter for DiagnosticBag {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

impl<F> ErrorReporter for F
where
    F: FnMut(Diagnostic),
{
    fn report(&mut self, diagnostic: Diagnostic) {
        self(diagnostic)
    }
}
