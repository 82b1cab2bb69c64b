//! Error handling for function evaluation
//!
//! Every failure is terminal for the call that produced it: the function
//! returns no value and, in typed mode, one diagnostic has been reported.

use std::fmt;

use crate::core::functions::signature::{ArgKind, Arity};
use crate::core::functions::value::SourceSpan;

/// The kind of evaluation error (without location information).
#[derive(Debug, Clone, PartialEq)]
pub enum FunctionErrorKind {
    /// Wrong number of arguments
    Arity {
        function: String,
        expected: Arity,
        got: usize,
    },
    /// Argument at `position` (1-based) has the wrong kind
    ArgumentKind {
        function: String,
        position: usize,
        expected: ArgKind,
        got: &'static str,
    },
    /// Text could not be decoded as a color
    ColorParse(String),
    /// Text could not be decoded as a number
    NumericParse(String),
    /// Arithmetic over values with incompatible units
    UnitMismatch { left: String, right: String },
    /// Division by zero
    DivisionByZero,
    /// Arithmetic result is not a finite number
    Overflow,
    /// No function registered under this name
    UnknownFunction(String),
}

impl fmt::Display for FunctionErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FunctionErrorKind::Arity {
                function,
                expected,
                got,
            } => write!(
                f,
                "'{}' expects {} argument(s), got {}",
                function, expected, got
            ),
            FunctionErrorKind::ArgumentKind {
                function,
                position,
                expected,
                got,
            } => write!(
                f,
                "argument {} of '{}' must be {}, got {}",
                position, function, expected, got
            ),
            FunctionErrorKind::ColorParse(text) => {
                write!(f, "could not parse '{}' as a color", text)
            }
            FunctionErrorKind::NumericParse(text) => {
                write!(f, "could not parse '{}' as a number", text)
            }
            FunctionErrorKind::UnitMismatch { left, right } => {
                write!(f, "incompatible units '{}' and '{}'", left, right)
            }
            FunctionErrorKind::DivisionByZero => write!(f, "division by zero"),
            FunctionErrorKind::Overflow => write!(f, "result is out of range"),
            FunctionErrorKind::UnknownFunction(name) => write!(f, "unknown function '{}'", name),
        }
    }
}

/// A function evaluation error.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionError {
    /// The kind of error
    pub kind: FunctionErrorKind,
    /// Where the error was reported, if known
    pub span: Option<SourceSpan>,
    /// Zero-based index of the argument responsible, if any
    pub arg: Option<usize>,
}

impl FunctionError {
    /// Create a new error from a kind.
    pub fn new(kind: FunctionErrorKind) -> Self {
        Self {
            kind,
            span: None,
            arg: None,
        }
    }

    /// Attach a span to this error.
    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }

    /// Blame the argument at zero-based `index`.
    pub fn at_arg(mut self, index: usize) -> Self {
        self.arg = Some(index);
        self
    }

    pub fn arity(function: impl Into<String>, expected: Arity, got: usize) -> Self {
        Self::new(FunctionErrorKind::Arity {
            function: function.into(),
            expected,
            got,
        })
    }

    /// `index` is zero-based; the message uses 1-based positions.
    pub fn argument_kind(
        function: impl Into<String>,
        index: usize,
        expected: ArgKind,
        got: &'static str,
    ) -> Self {
        Self::new(FunctionErrorKind::ArgumentKind {
            function: function.into(),
            position: index + 1,
            expected,
            got,
        })
        .at_arg(index)
    }

    pub fn color_parse(text: impl Into<String>) -> Self {
        Self::new(FunctionErrorKind::ColorParse(text.into()))
    }

    pub fn numeric_parse(text: impl Into<String>) -> Self {
        Self::new(FunctionErrorKind::NumericParse(text.into()))
    }

    pub fn unit_mismatch(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self::new(FunctionErrorKind::UnitMismatch {
            left: left.into(),
            right: right.into(),
        })
    }

    pub fn div_zero() -> Self {
        Self::new(FunctionErrorKind::DivisionByZero)
    }

    pub fn overflow() -> Self {
        Self::new(FunctionErrorKind::Overflow)
    }

    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::new(FunctionErrorKind::UnknownFunction(name.into()))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FunctionErrorKind {
        &self.kind
    }
}

impl fmt::Display for FunctionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(span) = &self.span {
            write!(f, " at {}", span)?;
        }
        Ok(())
    }
}

impl std::error::Error for FunctionError {}

impl From<FunctionErrorKind> for FunctionError {
    fn from(kind: FunctionErrorKind) -> Self {
        Self::new(kind)
    }
}

/// Result type for function evaluation.
pub type FunctionResult<T> = Result<T, FunctionError>;
