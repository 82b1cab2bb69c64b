//! Value types exchanged with the host compiler.
//!
//! The host owns the real syntax tree; these types are the narrow boundary it
//! converts its argument nodes into before calling a function, and the shape
//! the result comes back in.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::signature::ArgKind;

// ============================================================================
// Source Span Types
// ============================================================================

/// A source span representing a range in the stylesheet source.
///
/// The library never interprets the offsets; it only copies spans from
/// arguments onto results and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct SourceSpan {
    /// Start byte offset in the source
    pub start: usize,
    /// End byte offset in the source
    pub end: usize,
}

impl SourceSpan {
    /// Create a new source span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check if this span is empty/default.
    pub fn is_empty(&self) -> bool {
        self.start == 0 && self.end == 0
    }

    /// Get the length of this span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Extract the text covered by this span from a source string.
    pub fn extract<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

// ============================================================================
// Argument Values
// ============================================================================

lazy_static! {
    static ref NUMERIC_TOKEN: Regex =
        Regex::new(r"^([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+))([A-Za-z%]*)$").unwrap();
}

/// Split a numeric token into its number and unit parts.
pub fn split_numeric(token: &str) -> Option<(&str, &str)> {
    let caps = NUMERIC_TOKEN.captures(token.trim())?;
    let number = caps.get(1)?.as_str();
    let unit = caps.get(2).map_or("", |m| m.as_str());
    Some((number, unit))
}

/// A typed argument or result value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// A hex color literal such as `#333` or `#0088cc`.
    HexColor(String),
    /// A number with an optional unit (`15`, `5px`, `50%`).
    ///
    /// The numeric part is kept as written so functions see exactly what
    /// the stylesheet author typed.
    Numeric { number: String, unit: String },
    /// A quoted string; holds the unquoted content.
    Str(String),
    /// Any other bare token (`transparent`, `auto`, `rgba(0,0,0,0.5)`).
    Literal(String),
}

impl Value {
    /// Create a hex color value.
    pub fn hex(text: impl Into<String>) -> Self {
        Value::HexColor(text.into())
    }

    /// Create a numeric value from its parts.
    pub fn numeric(number: impl Into<String>, unit: impl Into<String>) -> Self {
        Value::Numeric {
            number: number.into(),
            unit: unit.into(),
        }
    }

    /// Create a string value from unquoted content.
    pub fn string(content: impl Into<String>) -> Self {
        Value::Str(content.into())
    }

    /// Create a literal value.
    pub fn literal(text: impl Into<String>) -> Self {
        Value::Literal(text.into())
    }

    /// Split a token like `5px` or `-0.5em` into a numeric value.
    ///
    /// Returns `None` if the token does not start with a number or has
    /// trailing characters that are not a unit.
    pub fn numeric_from_str(token: &str) -> Option<Self> {
        let (number, unit) = split_numeric(token)?;
        Some(Value::numeric(number, unit))
    }

    /// The kind name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::HexColor(_) => "hex color",
            Value::Numeric { .. } => "numeric",
            Value::Str(_) => "string",
            Value::Literal(_) => "literal",
        }
    }

    /// Check whether this value is acceptable where `kind` is expected.
    pub fn is_kind(&self, kind: ArgKind) -> bool {
        match kind {
            ArgKind::Any => true,
            ArgKind::ColorLike => matches!(self, Value::HexColor(_) | Value::Literal(_)),
            ArgKind::Numeric | ArgKind::Dimension => matches!(self, Value::Numeric { .. }),
            ArgKind::StringLiteral => matches!(self, Value::Str(_)),
        }
    }

    /// The text a function operates on when this value sits at a position
    /// declared as `kind`.
    ///
    /// Numeric positions only see the numeric part; dimension and `Any`
    /// positions see the value as it would print, with strings unquoted.
    pub fn operand(&self, kind: ArgKind) -> String {
        match (self, kind) {
            (Value::Numeric { number, .. }, ArgKind::Numeric) => number.clone(),
            (Value::Numeric { number, unit }, _) => format!("{}{}", number, unit),
            (Value::Str(content), _) => content.clone(),
            (Value::HexColor(text), _) | (Value::Literal(text), _) => text.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::HexColor(text) | Value::Literal(text) => f.write_str(text),
            Value::Numeric { number, unit } => write!(f, "{}{}", number, unit),
            Value::Str(content) => write!(f, "'{}'", content),
        }
    }
}

/// A value paired with the location it came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arg {
    pub value: Value,
    pub span: SourceSpan,
}

impl Arg {
    pub fn new(value: Value, span: SourceSpan) -> Self {
        Self { value, span }
    }
}

// ============================================================================
// Function Output
// ============================================================================

/// The result of a function's transformation, before it is shaped for
/// either evaluation mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// A color, rendered as canonical hex.
    Color(String),
    /// A number with a unit (possibly empty).
    Numeric { number: String, unit: String },
    /// Free-form literal text.
    Literal(String),
}

impl Output {
    /// Render for text-mode evaluation.
    pub fn to_text(&self) -> String {
        match self {
            Output::Color(text) | Output::Literal(text) => text.clone(),
            Output::Numeric { number, unit } => format!("{}{}", number, unit),
        }
    }

    /// Convert into a typed value for the host tree.
    pub fn into_value(self) -> Value {
        match self {
            Output::Color(text) => Value::HexColor(text),
            Output::Numeric { number, unit } => Value::Numeric { number, unit },
            Output::Literal(text) => Value::Literal(text),
        }
    }
}
