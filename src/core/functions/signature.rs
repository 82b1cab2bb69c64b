//! Argument contracts: how many arguments a function takes and what kind of
//! value each position accepts.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils::error::{FunctionError, FunctionResult};

/// The kind of value accepted at an argument position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgKind {
    /// A hex color or a bare literal that parses as a color.
    ColorLike,
    /// A number; functions see only the numeric part.
    Numeric,
    /// A number whose unit travels with it into the function.
    Dimension,
    /// A quoted string.
    StringLiteral,
    /// Anything.
    Any,
}

impl ArgKind {
    pub fn name(&self) -> &'static str {
        match self {
            ArgKind::ColorLike => "a hex color or literal",
            ArgKind::Numeric => "numeric",
            ArgKind::Dimension => "a number with an optional unit",
            ArgKind::StringLiteral => "a string",
            ArgKind::Any => "any value",
        }
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How many arguments a function expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arity {
    /// Exactly this many.
    Fixed(usize),
    /// Any number, but at least `min`.
    Variadic { min: usize },
}

impl Arity {
    pub fn accepts(&self, count: usize) -> bool {
        match *self {
            Arity::Fixed(n) => count == n,
            Arity::Variadic { min } => count >= min,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Fixed(n) => write!(f, "{}", n),
            Arity::Variadic { min } => write!(f, "at least {}", min),
        }
    }
}

/// The declared argument contract of a function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub arity: Arity,
    /// Expected kind per leading position.
    pub kinds: &'static [ArgKind],
    /// Kind expected at every position past `kinds`.
    pub rest: ArgKind,
}

impl Signature {
    /// A fixed-arity signature, one kind per argument.
    pub const fn fixed(kinds: &'static [ArgKind]) -> Self {
        Self {
            arity: Arity::Fixed(kinds.len()),
            kinds,
            rest: ArgKind::Any,
        }
    }

    /// A variadic signature. `kinds` covers the leading positions; any
    /// position past it accepts anything.
    pub const fn variadic(min: usize, kinds: &'static [ArgKind]) -> Self {
        Self {
            arity: Arity::Variadic { min },
            kinds,
            rest: ArgKind::Any,
        }
    }

    /// A variadic signature where every argument has the same kind.
    pub const fn repeated(min: usize, kind: ArgKind) -> Self {
        Self {
            arity: Arity::Variadic { min },
            kinds: &[],
            rest: kind,
        }
    }

    /// Kind expected at zero-based `position`.
    pub fn kind_at(&self, position: usize) -> ArgKind {
        self.kinds.get(position).copied().unwrap_or(self.rest)
    }

    /// Fail with an arity error unless `count` arguments are acceptable.
    pub fn check_arity(&self, function: &str, count: usize) -> FunctionResult<()> {
        if self.arity.accepts(count) {
            Ok(())
        } else {
            Err(FunctionError::arity(function, self.arity, count))
        }
    }
}
