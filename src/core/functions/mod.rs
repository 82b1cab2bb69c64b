//! Stylesheet functions and their evaluation contract.
//!
//! Every function is a [`Function`] value: a name, a [`Signature`] and one
//! pure transformation over argument text. The two evaluation modes are thin
//! adapters around that transformation:
//!
//! ```text
//!   typed args (Value + span)          plain strings
//!          │                                │
//!   arity + kind checks               arity check
//!   operand extraction                      │
//!          └──────────────┬─────────────────┘
//!                         ▼
//!                apply(&[&str]) -> Output
//!          ┌──────────────┴─────────────────┐
//!          ▼                                ▼
//!   Arg at first arg's span            Output::to_text()
//!   (diagnostic on failure)
//! ```
//!
//! Because both modes share `apply`, they cannot disagree on a result.

pub mod color;
pub mod numeric;
pub mod registry;
pub mod signature;
pub mod text;
pub mod value;

use std::fmt;

use log::{debug, trace};

use crate::utils::diagnostics::{Diagnostic, ErrorReporter};
use crate::utils::error::{FunctionError, FunctionResult};

pub use registry::{base_functions, custom_functions, default_registry, FunctionRegistry};
pub use signature::{ArgKind, Arity, Signature};
pub use value::{Arg, Output, SourceSpan, Value};

/// The pure transformation behind a function.
///
/// Receives one operand per argument. Errors should blame the responsible
/// argument with [`FunctionError::at_arg`].
pub type ApplyFn = fn(&[&str]) -> FunctionResult<Output>;

/// A callable stylesheet function.
#[derive(Clone, Copy)]
pub struct Function {
    name: &'static str,
    signature: Signature,
    apply: ApplyFn,
}

impl Function {
    pub const fn new(name: &'static str, signature: Signature, apply: ApplyFn) -> Self {
        Self {
            name,
            signature,
            apply,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Number of arguments this function expects.
    pub fn expected_args(&self) -> Arity {
        self.signature.arity
    }

    /// Typed evaluation.
    ///
    /// On failure exactly one diagnostic is sent to `reporter`, located at
    /// the argument responsible, and the same error is returned.
    pub fn call(&self, args: &[Arg], reporter: &mut dyn ErrorReporter) -> FunctionResult<Arg> {
        match self.call_typed(args) {
            Ok(result) => {
                trace!("{}({} args) -> {}", self.name, args.len(), result.value);
                Ok(result)
            }
            Err(err) => {
                debug!("{} failed: {}", self.name, err);
                reporter.report(Diagnostic::from(&err));
                Err(err)
            }
        }
    }

    /// Text-mode evaluation over plain argument strings.
    pub fn call_text<S: AsRef<str>>(&self, args: &[S]) -> FunctionResult<String> {
        let operands: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        let result = self
            .signature
            .check_arity(self.name, operands.len())
            .and_then(|()| (self.apply)(&operands))
            .map(|output| output.to_text());

        match &result {
            Ok(text) => trace!("{}({:?}) -> {}", self.name, operands, text),
            Err(err) => debug!("{} failed: {}", self.name, err),
        }
        result
    }

    fn call_typed(&self, args: &[Arg]) -> FunctionResult<Arg> {
        let first_span = args.first().map(|arg| arg.span);

        if let Err(err) = self.signature.check_arity(self.name, args.len()) {
            return Err(match first_span {
                Some(span) => err.with_span(span),
                None => err,
            });
        }

        for (i, arg) in args.iter().enumerate() {
            let kind = self.signature.kind_at(i);
            if !arg.value.is_kind(kind) {
                return Err(
                    FunctionError::argument_kind(self.name, i, kind, arg.value.kind_name())
                        .with_span(arg.span),
                );
            }
        }

        let operands: Vec<String> = args
            .iter()
            .enumerate()
            .map(|(i, arg)| arg.value.operand(self.signature.kind_at(i)))
            .collect();
        let operands: Vec<&str> = operands.iter().map(String::as_str).collect();

        let output = (self.apply)(&operands).map_err(|err| {
            let blamed = err.arg.and_then(|i| args.get(i)).or(args.first());
            match blamed {
                Some(arg) => err.with_span(arg.span),
                None => err,
            }
        })?;

        Ok(Arg::new(output.into_value(), first_span.unwrap_or_default()))
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("signature", &self.signature)
            .finish()
    }
}

// ============================================================================
// Operand parsing shared by the function families
// ============================================================================

/// Parse a whole-number delta (degrees or percentage points).
pub(crate) fn parse_delta(text: &str, index: usize) -> FunctionResult<i32> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| FunctionError::numeric_parse(text).at_arg(index))
}

/// Parse a finite floating-point number.
pub(crate) fn parse_number(text: &str, index: usize) -> FunctionResult<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or_else(|| FunctionError::numeric_parse(text).at_arg(index))
}
