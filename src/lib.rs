//! # gss-functions
//!
//! Color and value functions for stylesheet compilers.
//!
//! Every function can be evaluated two ways: over typed argument values that
//! carry source locations (failures are reported as diagnostics), or over
//! plain argument strings.
//!
//! ## Example
//!
//! ```rust
//! use gss_functions::default_registry;
//!
//! let darken = default_registry().get("darken").unwrap();
//! assert_eq!(darken.call_text(&["#bbbbbb", "10"]).unwrap(), "#A1A1A1");
//!
//! let mix = default_registry().get("mix").unwrap();
//! assert_eq!(mix.call_text(&["#ff0000", "#0000ff", "50"]).unwrap(), "#800080");
//! ```
//!
//! Typed evaluation reports into any [`ErrorReporter`]:
//!
//! ```rust
//! use gss_functions::{default_registry, Arg, DiagnosticBag, SourceSpan, Value};
//!
//! let mut bag = DiagnosticBag::new();
//! let args = [
//!     Arg::new(Value::hex("#333333"), SourceSpan::new(8, 15)),
//!     Arg::new(Value::string("lots"), SourceSpan::new(17, 23)),
//! ];
//! let lighten = default_registry().get("lighten").unwrap();
//! assert!(lighten.call(&args, &mut bag).is_err());
//! assert_eq!(bag.take()[0].span, Some(SourceSpan::new(17, 23)));
//! ```

pub mod core;
pub mod utils;

pub use crate::core::color::{is_transparent, parse_color, Color, Hsb, Hsl};
pub use crate::core::functions::{
    base_functions, custom_functions, default_registry, Arg, ArgKind, Arity, Function,
    FunctionRegistry, Output, Signature, SourceSpan, Value,
};
pub use crate::utils::diagnostics::{Diagnostic, DiagnosticBag, ErrorReporter};
pub use crate::utils::error::{FunctionError, FunctionErrorKind, FunctionResult};
