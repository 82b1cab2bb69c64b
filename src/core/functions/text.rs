use super::signature::Signature;
use super::value::Output;
use super::Function;
use crate::utils::error::FunctionResult;

/// `concat(a, b, ...)`: joins the arguments with no separator.
///
/// Needs at least one argument so the result has a location to sit at.
pub const CONCAT: Function = Function::new("concat", Signature::variadic(1, &[]), concat);

fn concat(args: &[&str]) -> FunctionResult<Output> {
    Ok(Output::Literal(args.concat()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::functions::{Arg, SourceSpan, Value};
    use crate::utils::diagnostics::DiagnosticBag;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_concat_text() {
        assert_eq!(CONCAT.call_text(&["5px", ", ", "2px"]).unwrap(), "5px, 2px");
        assert_eq!(CONCAT.call_text(&["auto", " \\9"]).unwrap(), "auto \\9");
        assert_eq!(CONCAT.call_text(&["only"]).unwrap(), "only");
    }

    #[test]
    fn test_concat_typed_unquotes_strings() {
        let mut bag = DiagnosticBag::new();
        let args = [
            Arg::new(Value::numeric("5", "px"), SourceSpan::new(7, 10)),
            Arg::new(Value::string(", "), SourceSpan::new(12, 16)),
            Arg::new(Value::hex("#fff"), SourceSpan::new(18, 22)),
        ];
        let result = CONCAT.call(&args, &mut bag).unwrap();
        assert_eq!(result.value, Value::literal("5px, #fff"));
        assert_eq!(result.span, SourceSpan::new(7, 10));
    }

    #[test]
    fn test_concat_needs_an_argument() {
        let mut bag = DiagnosticBag::new();
        assert!(CONCAT.call(&[], &mut bag).is_err());
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.take()[0].span, None);
        assert!(CONCAT.call_text::<&str>(&[]).is_err());
    }
}
