//! Numeric functions: `percentage`, `removeUnit`, and the arithmetic of the
//! base set.

use phf::phf_set;

use super::signature::{ArgKind, Signature};
use super::value::{split_numeric, Output};
use super::{parse_number, Function};
use crate::utils::error::{FunctionError, FunctionResult};

const ONE_NUMBER: Signature = Signature::fixed(&[ArgKind::Numeric]);
const NUMBERS: Signature = Signature::repeated(2, ArgKind::Dimension);
const ONE_OR_MORE: Signature = Signature::repeated(1, ArgKind::Dimension);

pub const PERCENTAGE: Function = Function::new("percentage", ONE_NUMBER, percentage);
pub const REMOVE_UNIT: Function = Function::new("removeUnit", ONE_NUMBER, remove_unit);

// Base set
pub const ADD: Function = Function::new("add", NUMBERS, add);
pub const SUB: Function = Function::new("sub", NUMBERS, sub);
pub const MULT: Function = Function::new("mult", NUMBERS, mult);
pub const DIVIDE: Function = Function::new("divide", NUMBERS, divide);
pub const MAX_VALUE: Function = Function::new("maxValue", ONE_OR_MORE, max_value);
pub const MIN_VALUE: Function = Function::new("minValue", ONE_OR_MORE, min_value);

/// Suffixes `removeUnit` strips in text mode.
static REMOVABLE_UNITS: phf::Set<&'static str> = phf_set! { "px", "em", "%" };

/// Render a number the way `percentage` always has: integral values keep a
/// trailing `.0`, very large and very small magnitudes use `E` notation.
pub fn format_decimal(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    if (1e-3..1e7).contains(&value.abs()) {
        let text = value.to_string();
        if text.contains('.') {
            text
        } else {
            format!("{}.0", text)
        }
    } else {
        let text = format!("{:E}", value);
        match text.split_once('E') {
            Some((mantissa, exp)) if !mantissa.contains('.') => {
                format!("{}.0E{}", mantissa, exp)
            }
            _ => text,
        }
    }
}

fn percentage(args: &[&str]) -> FunctionResult<Output> {
    let fraction = parse_number(args[0], 0)?;
    Ok(Output::Numeric {
        number: format_decimal(fraction * 100.0),
        unit: "%".to_string(),
    })
}

/// Strip a trailing `px`, `em` or `%`.
///
/// This only looks at the last one or two characters; it is not a unit
/// parser. `5rem` ends in `em` and comes back as `5r`; `5pt` is unchanged.
pub fn strip_unit(value: &str) -> &str {
    for width in [2, 1] {
        let Some(cut) = value.len().checked_sub(width) else {
            continue;
        };
        if !value.is_char_boundary(cut) {
            continue;
        }
        let (head, suffix) = value.split_at(cut);
        if REMOVABLE_UNITS.contains(suffix) {
            return head;
        }
    }
    value
}

fn remove_unit(args: &[&str]) -> FunctionResult<Output> {
    Ok(Output::Numeric {
        number: strip_unit(args[0]).to_string(),
        unit: String::new(),
    })
}

// ============================================================================
// Arithmetic
// ============================================================================

/// A number with its unit, as written in an argument.
#[derive(Debug, Clone, PartialEq)]
struct Quantity {
    value: f64,
    unit: String,
}

impl Quantity {
    fn parse(text: &str, index: usize) -> FunctionResult<Self> {
        let (number, unit) = split_numeric(text)
            .ok_or_else(|| FunctionError::numeric_parse(text).at_arg(index))?;
        Ok(Self {
            value: parse_number(number, index)?,
            unit: unit.to_string(),
        })
    }

    fn into_output(self) -> FunctionResult<Output> {
        if !self.value.is_finite() {
            return Err(FunctionError::overflow());
        }
        Ok(Output::Numeric {
            number: self.value.to_string(),
            unit: self.unit,
        })
    }
}

fn parse_all(args: &[&str]) -> FunctionResult<Vec<Quantity>> {
    args.iter()
        .enumerate()
        .map(|(i, text)| Quantity::parse(text, i))
        .collect()
}

/// Every operand must share the first operand's unit.
fn same_unit(quantities: &[Quantity]) -> FunctionResult<()> {
    let unit = &quantities[0].unit;
    for (i, q) in quantities.iter().enumerate().skip(1) {
        if &q.unit != unit {
            return Err(FunctionError::unit_mismatch(unit, &q.unit).at_arg(i));
        }
    }
    Ok(())
}

/// Only the first operand may carry a unit.
fn unitless_rest(quantities: &[Quantity]) -> FunctionResult<()> {
    for (i, q) in quantities.iter().enumerate().skip(1) {
        if !q.unit.is_empty() {
            return Err(FunctionError::unit_mismatch(&quantities[0].unit, &q.unit).at_arg(i));
        }
    }
    Ok(())
}

fn fold(
    args: &[&str],
    check: fn(&[Quantity]) -> FunctionResult<()>,
    op: fn(f64, f64) -> f64,
) -> FunctionResult<Output> {
    let quantities = parse_all(args)?;
    check(&quantities)?;
    let mut iter = quantities.into_iter();
    let Some(mut acc) = iter.next() else {
        return Err(FunctionError::numeric_parse(""));
    };
    for q in iter {
        acc.value = op(acc.value, q.value);
    }
    acc.into_output()
}

fn add(args: &[&str]) -> FunctionResult<Output> {
    fold(args, same_unit, |a, b| a + b)
}

fn sub(args: &[&str]) -> FunctionResult<Output> {
    fold(args, same_unit, |a, b| a - b)
}

fn mult(args: &[&str]) -> FunctionResult<Output> {
    fold(args, unitless_rest, |a, b| a * b)
}

fn divide(args: &[&str]) -> FunctionResult<Output> {
    let quantities = parse_all(args)?;
    unitless_rest(&quantities)?;
    if let Some(i) = quantities.iter().skip(1).position(|q| q.value == 0.0) {
        return Err(FunctionError::div_zero().at_arg(i + 1));
    }
    fold(args, unitless_rest, |a, b| a / b)
}

fn extreme(args: &[&str], pick_later: fn(f64, f64) -> bool) -> FunctionResult<Output> {
    let quantities = parse_all(args)?;
    same_unit(&quantities)?;
    let mut best: Option<Quantity> = None;
    for q in quantities {
        best = match best {
            Some(b) if !pick_later(b.value, q.value) => Some(b),
            _ => Some(q),
        };
    }
    best.ok_or_else(|| FunctionError::numeric_parse(""))?
        .into_output()
}

fn max_value(args: &[&str]) -> FunctionResult<Output> {
    extreme(args, |best, candidate| candidate > best)
}

fn min_value(args: &[&str]) -> FunctionResult<Output> {
    extreme(args, |best, candidate| candidate < best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FunctionErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_percentage() {
        assert_eq!(PERCENTAGE.call_text(&["0.05"]).unwrap(), "5.0%");
        assert_eq!(PERCENTAGE.call_text(&["0.125"]).unwrap(), "12.5%");
        assert_eq!(PERCENTAGE.call_text(&["1"]).unwrap(), "100.0%");
        assert_eq!(PERCENTAGE.call_text(&["0"]).unwrap(), "0.0%");
    }

    #[test]
    fn test_percentage_rejects_text() {
        let err = PERCENTAGE.call_text(&["half"]).unwrap_err();
        assert_eq!(err.kind, FunctionErrorKind::NumericParse("half".into()));
    }

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(5.0), "5.0");
        assert_eq!(format_decimal(-2.5), "-2.5");
        assert_eq!(format_decimal(1e7), "1.0E7");
        assert_eq!(format_decimal(1.5e-4), "1.5E-4");
        assert_eq!(format_decimal(0.001), "0.001");
    }

    #[test]
    fn test_strip_unit() {
        assert_eq!(strip_unit("5px"), "5");
        assert_eq!(strip_unit("1.5em"), "1.5");
        assert_eq!(strip_unit("50%"), "50");
        assert_eq!(strip_unit("5rem"), "5r");
        assert_eq!(strip_unit("5pt"), "5pt");
        assert_eq!(strip_unit("12"), "12");
        assert_eq!(strip_unit("%"), "");
        assert_eq!(strip_unit(""), "");
        assert_eq!(strip_unit("5é"), "5é");
    }

    #[test]
    fn test_remove_unit() {
        assert_eq!(REMOVE_UNIT.call_text(&["10px"]).unwrap(), "10");
        assert_eq!(REMOVE_UNIT.call_text(&["auto"]).unwrap(), "auto");
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(ADD.call_text(&["5px", "2px", "1px"]).unwrap(), "8px");
        assert_eq!(SUB.call_text(&["5em", "1.5em"]).unwrap(), "3.5em");
        assert_eq!(MULT.call_text(&["5px", "3"]).unwrap(), "15px");
        assert_eq!(DIVIDE.call_text(&["10px", "4"]).unwrap(), "2.5px");
        assert_eq!(MAX_VALUE.call_text(&["1px", "7px", "3px"]).unwrap(), "7px");
        assert_eq!(MIN_VALUE.call_text(&["1px", "7px", "-3px"]).unwrap(), "-3px");
    }

    #[test]
    fn test_arithmetic_errors() {
        let err = ADD.call_text(&["5px", "2em"]).unwrap_err();
        assert!(matches!(err.kind, FunctionErrorKind::UnitMismatch { .. }));
        assert_eq!(err.arg, Some(1));

        let err = MULT.call_text(&["5px", "2px"]).unwrap_err();
        assert!(matches!(err.kind, FunctionErrorKind::UnitMismatch { .. }));

        let err = DIVIDE.call_text(&["5px", "2", "0"]).unwrap_err();
        assert_eq!(err.kind, FunctionErrorKind::DivisionByZero);
        assert_eq!(err.arg, Some(2));

        let err = ADD.call_text(&["5px", "auto"]).unwrap_err();
        assert_eq!(err.kind, FunctionErrorKind::NumericParse("auto".into()));
        assert_eq!(err.arg, Some(1));

        assert!(ADD.call_text(&["5px"]).is_err());
    }

    #[test]
    fn test_arithmetic_rejects_infinite_results() {
        let err = ADD.call_text(&["1e308px", "1e308px"]).unwrap_err();
        assert_eq!(err.kind, FunctionErrorKind::Overflow);
        let err = MULT.call_text(&["1e308", "10"]).unwrap_err();
        assert_eq!(err.kind, FunctionErrorKind::Overflow);
        assert_eq!(SUB.call_text(&["1e308px", "1e308px"]).unwrap(), "0px");
    }

    #[test]
    fn test_arithmetic_typed_keeps_units_and_rejects_strings() {
        use crate::core::functions::{Arg, SourceSpan, Value};
        use crate::utils::diagnostics::DiagnosticBag;

        let mut bag = DiagnosticBag::new();
        let args = [
            Arg::new(Value::numeric("5", "px"), SourceSpan::new(4, 7)),
            Arg::new(Value::numeric("2", "px"), SourceSpan::new(9, 12)),
        ];
        let result = ADD.call(&args, &mut bag).unwrap();
        assert_eq!(result.value, Value::numeric("7", "px"));

        let args = [
            Arg::new(Value::numeric("5", "px"), SourceSpan::new(4, 7)),
            Arg::new(Value::string("5px"), SourceSpan::new(9, 14)),
        ];
        let err = ADD.call(&args, &mut bag).unwrap_err();
        assert!(matches!(
            err.kind,
            FunctionErrorKind::ArgumentKind { position: 2, .. }
        ));
        assert_eq!(bag.take()[0].span, Some(SourceSpan::new(9, 14)));
    }
}
