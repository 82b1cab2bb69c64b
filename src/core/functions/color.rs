//! Color functions.
//!
//! Saturation, grayscale and spin work in HSB; lighten and darken work in
//! HSL. The two spaces give different results and are not interchangeable.

use super::signature::{ArgKind, Signature};
use super::value::Output;
use super::{parse_delta, parse_number, Function};
use crate::core::color::model::channel;
use crate::core::color::{is_transparent, parse_color, Color};
use crate::utils::error::{FunctionError, FunctionResult};

const COLOR: Signature = Signature::fixed(&[ArgKind::ColorLike]);
const COLOR_AMOUNT: Signature = Signature::fixed(&[ArgKind::ColorLike, ArgKind::Numeric]);
const TWO_COLORS: Signature = Signature::fixed(&[ArgKind::ColorLike, ArgKind::ColorLike]);
const MIX: Signature =
    Signature::fixed(&[ArgKind::ColorLike, ArgKind::ColorLike, ArgKind::Numeric]);
const HSB_DELTAS: Signature = Signature::fixed(&[
    ArgKind::ColorLike,
    ArgKind::Numeric,
    ArgKind::Numeric,
    ArgKind::Numeric,
]);

pub const SATURATE: Function = Function::new("saturate", COLOR_AMOUNT, saturate);
pub const DESATURATE: Function = Function::new("desaturate", COLOR_AMOUNT, desaturate);
pub const GRAYSCALE: Function = Function::new("grayscale", COLOR, grayscale);
pub const SPIN: Function = Function::new("spin", COLOR_AMOUNT, spin);
pub const LIGHTEN: Function = Function::new("lighten", COLOR_AMOUNT, lighten);
pub const DARKEN: Function = Function::new("darken", COLOR_AMOUNT, darken);
pub const MIX_COLORS: Function = Function::new("mix", MIX, mix);
pub const ARGB: Function = Function::new("argb", COLOR, argb);

// Base set
pub const ADD_HSB: Function = Function::new("addHsbToCssColor", HSB_DELTAS, add_hsb_to_color);
pub const ADJUST_BRIGHTNESS: Function =
    Function::new("adjustBrightness", COLOR_AMOUNT, adjust_brightness);
pub const LIGHTEN_BRIGHTNESS: Function = Function::new("lighten", COLOR_AMOUNT, adjust_brightness);
pub const DARKEN_BRIGHTNESS: Function = Function::new("darken", COLOR_AMOUNT, reduce_brightness);
pub const BLEND_RGB: Function = Function::new("blendColorsRgb", TWO_COLORS, blend_rgb);
pub const MAKE_TRANSLUCENT: Function =
    Function::new("makeTranslucent", COLOR_AMOUNT, make_translucent);

#[derive(Clone, Copy)]
enum Space {
    Hsl,
    Hsb,
}

/// Shift the color in argument 0. `transparent` is returned unchanged in
/// both spaces.
fn shift(base: &str, space: Space, (h, s, x): (i32, i32, i32)) -> FunctionResult<Output> {
    if is_transparent(base) {
        return Ok(Output::Literal(base.trim().to_string()));
    }
    let color = parse_color_arg(base, 0)?;
    let shifted = match space {
        Space::Hsl => color.add_hsl(h, s, x),
        Space::Hsb => color.add_hsb(h, s, x),
    };
    Ok(Output::Color(shifted.to_hex()))
}

fn parse_color_arg(text: &str, index: usize) -> FunctionResult<Color> {
    parse_color(text).map_err(|err| err.at_arg(index))
}

fn saturate(args: &[&str]) -> FunctionResult<Output> {
    let amount = parse_delta(args[1], 1)?;
    shift(args[0], Space::Hsb, (0, amount, 0))
}

fn desaturate(args: &[&str]) -> FunctionResult<Output> {
    let amount = parse_delta(args[1], 1)?;
    shift(args[0], Space::Hsb, (0, amount.saturating_neg(), 0))
}

fn grayscale(args: &[&str]) -> FunctionResult<Output> {
    shift(args[0], Space::Hsb, (0, -100, 0))
}

fn spin(args: &[&str]) -> FunctionResult<Output> {
    let degrees = parse_delta(args[1], 1)?;
    shift(args[0], Space::Hsb, (degrees, 0, 0))
}

fn lighten(args: &[&str]) -> FunctionResult<Output> {
    let amount = parse_delta(args[1], 1)?;
    shift(args[0], Space::Hsl, (0, 0, amount))
}

fn darken(args: &[&str]) -> FunctionResult<Output> {
    let amount = parse_delta(args[1], 1)?;
    shift(args[0], Space::Hsl, (0, 0, amount.saturating_neg()))
}

/// `mix(a, b, p)`: `p` percent of `a`, the rest of `b`.
fn mix(args: &[&str]) -> FunctionResult<Output> {
    let percent = parse_number(args[2], 2)?;
    let start = parse_color_arg(args[0], 0)?;
    let end = parse_color_arg(args[1], 1)?;
    Ok(Output::Color(start.blend(end, percent / 100.0).to_hex()))
}

fn argb(args: &[&str]) -> FunctionResult<Output> {
    let color = parse_color_arg(args[0], 0)?;
    Ok(Output::Literal(color.to_argb_hex()))
}

fn add_hsb_to_color(args: &[&str]) -> FunctionResult<Output> {
    let hue = parse_delta(args[1], 1)?;
    let saturation = parse_delta(args[2], 2)?;
    let brightness = parse_delta(args[3], 3)?;
    shift(args[0], Space::Hsb, (hue, saturation, brightness))
}

fn adjust_brightness(args: &[&str]) -> FunctionResult<Output> {
    let amount = parse_delta(args[1], 1)?;
    shift(args[0], Space::Hsb, (0, 0, amount))
}

fn reduce_brightness(args: &[&str]) -> FunctionResult<Output> {
    let amount = parse_delta(args[1], 1)?;
    shift(args[0], Space::Hsb, (0, 0, amount.saturating_neg()))
}

fn blend_rgb(args: &[&str]) -> FunctionResult<Output> {
    let start = parse_color_arg(args[0], 0)?;
    let end = parse_color_arg(args[1], 1)?;
    Ok(Output::Color(start.blend(end, 0.5).to_hex()))
}

fn make_translucent(args: &[&str]) -> FunctionResult<Output> {
    let alpha = parse_number(args[1], 1)?;
    if !(0.0..=1.0).contains(&alpha) {
        return Err(FunctionError::numeric_parse(args[1]).at_arg(1));
    }
    let color = parse_color_arg(args[0], 0)?;
    Ok(Output::Literal(
        color.with_alpha(channel(alpha * 255.0)).to_rgba_css(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FunctionErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_lighten_darken() {
        assert_eq!(LIGHTEN.call_text(&["#333333", "15"]).unwrap(), "#595959");
        assert_eq!(DARKEN.call_text(&["#bbb", "10"]).unwrap(), "#A1A1A1");
        assert_eq!(DARKEN.call_text(&["#999999", "10"]).unwrap(), "#7F7F7F");
        assert_eq!(DARKEN.call_text(&["#0088cc", "15"]).unwrap(), "#00547F");
    }

    #[test]
    fn test_lighten_rejects_fractional_amount() {
        let err = LIGHTEN.call_text(&["#333", "1.5"]).unwrap_err();
        assert_eq!(err.kind, FunctionErrorKind::NumericParse("1.5".into()));
        assert_eq!(err.arg, Some(1));
    }

    #[test]
    fn test_spin() {
        assert_eq!(SPIN.call_text(&["#0088cc", "20"]).unwrap(), "#0044CC");
        assert_eq!(SPIN.call_text(&["#0088cc", "360"]).unwrap(), "#0088CC");
    }

    #[test]
    fn test_saturation_family() {
        assert_eq!(GRAYSCALE.call_text(&["#0088cc"]).unwrap(), "#CCCCCC");
        assert_eq!(DESATURATE.call_text(&["#0088cc", "100"]).unwrap(), "#CCCCCC");
        // 50% saturated at brightness 0.8: p = 0.4
        assert_eq!(DESATURATE.call_text(&["#0088cc", "50"]).unwrap(), "#66AACC");
        assert_eq!(SATURATE.call_text(&["#66AACC", "50"]).unwrap(), "#0088CC");
    }

    #[test]
    fn test_transparent_passes_through_both_spaces() {
        assert_eq!(LIGHTEN.call_text(&["transparent", "10"]).unwrap(), "transparent");
        assert_eq!(SATURATE.call_text(&["transparent", "10"]).unwrap(), "transparent");
        assert_eq!(SPIN.call_text(&["transparent", "90"]).unwrap(), "transparent");
    }

    #[test]
    fn test_mix() {
        assert_eq!(
            MIX_COLORS.call_text(&["#ff0000", "#0000ff", "50"]).unwrap(),
            "#800080"
        );
        assert_eq!(
            MIX_COLORS.call_text(&["#ff0000", "#0000ff", "100"]).unwrap(),
            "#FF0000"
        );
        assert_eq!(
            MIX_COLORS.call_text(&["#ff0000", "#0000ff", "0"]).unwrap(),
            "#0000FF"
        );
    }

    #[test]
    fn test_mix_bad_color() {
        let err = MIX_COLORS
            .call_text(&["#ff0000", "notacolor", "50"])
            .unwrap_err();
        assert_eq!(err.kind, FunctionErrorKind::ColorParse("notacolor".into()));
        assert_eq!(err.arg, Some(1));
    }

    #[test]
    fn test_argb() {
        assert_eq!(
            ARGB.call_text(&["rgba(90, 23, 148, 0.5)"]).unwrap(),
            "#805A1794"
        );
        assert_eq!(ARGB.call_text(&["#0088cc"]).unwrap(), "#FF0088CC");
    }

    #[test]
    fn test_base_helpers() {
        assert_eq!(
            ADD_HSB.call_text(&["#0088cc", "20", "0", "0"]).unwrap(),
            "#0044CC"
        );
        assert_eq!(
            DARKEN_BRIGHTNESS.call_text(&["#0088cc", "100"]).unwrap(),
            "#000000"
        );
        assert_eq!(
            BLEND_RGB.call_text(&["#ff0000", "#0000ff"]).unwrap(),
            "#800080"
        );
        assert_eq!(
            MAKE_TRANSLUCENT.call_text(&["#0088cc", "0.5"]).unwrap(),
            "rgba(0,136,204,0.502)"
        );
        assert!(MAKE_TRANSLUCENT.call_text(&["#0088cc", "2"]).is_err());
    }
}
