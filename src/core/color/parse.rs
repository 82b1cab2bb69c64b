//! Textual color syntaxes.
//!
//! Accepted, in order:
//! * `transparent`
//! * `#RGB` / `#RRGGBB` (the `#` is optional)
//! * `rgb(r, g, b)` with integer channels 0-255
//! * `rgba(r, g, b, a)` with alpha 0.0-1.0

use lazy_static::lazy_static;
use regex::Regex;

use super::model::{channel, Color};
use crate::utils::error::{FunctionError, FunctionResult};

lazy_static! {
    static ref RGB_FUNC: Regex =
        Regex::new(r"(?i)^rgb\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*\)$").unwrap();
    static ref RGBA_FUNC: Regex = Regex::new(
        r"(?i)^rgba\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d*\.?\d+)\s*\)$"
    )
    .unwrap();
}

/// Whether `text` names the fully transparent color.
pub fn is_transparent(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("transparent")
}

/// Parse any supported color syntax.
pub fn parse_color(text: &str) -> FunctionResult<Color> {
    let s = text.trim();
    let fail = || FunctionError::color_parse(text);

    if is_transparent(s) {
        return Ok(Color::TRANSPARENT);
    }

    if let Some(color) = parse_hex(s.strip_prefix('#').unwrap_or(s)) {
        return Ok(color);
    }

    if let Some(caps) = RGB_FUNC.captures(s) {
        let r = parse_channel(&caps[1]).ok_or_else(fail)?;
        let g = parse_channel(&caps[2]).ok_or_else(fail)?;
        let b = parse_channel(&caps[3]).ok_or_else(fail)?;
        return Ok(Color::rgb(r, g, b));
    }

    if let Some(caps) = RGBA_FUNC.captures(s) {
        let r = parse_channel(&caps[1]).ok_or_else(fail)?;
        let g = parse_channel(&caps[2]).ok_or_else(fail)?;
        let b = parse_channel(&caps[3]).ok_or_else(fail)?;
        let a = caps[4]
            .parse::<f64>()
            .ok()
            .filter(|a| (0.0..=1.0).contains(a))
            .ok_or_else(fail)?;
        return Ok(Color::rgba(r, g, b, channel(a * 255.0)));
    }

    Err(fail())
}

fn parse_channel(digits: &str) -> Option<u8> {
    digits.parse::<u16>().ok().filter(|&v| v <= 255).map(|v| v as u8)
}

/// Three or six hex digits, no prefix.
fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let pair = |s: &str| u8::from_str_radix(s, 16).ok();

    match hex.len() {
        3 => {
            let r = pair(&hex[0..1].repeat(2))?;
            let g = pair(&hex[1..2].repeat(2))?;
            let b = pair(&hex[2..3].repeat(2))?;
            Some(Color::rgb(r, g, b))
        }
        6 => {
            let r = pair(&hex[0..2])?;
            let g = pair(&hex[2..4])?;
            let b = pair(&hex[4..6])?;
            Some(Color::rgb(r, g, b))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::FunctionErrorKind;

    #[test]
    fn test_hex_forms() {
        assert_eq!(parse_color("#bbb").unwrap(), Color::rgb(0xbb, 0xbb, 0xbb));
        assert_eq!(parse_color("#0088cc").unwrap(), Color::rgb(0, 0x88, 0xcc));
        assert_eq!(parse_color("0088CC").unwrap(), Color::rgb(0, 0x88, 0xcc));
        assert_eq!(parse_color("  #FFF ").unwrap(), Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_rgb_functions() {
        assert_eq!(parse_color("rgb(1, 2, 3)").unwrap(), Color::rgb(1, 2, 3));
        assert_eq!(parse_color("RGB(1,2,3)").unwrap(), Color::rgb(1, 2, 3));
        assert_eq!(
            parse_color("rgba(90, 23, 148, 0.5)").unwrap(),
            Color::rgba(90, 23, 148, 128)
        );
        assert_eq!(parse_color("rgba(0,0,0,1)").unwrap().a, 255);
        assert_eq!(parse_color("rgba(0,0,0,.25)").unwrap().a, 64);
    }

    #[test]
    fn test_transparent() {
        assert_eq!(parse_color("transparent").unwrap(), Color::TRANSPARENT);
        assert!(is_transparent(" Transparent "));
    }

    #[test]
    fn test_rejects() {
        for bad in [
            "", "#12", "#1234", "#ggg", "rgb(256,0,0)", "rgb(1,2)", "rgba(1,2,3,1.5)",
            "red", "hsl(0,0%,0%)",
        ] {
            let err = parse_color(bad).unwrap_err();
            assert_eq!(err.kind, FunctionErrorKind::ColorParse(bad.to_string()), "{bad}");
        }
    }
}
