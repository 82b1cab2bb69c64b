//! Color model: an 8-bit RGBA color, HSL and HSB conversions, and the
//! textual color syntaxes functions accept.
//!
//! Hue is stored as a fraction of a full turn and wraps; saturation,
//! lightness and brightness clamp to `0.0..=1.0`. Deltas are whole degrees
//! and whole percentage points.

pub mod hsb;
pub mod hsl;
pub mod model;
pub mod parse;

pub use hsb::Hsb;
pub use hsl::Hsl;
pub use model::Color;
pub use parse::{is_transparent, parse_color};

/// Apply hue/saturation/third-component deltas to a triple.
///
/// The arithmetic runs in `f64` and is stored back as `f32`, the precision
/// the reference outputs were produced with.
pub(crate) fn shift_components(
    (h, s, x): (f32, f32, f32),
    (dh, ds, dx): (i32, i32, i32),
) -> (f32, f32, f32) {
    let mut h = (h as f64 + dh as f64 / 360.0) as f32;
    h -= h.floor();
    let s = (s as f64 + ds as f64 / 100.0).clamp(0.0, 1.0) as f32;
    let x = (x as f64 + dx as f64 / 100.0).clamp(0.0, 1.0) as f32;
    (h, s, x)
}
