use std::fmt;

use serde::{Deserialize, Serialize};

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 255,
        }
    }
}

/// Round and clamp a channel computed in floating point.
#[inline]
pub(crate) fn channel(v: f64) -> u8 {
    // NaN casts to 0
    v.round().clamp(0.0, 255.0) as u8
}

impl Color {
    pub const TRANSPARENT: Color = Color {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from wide integers, clamping each into 0..=255.
    pub fn from_clamped(r: i64, g: i64, b: i64) -> Self {
        let c = |v: i64| v.clamp(0, 255) as u8;
        Self::rgb(c(r), c(g), c(b))
    }

    #[must_use]
    pub fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation between two colors.
    ///
    /// `weight` is the share of `self`: 1.0 yields `self`, 0.0 yields
    /// `other`. Each channel is rounded on its own; the result is opaque.
    #[must_use]
    pub fn blend(self, other: Color, weight: f64) -> Color {
        let mix = |a: u8, b: u8| channel(a as f64 * weight + b as f64 * (1.0 - weight));
        Color::rgb(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    /// Canonical `#RRGGBB`, uppercase.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// `#AARRGGBB`, uppercase, alpha first.
    pub fn to_argb_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }

    /// CSS `rgba(r,g,b,a)` with alpha as a fraction.
    pub fn to_rgba_css(self) -> String {
        let alpha = (self.a as f64 / 255.0 * 1000.0).round() / 1000.0;
        format!("rgba({},{},{},{})", self.r, self.g, self.b, alpha)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
