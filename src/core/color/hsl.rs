use super::model::{channel, Color};
use super::shift_components;

/// Hue, saturation and lightness, each in `0.0..=1.0` (hue in `0.0..1.0`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

impl Hsl {
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self { h, s, l }
    }

    /// Convert an 8-bit color. `to_color` reverses this exactly.
    pub fn from_color(color: Color) -> Self {
        Self::from_normalized(
            color.r as f32 / 255.0,
            color.g as f32 / 255.0,
            color.b as f32 / 255.0,
        )
    }

    /// Convert channels already scaled into `0.0..=1.0`.
    pub(crate) fn from_normalized(r: f32, g: f32, b: f32) -> Self {
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        // gray: hue is arbitrary
        if r == g && g == b {
            return Self::new(0.0, 0.0, r);
        }

        let l = (min + max) / 2.0;
        let s = if l < 0.5 {
            (max - min) / (max + min)
        } else {
            (max - min) / (2.0 - max - min)
        };

        let mut h = if r == max {
            (g - b) / (max - min)
        } else if g == max {
            2.0 + (b - r) / (max - min)
        } else {
            4.0 + (r - g) / (max - min)
        };
        h /= 6.0;
        if h < 0.0 {
            h += 1.0;
        }

        Self::new(h, s, l)
    }

    pub fn to_color(self) -> Color {
        let Hsl { h, s, l } = self;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let t2 = if l < 0.5 { l * (1.0 + s) } else { (l + s) - (l * s) };
            let t1 = 2.0 * l - t2;

            let mut tr = h + 1.0 / 3.0;
            if tr > 1.0 {
                tr -= 1.0;
            }
            let mut tb = h - 1.0 / 3.0;
            if tb < 0.0 {
                tb += 1.0;
            }

            (
                hue_to_channel(t1, t2, tr),
                hue_to_channel(t1, t2, h),
                hue_to_channel(t1, t2, tb),
            )
        };

        Color::rgb(
            channel((r * 255.0) as f64),
            channel((g * 255.0) as f64),
            channel((b * 255.0) as f64),
        )
    }

    /// Add degrees of hue and percentage points of saturation and lightness.
    #[must_use]
    pub fn shifted(self, hue: i32, saturation: i32, lightness: i32) -> Self {
        let (h, s, l) = shift_components(
            (self.h, self.s, self.l),
            (hue, saturation, lightness),
        );
        Self::new(h, s, l)
    }
}

fn hue_to_channel(t1: f32, t2: f32, t: f32) -> f32 {
    if t < 1.0 / 6.0 {
        t1 + (t2 - t1) * 6.0 * t
    } else if t < 0.5 {
        t2
    } else if t < 2.0 / 3.0 {
        t1 + (t2 - t1) * ((2.0 / 3.0) - t) * 6.0
    } else {
        t1
    }
}

impl Color {
    /// Shift this color in HSL space.
    ///
    /// Channels are normalized over 256 steps on the way in; the lighten and
    /// darken outputs stylesheets already depend on are calibrated to that.
    /// A zero delta returns the color untouched.
    #[must_use]
    pub fn add_hsl(self, hue: i32, saturation: i32, lightness: i32) -> Color {
        if hue == 0 && saturation == 0 && lightness == 0 {
            return self;
        }
        let hsl = Hsl::from_normalized(
            self.r as f32 / 256.0,
            self.g as f32 / 256.0,
            self.b as f32 / 256.0,
        );
        hsl.shifted(hue, saturation, lightness)
            .to_color()
            .with_alpha(self.a)
    }
}
