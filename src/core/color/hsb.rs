use super::model::Color;
use super::shift_components;

/// Hue, saturation and brightness (HSV), each in `0.0..=1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsb {
    pub h: f32,
    pub s: f32,
    pub b: f32,
}

impl Hsb {
    pub fn new(h: f32, s: f32, b: f32) -> Self {
        Self { h, s, b }
    }

    pub fn from_color(color: Color) -> Self {
        let (r, g, b) = (color.r as i32, color.g as i32, color.b as i32);
        let cmax = r.max(g).max(b);
        let cmin = r.min(g).min(b);

        let brightness = cmax as f32 / 255.0;
        let saturation = if cmax != 0 {
            (cmax - cmin) as f32 / cmax as f32
        } else {
            0.0
        };

        let hue = if saturation == 0.0 {
            0.0
        } else {
            let range = (cmax - cmin) as f32;
            let redc = (cmax - r) as f32 / range;
            let greenc = (cmax - g) as f32 / range;
            let bluec = (cmax - b) as f32 / range;
            let mut hue = if r == cmax {
                bluec - greenc
            } else if g == cmax {
                2.0 + redc - bluec
            } else {
                4.0 + greenc - redc
            };
            hue /= 6.0;
            if hue < 0.0 {
                hue += 1.0;
            }
            hue
        };

        Self::new(hue, saturation, brightness)
    }

    pub fn to_color(self) -> Color {
        // truncation after +0.5, channels are never negative here
        let scale = |v: f32| (v * 255.0 + 0.5) as u8;
        let Hsb { h, s, b } = self;

        if s == 0.0 {
            let v = scale(b);
            return Color::rgb(v, v, v);
        }

        let sector = (h - h.floor()) * 6.0;
        let f = sector - sector.floor();
        let p = b * (1.0 - s);
        let q = b * (1.0 - s * f);
        let t = b * (1.0 - (s * (1.0 - f)));

        let (r, g, bl) = match sector as i32 {
            0 => (b, t, p),
            1 => (q, b, p),
            2 => (p, b, t),
            3 => (p, q, b),
            4 => (t, p, b),
            _ => (b, p, q),
        };
        Color::rgb(scale(r), scale(g), scale(bl))
    }

    /// Add degrees of hue and percentage points of saturation and brightness.
    #[must_use]
    pub fn shifted(self, hue: i32, saturation: i32, brightness: i32) -> Self {
        let (h, s, b) = shift_components(
            (self.h, self.s, self.b),
            (hue, saturation, brightness),
        );
        Self::new(h, s, b)
    }
}

impl Color {
    /// Shift this color in HSB space.
    #[must_use]
    pub fn add_hsb(self, hue: i32, saturation: i32, brightness: i32) -> Color {
        Hsb::from_color(self)
            .shifted(hue, saturation, brightness)
            .to_color()
            .with_alpha(self.a)
    }
}
