use crate::constants::{
    CONTRAST_LUMINANCE_THRESHOLD, INK_DARK_HEX, INK_LIGHT_HEX, MIN_VISIBLE_ALPHA,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `0xRRGGBB` to components.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Per-channel linear blend, rounded to the nearest integer.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    pub fn to_css_alpha(self, alpha: f32) -> String {
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, alpha)
    }

    /// WCAG relative luminance in `[0, 1]`.
    pub fn relative_luminance(self) -> f32 {
        fn channel(c: u8) -> f32 {
            let s = c as f32 / 255.0;
            if s <= 0.03928 {
                s / 12.92
            } else {
                ((s + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }
}

/// Ink that stays readable on `background`: dark on light, light on dark.
pub fn contrast_ink(background: Rgb) -> Rgb {
    if background.relative_luminance() > CONTRAST_LUMINANCE_THRESHOLD {
        Rgb::from_hex(INK_DARK_HEX)
    } else {
        Rgb::from_hex(INK_LIGHT_HEX)
    }
}

/// Parse a computed-style colour such as `rgb(12, 34, 56)` or
/// `rgba(12, 34, 56, 0.5)`.
///
/// Channels outside 0..=255 are clamped and fractional ones rounded. Returns
/// `None` for `transparent`, anything unparseable, and colours whose alpha is
/// too low to count as a visible background.
pub fn parse_css_color(input: &str) -> Option<Rgb> {
    let s = input.trim();
    let body = s
        .strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))?
        .strip_suffix(')')?;
    let mut parts = body.split(',').map(str::trim);

    let mut channel = || -> Option<u8> {
        let value = parts.next()?.parse::<f32>().ok().filter(|v| v.is_finite())?;
        Some(value.round().clamp(0.0, 255.0) as u8)
    };
    let (r, g, b) = (channel()?, channel()?, channel()?);

    if let Some(alpha) = parts.next() {
        let alpha = alpha.parse::<f32>().ok()?;
        if alpha < MIN_VISIBLE_ALPHA {
            return None;
        }
    }
    if parts.next().is_some() {
        return None;
    }
    Some(Rgb::new(r, g, b))
}
