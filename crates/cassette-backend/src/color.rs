//! Color utilities for cassette generation.
//!
//! Palette colors and pixel map entries are 8-bit [`Rgba8`] values. HSV math
//! runs on the floating-point [`Color`] and is quantized back with rounding.

use cassette_spec::RgbTriple;

use crate::rng::RandomSource;

/// Value added by [`lighten`].
pub const LIGHTEN_VALUE: f64 = 0.20;
/// Saturation added by [`lighten`].
pub const LIGHTEN_SATURATION: f64 = 0.10;
/// Value removed by [`darken`].
pub const DARKEN_VALUE: f64 = 0.10;
/// Saturation removed by [`darken`].
pub const DARKEN_SATURATION: f64 = 0.05;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    /// Fully transparent black, used for holes.
    pub const TRANSPARENT: Rgba8 = Rgba8::new(0, 0, 0, 0);

    /// Create a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// True when alpha is zero.
    pub fn is_transparent(&self) -> bool {
        self.a == 0
    }

    /// True when alpha is 255.
    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Channels as `[r, g, b, a]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<RgbTriple> for Rgba8 {
    fn from(rgb: RgbTriple) -> Self {
        Self::opaque(rgb[0], rgb[1], rgb[2])
    }
}

/// RGBA color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a new color with alpha = 1.0.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from HSV values.
    /// - h: hue in degrees (0-360)
    /// - s: saturation (0-1)
    /// - v: value/brightness (0-1)
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        if s <= 0.0 {
            return Self::rgb(v, v, v);
        }

        let h = h % 360.0;
        let h = if h < 0.0 { h + 360.0 } else { h };
        let h = h / 60.0;

        let i = h.floor() as i32;
        let f = h - i as f64;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        match i {
            0 => Self::rgb(v, t, p),
            1 => Self::rgb(q, v, p),
            2 => Self::rgb(p, v, t),
            3 => Self::rgb(p, q, v),
            4 => Self::rgb(t, p, v),
            _ => Self::rgb(v, p, q),
        }
    }

    /// Convert to HSV values.
    /// Returns (hue in degrees 0-360, saturation 0-1, value 0-1).
    pub fn to_hsv(&self) -> (f64, f64, f64) {
        let max = self.r.max(self.g).max(self.b);
        let min = self.r.min(self.g).min(self.b);
        let delta = max - min;

        let v = max;

        if delta < 1e-10 {
            return (0.0, 0.0, v);
        }

        let s = delta / max;

        let h = if (self.r - max).abs() < 1e-10 {
            (self.g - self.b) / delta
        } else if (self.g - max).abs() < 1e-10 {
            2.0 + (self.b - self.r) / delta
        } else {
            4.0 + (self.r - self.g) / delta
        };

        let h = h * 60.0;
        let h = if h < 0.0 { h + 360.0 } else { h };

        (h, s, v)
    }

    /// Clamp all components to [0.0, 1.0].
    pub fn clamp(&self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Convert to 8-bit RGBA.
    pub fn to_rgba8(&self) -> Rgba8 {
        let c = self.clamp();
        Rgba8::new(
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
            (c.a * 255.0).round() as u8,
        )
    }

    /// Create from 8-bit RGBA.
    pub fn from_rgba8(rgba: Rgba8) -> Self {
        Self {
            r: rgba.r as f64 / 255.0,
            g: rgba.g as f64 / 255.0,
            b: rgba.b as f64 / 255.0,
            a: rgba.a as f64 / 255.0,
        }
    }
}

/// Shift saturation and value by the given deltas, clamped to [0, 1].
/// Alpha is carried over unchanged.
pub fn shift_hsv(color: Rgba8, saturation_delta: f64, value_delta: f64) -> Rgba8 {
    let (h, s, v) = Color::from_rgba8(color).to_hsv();
    let s = (s + saturation_delta).clamp(0.0, 1.0);
    let v = (v + value_delta).clamp(0.0, 1.0);

    let shifted = Color::from_hsv(h, s, v).to_rgba8();
    Rgba8 { a: color.a, ..shifted }
}

/// Brighter, slightly more saturated variant. Used for corner accents.
pub fn lighten(color: Rgba8) -> Rgba8 {
    shift_hsv(color, LIGHTEN_SATURATION, LIGHTEN_VALUE)
}

/// Darker, slightly less saturated variant. Used for the bottom line.
pub fn darken(color: Rgba8) -> Rgba8 {
    shift_hsv(color, -DARKEN_SATURATION, -DARKEN_VALUE)
}

/// Random opaque color. Channels are drawn from `[0, 255)`, so 255 itself
/// never appears in a sampled channel.
pub fn random_opaque<R: RandomSource + ?Sized>(rng: &mut R) -> Rgba8 {
    let r = rng.range(0, 255) as u8;
    let g = rng.range(0, 255) as u8;
    let b = rng.range(0, 255) as u8;
    Rgba8::opaque(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::testing::ScriptedRng;
    use crate::rng::DeterministicRng;
    use pretty_assertions::assert_eq;

    fn hsv(c: Rgba8) -> (f64, f64, f64) {
        Color::from_rgba8(c).to_hsv()
    }

    #[test]
    fn test_hsv_roundtrip() {
        let original = Color::rgb(0.8, 0.3, 0.5);
        let (h, s, v) = original.to_hsv();
        let restored = Color::from_hsv(h, s, v);

        assert!((original.r - restored.r).abs() < 1e-6);
        assert!((original.g - restored.g).abs() < 1e-6);
        assert!((original.b - restored.b).abs() < 1e-6);
    }

    #[test]
    fn test_rgba8_roundtrip() {
        let original = Rgba8::new(12, 200, 99, 255);
        assert_eq!(Color::from_rgba8(original).to_rgba8(), original);
    }

    #[test]
    fn test_lighten_known_values() {
        // h = 0, s = 0.5, v = 100/255 -> s = 0.6, v = 151/255
        assert_eq!(lighten(Rgba8::opaque(100, 50, 50)), Rgba8::opaque(151, 60, 60));
        // Gray gains a red tint because its hue reads as 0
        assert_eq!(
            lighten(Rgba8::opaque(128, 128, 128)),
            Rgba8::opaque(179, 161, 161)
        );
    }

    #[test]
    fn test_lighten_clamps_at_white() {
        let c = lighten(Rgba8::opaque(255, 255, 255));
        assert_eq!(c.r, 255);
        assert_eq!(c.g, c.b);
        assert!(c.g < 255);
    }

    #[test]
    fn test_darken_clamps_at_black() {
        assert_eq!(darken(Rgba8::opaque(0, 0, 0)), Rgba8::opaque(0, 0, 0));
    }

    #[test]
    fn test_alpha_preserved() {
        let c = Rgba8::new(90, 140, 200, 77);
        assert_eq!(lighten(c).a, 77);
        assert_eq!(darken(c).a, 77);
    }

    #[test]
    fn test_lighten_and_darken_are_monotonic() {
        let mut rng = DeterministicRng::new(5);
        for _ in 0..500 {
            let c = random_opaque(&mut rng);
            let (_, s, v) = hsv(c);
            let (_, ls, lv) = hsv(lighten(c));
            let (_, ds, dv) = hsv(darken(c));

            assert!(lv >= v, "lighten lowered value of {c:?}");
            assert!(dv <= v, "darken raised value of {c:?}");
            // Quantization jitters saturation slightly on dark colors
            if v > 0.2 {
                assert!(ls + 0.02 >= s, "lighten lowered saturation of {c:?}");
                assert!(ds <= s + 0.02, "darken raised saturation of {c:?}");
            }
        }
    }

    #[test]
    fn test_darken_after_lighten_is_not_identity() {
        let c = Rgba8::opaque(240, 240, 240);
        let back = darken(lighten(c));
        assert_ne!(back, c);
        assert_eq!(darken(lighten(c)), back);
    }

    #[test]
    fn test_random_opaque_uses_scripted_draws() {
        let mut rng = ScriptedRng::new(&[], &[0, 128, 254]);
        assert_eq!(random_opaque(&mut rng), Rgba8::opaque(0, 128, 254));
        assert!(rng.is_exhausted());
    }

    #[test]
    fn test_random_opaque_never_hits_255() {
        let mut rng = DeterministicRng::new(11);
        for _ in 0..2000 {
            let c = random_opaque(&mut rng);
            assert!(c.is_opaque());
            assert!(c.r < 255 && c.g < 255 && c.b < 255);
        }
    }

    #[test]
    fn test_from_triple_is_opaque() {
        assert_eq!(Rgba8::from([1, 2, 3]), Rgba8::new(1, 2, 3, 255));
    }
}
