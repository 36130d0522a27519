//! Color type used by the shell renderer.
//!
//! Colors are stored premultiplied in linear space, which is what the
//! blend state expects; constructors accept the sRGB u8 values that theme
//! tables are written in.

use palette::{FromColor, LinSrgba, Srgba};

/// A premultiplied linear RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Create from sRGB u8 RGBA (premultiplied in linear space).
    #[inline]
    pub fn from_srgba_u8(c: [u8; 4]) -> Self {
        let s = Srgba::new(
            c[0] as f32 / 255.0,
            c[1] as f32 / 255.0,
            c[2] as f32 / 255.0,
            c[3] as f32 / 255.0,
        );
        let lin: LinSrgba = LinSrgba::from_color(s);
        Self {
            r: lin.red * lin.alpha,
            g: lin.green * lin.alpha,
            b: lin.blue * lin.alpha,
            a: lin.alpha,
        }
    }

    /// CSS-like constructor: sRGB u8 RGB with float alpha.
    #[inline]
    pub fn from_srgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        let s = Srgba::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a);
        let lin: LinSrgba = LinSrgba::from_color(s);
        Self {
            r: lin.red * lin.alpha,
            g: lin.green * lin.alpha,
            b: lin.blue * lin.alpha,
            a: lin.alpha,
        }
    }

    /// HSL constructor (hue in degrees, s/l in 0..=1), for the generated
    /// sticky-note gradients.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let hsl = palette::Hsl::new(hue, saturation, lightness);
        let srgb = palette::Srgb::from_color(hsl);
        let lin: LinSrgba = LinSrgba::from_color(Srgba::new(srgb.red, srgb.green, srgb.blue, 1.0));
        Self {
            r: lin.red,
            g: lin.green,
            b: lin.blue,
            a: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_white_is_identity() {
        let c = Color::from_srgba_u8([255, 255, 255, 255]);
        assert!((c.r - 1.0).abs() < 1e-4);
        assert!((c.g - 1.0).abs() < 1e-4);
        assert!((c.b - 1.0).abs() < 1e-4);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_alpha_premultiplies() {
        let c = Color::from_srgba_u8([255, 255, 255, 128]);
        let a = 128.0 / 255.0;
        assert!((c.a - a).abs() < 1e-4);
        assert!((c.r - a).abs() < 1e-3);
    }

    #[test]
    fn test_hsl_full_lightness_is_white() {
        let c = Color::from_hsl(200.0, 0.7, 1.0);
        assert!((c.r - 1.0).abs() < 1e-3);
        assert!((c.b - 1.0).abs() < 1e-3);
    }
}
