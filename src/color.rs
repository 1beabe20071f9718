//! Color interchange for [`Vector4`] values holding linear or sRGB RGBA
//! components in `[0, 1]`.
//!
//! Hue is expressed as a fraction of a full turn in `[0, 1)`, and
//! saturation, lightness and value in `[0, 1]`.

use crate::vector4::Vector4;

const ONE_THIRD: f32 = 1.0 / 3.0;
const ONE_SIXTH: f32 = 1.0 / 6.0;
const TWO_THIRDS: f32 = 2.0 / 3.0;

/// Converts a linear color component to the sRGB transfer curve.
#[inline]
pub fn linear_to_srgb(linear_value: f32) -> f32 {
    if linear_value <= 0.0031308 {
        linear_value * 12.92
    } else {
        (linear_value.abs().powf(1.0 / 2.4) * 1.055) - 0.055
    }
}

/// Converts an sRGB-encoded color component to linear.
#[inline]
pub fn srgb_to_linear(srgb_value: f32) -> f32 {
    if srgb_value <= 0.04045 {
        srgb_value / 12.92
    } else {
        ((srgb_value.abs() + 0.055) / 1.055).powf(2.4)
    }
}

impl Vector4 {
    /// Creates a color from red, green and blue components, with alpha set
    /// to one.
    #[inline]
    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    #[inline]
    pub fn r(&self) -> f32 {
        self.x()
    }

    #[inline]
    pub fn g(&self) -> f32 {
        self.y()
    }

    #[inline]
    pub fn b(&self) -> f32 {
        self.z()
    }

    #[inline]
    pub fn a(&self) -> f32 {
        self.w()
    }

    /// Returns the color with its alpha component replaced.
    #[inline]
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self::new(self.r(), self.g(), self.b(), alpha)
    }

    /// Creates a color from 8-bit RGBA components.
    #[inline]
    pub fn from_rgba8([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(
            byte_to_float(r),
            byte_to_float(g),
            byte_to_float(b),
            byte_to_float(a),
        )
    }

    /// Converts the color to 8-bit RGBA components. Components are clamped
    /// to `[0, 1]` and rounded to the nearest byte value.
    #[inline]
    pub fn to_rgba8(&self) -> [u8; 4] {
        self.to_array().map(float_to_byte)
    }

    /// Creates a color from a packed `0xRRGGBBAA` value.
    #[inline]
    pub fn from_hex(hex: u32) -> Self {
        Self::from_rgba8(hex.to_be_bytes())
    }

    /// Creates an opaque color from a packed `0xRRGGBB` value. The highest
    /// byte is ignored.
    #[inline]
    pub fn from_hex_rgb(hex: u32) -> Self {
        let [_, r, g, b] = hex.to_be_bytes();
        Self::from_rgba8([r, g, b, u8::MAX])
    }

    /// Packs the color into a `0xRRGGBBAA` value, quantizing components as
    /// in [`Self::to_rgba8`].
    #[inline]
    pub fn to_hex(&self) -> u32 {
        u32::from_be_bytes(self.to_rgba8())
    }

    /// Converts the red, green and blue components from linear to sRGB.
    /// Alpha is left unchanged.
    #[inline]
    pub fn to_srgb(&self) -> Self {
        Self::new(
            linear_to_srgb(self.r()),
            linear_to_srgb(self.g()),
            linear_to_srgb(self.b()),
            self.a(),
        )
    }

    /// Converts the red, green and blue components from sRGB to linear.
    /// Alpha is left unchanged.
    #[inline]
    pub fn to_linear(&self) -> Self {
        Self::new(
            srgb_to_linear(self.r()),
            srgb_to_linear(self.g()),
            srgb_to_linear(self.b()),
            self.a(),
        )
    }

    /// Creates a color from hue, saturation, lightness and alpha.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32, alpha: f32) -> Self {
        if saturation == 0.0 {
            return Self::new(lightness, lightness, lightness, alpha);
        }

        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        Self::new(
            hue_to_channel(p, q, hue + ONE_THIRD),
            hue_to_channel(p, q, hue),
            hue_to_channel(p, q, hue - ONE_THIRD),
            alpha,
        )
    }

    /// Computes the `(hue, saturation, lightness)` of the color. Alpha is
    /// ignored. Achromatic colors have zero hue and saturation.
    pub fn to_hsl(&self) -> (f32, f32, f32) {
        let (max, min) = self.rgb_extrema();
        let lightness = 0.5 * (max + min);
        let delta = max - min;
        if delta == 0.0 {
            return (0.0, 0.0, lightness);
        }

        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        (self.hue(max, delta), saturation, lightness)
    }

    /// Creates a color from hue, saturation, value and alpha.
    pub fn from_hsv(hue: f32, saturation: f32, value: f32, alpha: f32) -> Self {
        let scaled_hue = hue.rem_euclid(1.0) * 6.0;
        let sector = scaled_hue.floor();
        let f = scaled_hue - sector;

        let p = value * (1.0 - saturation);
        let q = value * (1.0 - f * saturation);
        let t = value * (1.0 - (1.0 - f) * saturation);

        let (r, g, b) = match (sector as u8) % 6 {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            _ => (value, p, q),
        };
        Self::new(r, g, b, alpha)
    }

    /// Computes the `(hue, saturation, value)` of the color. Alpha is
    /// ignored. Achromatic colors have zero hue, and black has zero
    /// saturation.
    pub fn to_hsv(&self) -> (f32, f32, f32) {
        let (max, min) = self.rgb_extrema();
        let delta = max - min;
        let saturation = if max == 0.0 { 0.0 } else { delta / max };
        let hue = if delta == 0.0 {
            0.0
        } else {
            self.hue(max, delta)
        };
        (hue, saturation, max)
    }

    fn rgb_extrema(&self) -> (f32, f32) {
        let max = self.r().max(self.g()).max(self.b());
        let min = self.r().min(self.g()).min(self.b());
        (max, min)
    }

    fn hue(&self, max: f32, delta: f32) -> f32 {
        let (r, g, b) = (self.r(), self.g(), self.b());
        let sextant = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        sextant / 6.0
    }
}

fn hue_to_channel(p: f32, q: f32, hue: f32) -> f32 {
    let t = hue.rem_euclid(1.0);
    if t < ONE_SIXTH {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < TWO_THIRDS {
        p + (q - p) * (TWO_THIRDS - t) * 6.0
    } else {
        p
    }
}

fn byte_to_float(byte: u8) -> f32 {
    f32::from(byte) / 255.0
}

fn float_to_byte(float: f32) -> u8 {
    (float.clamp(0.0, 1.0) * 255.0).round() as u8
}
