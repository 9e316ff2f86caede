use crate::error::GfmError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Packed `0xAARRGGBB` color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const BLUE: Color = Color(0xFF00_00FF);
    pub const RED: Color = Color(0xFFFF_0000);
    pub const TRANSPARENT: Color = Color(0x0000_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    pub fn with_alpha(self, alpha: u8) -> Self {
        Self::from_argb(alpha, self.red(), self.green(), self.blue())
    }

    /// `[r, g, b, a]`, the channel order of an RGBA bitmap.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.red(), self.green(), self.blue(), self.alpha()]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Color {
    type Err = GfmError;

    /// Accepts `#AARRGGBB`, `0xAARRGGBB` and `#RRGGBB` (opaque).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let digits = trimmed
            .strip_prefix('#')
            .or_else(|| trimmed.strip_prefix("0x"))
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        let parsed = u32::from_str_radix(digits, 16)
            .map_err(|_| GfmError::invalid_input(format!("invalid color value '{value}'")))?;
        match digits.len() {
            8 => Ok(Self(parsed)),
            6 => Ok(Self(0xFF00_0000 | parsed)),
            _ => Err(GfmError::invalid_input(format!(
                "color '{value}' must have 6 or 8 hex digits"
            ))),
        }
    }
}

/// Converts hue (degrees), saturation and value to a packed color.
///
/// Saturation and value are clamped to `[0, 1]`; a hue outside `[0, 360)`
/// is treated as 0.
pub fn hsv_to_color(alpha: u8, hsv: [f32; 3]) -> Color {
    let [hue, saturation, value] = hsv;
    let s = saturation.clamp(0.0, 1.0);
    let v = value.clamp(0.0, 1.0);
    let v_byte = to_byte(v);

    if s <= f32::EPSILON {
        return Color::from_argb(alpha, v_byte, v_byte, v_byte);
    }

    let hx = if !(0.0..360.0).contains(&hue) {
        0.0
    } else {
        hue / 60.0
    };
    let sector = hx.floor();
    let fraction = hx - sector;

    let p = to_byte((1.0 - s) * v);
    let q = to_byte((1.0 - s * fraction) * v);
    let t = to_byte((1.0 - s * (1.0 - fraction)) * v);

    let (r, g, b) = match sector as u8 {
        0 => (v_byte, t, p),
        1 => (q, v_byte, p),
        2 => (p, v_byte, t),
        3 => (p, q, v_byte),
        4 => (t, p, v_byte),
        _ => (v_byte, p, q),
    };
    Color::from_argb(alpha, r, g, b)
}

fn to_byte(unit: f32) -> u8 {
    (unit * 255.0).round() as u8
}
