//! Marker icon resolution and the bitmap operations applied to icons before
//! they reach the surface.

use gfm_core::Color;
use image::imageops::{self, FilterType};
use image::Rgba;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

pub use image::RgbaImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconId(pub u32);

impl IconId {
    /// Stock location pin. As a center icon it means "use the surface's own
    /// marker icon".
    pub const LOCATION_PIN: IconId = IconId(1);
}

pub trait IconSource {
    fn resolve(&self, id: IconId) -> Option<Arc<RgbaImage>>;
}

/// In-memory icon registry.
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    icons: HashMap<IconId, Arc<RgbaImage>>,
}

impl IconSet {
    pub const PIN_SIZE_PX: u32 = 48;

    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with [`IconId::LOCATION_PIN`].
    pub fn standard() -> Self {
        let mut set = Self::new();
        set.insert(
            IconId::LOCATION_PIN,
            location_pin(Self::PIN_SIZE_PX, Color::RED),
        );
        set
    }

    pub fn insert(&mut self, id: IconId, bitmap: RgbaImage) {
        self.icons.insert(id, Arc::new(bitmap));
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl IconSource for IconSet {
    fn resolve(&self, id: IconId) -> Option<Arc<RgbaImage>> {
        self.icons.get(&id).cloned()
    }
}

/// Paints every pixel with `color`, keeping the source alpha as a mask
/// (Porter-Duff SRC_IN).
pub fn tint(bitmap: &RgbaImage, color: Color) -> RgbaImage {
    let [r, g, b, a] = color.to_rgba();
    let mut out = bitmap.clone();
    for pixel in out.pixels_mut() {
        let alpha = (u16::from(pixel[3]) * u16::from(a) / 255) as u8;
        *pixel = Rgba([r, g, b, alpha]);
    }
    out
}

/// Draws `bitmap` stretched over a square canvas of `px` pixels.
pub fn fit_canvas(bitmap: &RgbaImage, px: u32) -> RgbaImage {
    imageops::resize(bitmap, px, px, FilterType::Triangle)
}

/// Scales `bitmap` to `px`×`px` and clips it to a rounded square whose corner
/// radius is `px`, clamped to half the side: a disc.
pub fn rounded_corners(bitmap: &RgbaImage, px: u32) -> RgbaImage {
    rounded_corners_with_radius(bitmap, px, px as f32)
}

pub fn rounded_corners_with_radius(bitmap: &RgbaImage, px: u32, corner_radius: f32) -> RgbaImage {
    let mut out = imageops::resize(bitmap, px, px, FilterType::Nearest);
    let side = px as f32;
    let radius = corner_radius.clamp(0.0, side / 2.0);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        let cx = x as f32 + 0.5;
        let cy = y as f32 + 0.5;
        let dx = (radius - cx).max(cx - (side - radius)).max(0.0);
        let dy = (radius - cy).max(cy - (side - radius)).max(0.0);
        if dx * dx + dy * dy > radius * radius {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }
    out
}

/// Copies `base` and draws `top` over it at (`offset_px`, `offset_px`).
pub fn overlay(base: &RgbaImage, top: &RgbaImage, offset_px: u32) -> RgbaImage {
    let mut out = base.clone();
    imageops::overlay(&mut out, top, i64::from(offset_px), i64::from(offset_px));
    out
}

/// A filled disc with a white dot in the middle.
pub fn location_pin(px: u32, color: Color) -> RgbaImage {
    let fill = Rgba(color.to_rgba());
    let dot = Rgba(Color::WHITE.to_rgba());
    let half = px as f32 / 2.0;
    let outer = half - 1.0;
    let inner = half / 3.0;
    RgbaImage::from_fn(px, px, |x, y| {
        let dx = x as f32 + 0.5 - half;
        let dy = y as f32 + 0.5 - half;
        let distance = (dx * dx + dy * dy).sqrt();
        if distance <= inner {
            dot
        } else if distance <= outer {
            fill
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}
