use gfm_core::Color;
use gfm_geo::LatLng;
use image::RgbaImage;
use std::fmt;
use std::sync::Arc;

/// Point of the icon, in icon-relative units, pinned to the marker position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Anchor {
    pub const CENTER: Anchor = Anchor {
        horizontal: 0.5,
        vertical: 0.5,
    };

    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self::CENTER
    }
}

#[derive(Clone, PartialEq, Default)]
pub enum MarkerIcon {
    /// Whatever pin the surface draws for markers without an icon.
    #[default]
    Default,
    Bitmap(Arc<RgbaImage>),
}

impl fmt::Debug for MarkerIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "Default"),
            Self::Bitmap(bitmap) => write!(f, "Bitmap({}x{})", bitmap.width(), bitmap.height()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerOptions {
    pub position: LatLng,
    pub draggable: bool,
    pub flat: bool,
    pub anchor: Anchor,
    pub icon: MarkerIcon,
}

impl MarkerOptions {
    pub fn new(position: LatLng) -> Self {
        Self {
            position,
            draggable: false,
            flat: false,
            anchor: Anchor::CENTER,
            icon: MarkerIcon::Default,
        }
    }

    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn flat(mut self, flat: bool) -> Self {
        self.flat = flat;
        self
    }

    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn icon(mut self, icon: MarkerIcon) -> Self {
        self.icon = icon;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CircleOptions {
    pub center: LatLng,
    pub radius_m: f64,
    pub stroke_width: f32,
    pub stroke_color: Color,
    pub fill_color: Color,
}
