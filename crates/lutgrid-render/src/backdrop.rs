// File: crates/lutgrid-render/src/backdrop.rs
// Summary: Background image placed on a data-space extent beneath the plotted series.

use std::path::Path;

use anyhow::{Context, Result};
use image::RgbaImage;
use skia_safe as skia;

use crate::types::Extent;

/// Which image row sits at `extent.y_max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    /// First row at the top (y_max).
    Upper,
    /// First row at the bottom (y_min).
    Lower,
}

#[derive(Clone)]
pub struct Backdrop {
    pub pixels: RgbaImage,
    pub extent: Extent,
    pub origin: Origin,
}

impl Backdrop {
    pub fn new(pixels: RgbaImage, extent: Extent, origin: Origin) -> Self {
        Self { pixels, extent, origin }
    }

    /// Decode the image at `path`; the format is sniffed from its contents.
    pub fn open(path: impl AsRef<Path>, extent: Extent, origin: Origin) -> Result<Self> {
        let path = path.as_ref();
        let pixels = image::ImageReader::open(path)
            .and_then(|r| r.with_guessed_format())
            .with_context(|| format!("opening background image '{}'", path.display()))?
            .decode()
            .with_context(|| format!("decoding background image '{}'", path.display()))?
            .to_rgba8();
        Ok(Self::new(pixels, extent, origin))
    }

    /// Skia image with rows already in screen order (top row first).
    pub(crate) fn to_skia_image(&self) -> Result<skia::Image> {
        let rows = match self.origin {
            Origin::Upper => self.pixels.clone(),
            Origin::Lower => image::imageops::flip_vertical(&self.pixels),
        };
        let (w, h) = rows.dimensions();
        let info = skia::ImageInfo::new(
            (w as i32, h as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let data = skia::Data::new_copy(rows.as_raw());
        skia::images::raster_from_data(&info, data, w as usize * 4)
            .ok_or_else(|| anyhow::anyhow!("failed to wrap {w}x{h} background as a Skia image"))
    }
}
