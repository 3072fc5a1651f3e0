use image::{DynamicImage, GenericImageView, RgbaImage};
use log::debug;

use crate::RenderError;

/// Downscaled RGBA canvas. Samples are row-major, top to bottom, four bytes
/// per pixel. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize * 4,
            "RGBA data length must match dimensions"
        );
        Self { width, height, data }
    }

    pub fn from_image(image: RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let data = image.into_raw();
        Self::new(width, height, data)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        debug_assert!(x < self.width && y < self.height);
        let offset = (y as usize * self.width as usize + x as usize) * 4;
        [self.data[offset], self.data[offset + 1], self.data[offset + 2], self.data[offset + 3]]
    }

    /// Unweighted channel mean in [0, 255]; alpha is ignored.
    pub fn brightness(&self, x: u32, y: u32) -> f32 {
        let [r, g, b, _] = self.rgba(x, y);
        (f32::from(r) + f32::from(g) + f32::from(b)) / 3.0
    }
}

/// Resample `image` into a canvas bounded by `max_dimension` on both axes.
///
/// One scale factor is shared by both axes, so aspect ratio is preserved.
/// Sources smaller than the bound are scaled up on purpose: downstream
/// layout relies on a consistent canvas size regardless of source
/// resolution.
pub fn downscale(image: &DynamicImage, max_dimension: u32) -> Result<PixelBuffer, RenderError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 || max_dimension == 0 {
        return Err(RenderError::InvalidDimensions { width, height });
    }

    let scale = (f64::from(max_dimension) / f64::from(width))
        .min(f64::from(max_dimension) / f64::from(height));
    let target_width = ((f64::from(width) * scale).round() as u32).max(1);
    let target_height = ((f64::from(height) * scale).round() as u32).max(1);

    debug!(
        "resampling {}x{} to {}x{} (scale {:.3})",
        width, height, target_width, target_height, scale
    );

    let resized =
        image.resize_exact(target_width, target_height, image::imageops::FilterType::Triangle);
    Ok(PixelBuffer::from_image(resized.to_rgba8()))
}
