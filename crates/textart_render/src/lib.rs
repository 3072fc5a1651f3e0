mod cycle;
mod glyph;
mod image_pipeline;

use std::path::Path;

use image::DynamicImage;

pub use cycle::{Generation, RenderSession};
pub use glyph::{
    grid::TextGrid,
    mapper::GlyphMapper,
    palette::{GradientPalette, ThresholdLadder},
    RenderMode,
};
pub use image_pipeline::sampler::{downscale, PixelBuffer};

use image_pipeline::{loader, sampler};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),
    #[error("invalid image dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("unsupported render mode {0:?}")]
    UnsupportedMode(String),
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Upper bound for the internal canvas on either axis. Smaller sources
    /// are scaled up to it, not just capped.
    pub max_dimension: u32,
    /// Gradient used by [`RenderMode::Ascii`], densest glyph first.
    pub ascii_palette: GradientPalette,
    /// Threshold ladder used by [`RenderMode::Dot`].
    pub dot_ladder: ThresholdLadder,
    /// Threshold ladder used by [`RenderMode::Pixel`].
    pub pixel_ladder: ThresholdLadder,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_dimension: 300,
            ascii_palette: GradientPalette::standard(),
            dot_ladder: ThresholdLadder::dots(),
            pixel_ladder: ThresholdLadder::blocks(),
        }
    }
}

#[derive(Debug, Default)]
pub struct TextArtRenderer {
    options: RenderOptions,
}

impl TextArtRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn render_path<P: AsRef<Path>>(
        &self,
        path: P,
        mode: RenderMode,
    ) -> Result<TextGrid, RenderError> {
        let image = loader::decode_path(path)?;
        self.render_image(&image, mode)
    }

    /// Render an image supplied as raw encoded bytes, e.g. an upload.
    pub fn render_bytes(&self, bytes: &[u8], mode: RenderMode) -> Result<TextGrid, RenderError> {
        let image = loader::decode_bytes(bytes)?;
        self.render_image(&image, mode)
    }

    pub fn render_image(
        &self,
        image: &DynamicImage,
        mode: RenderMode,
    ) -> Result<TextGrid, RenderError> {
        let buffer = sampler::downscale(image, self.options.max_dimension)?;
        let mapper = GlyphMapper::new(&self.options);
        Ok(mapper.render(&buffer, mode))
    }
}
