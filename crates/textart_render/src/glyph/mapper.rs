use super::grid::TextGrid;
use super::RenderMode;
use crate::image_pipeline::sampler::PixelBuffer;
use crate::RenderOptions;

/// Walks a pixel buffer at the mode's stride and quantizes each sampled
/// brightness to a glyph.
///
/// Every mode samples the single pixel at the block origin. For
/// [`RenderMode::Pixel`] that means the top-left pixel of each 10x10 block
/// stands in for the whole block; this mirrors the behavior the renderer was
/// ported from and is kept as documented behavior rather than averaged.
pub struct GlyphMapper<'a> {
    options: &'a RenderOptions,
}

impl<'a> GlyphMapper<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, buffer: &PixelBuffer, mode: RenderMode) -> TextGrid {
        let (row_stride, col_stride) = mode.strides();
        let width = buffer.width() as usize;
        let height = buffer.height() as usize;
        let columns = width.div_ceil(col_stride);

        let mut lines = Vec::with_capacity(height.div_ceil(row_stride));
        for y in (0..height).step_by(row_stride) {
            let mut line = String::with_capacity(columns);
            for x in (0..width).step_by(col_stride) {
                let brightness = buffer.brightness(x as u32, y as u32);
                line.push(self.glyph_for(mode, brightness));
            }
            lines.push(line);
        }

        TextGrid::new(lines)
    }

    fn glyph_for(&self, mode: RenderMode, brightness: f32) -> char {
        match mode {
            RenderMode::Ascii => self.options.ascii_palette.glyph_for(brightness),
            RenderMode::Dot => self.options.dot_ladder.glyph_for(brightness),
            RenderMode::Pixel => self.options.pixel_ladder.glyph_for(brightness),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_buffer(width: u32, height: u32, rgba: [u8; 4]) -> PixelBuffer {
        let data = rgba.repeat((width * height) as usize);
        PixelBuffer::new(width, height, data)
    }

    fn mapper_render(buffer: &PixelBuffer, mode: RenderMode) -> TextGrid {
        let options = RenderOptions::default();
        GlyphMapper::new(&options).render(buffer, mode)
    }

    #[test]
    fn solid_black_dot_grid() {
        let buffer = solid_buffer(4, 4, [0, 0, 0, 255]);
        let grid = mapper_render(&buffer, RenderMode::Dot);
        assert_eq!(grid.to_string(), "●●\n●●\n");
    }

    #[test]
    fn ascii_visits_every_column_and_every_other_row() {
        let buffer = solid_buffer(6, 6, [255, 255, 255, 255]);
        let grid = mapper_render(&buffer, RenderMode::Ascii);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 6);
        assert!(grid.lines().all(|line| line == "      "));
    }

    #[test]
    fn partial_trailing_row_and_column_are_sampled() {
        // 5x5 with 2x2 stride visits offsets 0, 2 and 4 on both axes.
        let buffer = solid_buffer(5, 5, [0, 0, 0, 255]);
        let grid = mapper_render(&buffer, RenderMode::Dot);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.width(), 3);
    }

    #[test]
    fn pixel_mode_samples_block_origin_only() {
        // Black top-left pixel in an otherwise white 10x10 block.
        let mut data = [255u8; 10 * 10 * 4].to_vec();
        data[0] = 0;
        data[1] = 0;
        data[2] = 0;
        let buffer = PixelBuffer::new(10, 10, data);

        let grid = mapper_render(&buffer, RenderMode::Pixel);
        assert_eq!(grid.to_string(), "█\n");
    }

    #[test]
    fn alpha_does_not_affect_brightness() {
        let opaque = solid_buffer(4, 4, [120, 120, 120, 255]);
        let transparent = solid_buffer(4, 4, [120, 120, 120, 0]);
        assert_eq!(
            mapper_render(&opaque, RenderMode::Dot),
            mapper_render(&transparent, RenderMode::Dot)
        );
    }
}
