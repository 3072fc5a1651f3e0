use std::path::Path;

use image::DynamicImage;
use image::GenericImageView;
use log::debug;

use crate::RenderError;

/// Decode an image from disk.
pub fn decode_path<P: AsRef<Path>>(path: P) -> Result<DynamicImage, RenderError> {
    let path = path.as_ref();
    let image = image::open(path)?;
    let (width, height) = image.dimensions();
    debug!("decoded {}: {}x{}", path.display(), width, height);
    Ok(image)
}

/// Decode an image from an in-memory encoded byte slice, e.g. an upload.
pub fn decode_bytes(bytes: &[u8]) -> Result<DynamicImage, RenderError> {
    let image = image::load_from_memory(bytes)?;
    let (width, height) = image.dimensions();
    debug!("decoded {} bytes: {}x{}", bytes.len(), width, height);
    Ok(image)
}
