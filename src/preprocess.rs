pub mod image;
pub mod preset;

use crate::error::SegmentationError;
use ::image::{ImageReader, RgbImage};
use std::path::Path;

/// Decode any supported raster format into 8-bit RGB.
pub fn decode_image(path: &Path) -> Result<RgbImage, SegmentationError> {
    let reader = ImageReader::open(path)
        .map_err(|e| SegmentationError::io(path, e))?
        .with_guessed_format()
        .map_err(|e| SegmentationError::io(path, e))?;

    let image = reader.decode().map_err(|source| SegmentationError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(image.into_rgb8())
}
