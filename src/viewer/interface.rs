use crate::error::SegmentationError;
use image::RgbImage;

/// Presents the source image next to its colorized mask.
pub trait Viewer: Send + Sync {
    fn show(&self, original: &RgbImage, mask: &RgbImage) -> Result<(), SegmentationError>;
}
