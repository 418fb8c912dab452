pub mod argmax;
pub mod class_map;

use crate::error::SegmentationError;
use crate::library::fs::ensure_parent_dir;
use image::{ImageFormat, RgbImage};
use std::path::Path;

/// Write the mask as PNG, replacing whatever is at `path`.
pub fn save_mask(mask: &RgbImage, path: &Path) -> Result<(), SegmentationError> {
    ensure_parent_dir(path)?;
    mask.save_with_format(path, ImageFormat::Png)
        .map_err(|source| SegmentationError::Write {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use std::fs;

    #[test]
    fn test_save_mask_creates_dirs_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("output.png");

        save_mask(&RgbImage::from_pixel(4, 4, Rgb([1, 2, 3])), &path).unwrap();
        save_mask(&RgbImage::from_pixel(2, 3, Rgb([9, 9, 9])), &path).unwrap();

        let saved = image::open(&path).unwrap().into_rgb8();
        assert_eq!(saved.dimensions(), (2, 3));
        assert_eq!(saved.get_pixel(0, 0).0, [9, 9, 9]);
    }

    #[test]
    fn test_save_mask_into_a_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();

        let err = save_mask(&RgbImage::new(1, 1), &blocker.join("output.png")).unwrap_err();

        assert!(matches!(err, SegmentationError::Io { .. }));
    }
}
