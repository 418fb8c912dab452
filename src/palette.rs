pub mod dataset;
pub mod tables;

use crate::error::SegmentationError;
use crate::postprocess::class_map::ClassMap;
use dataset::Dataset;
use image::{Rgb, RgbImage};

/// Render a class map with the dataset's palette. Any class outside the
/// dataset vocabulary is an error rather than a fallback color.
pub fn colorize(class_map: &ClassMap, dataset: Dataset) -> Result<RgbImage, SegmentationError> {
    let mut lut = Vec::with_capacity(dataset.num_classes());
    for class in 0..dataset.num_classes() as u32 {
        lut.push(dataset.color(class)?);
    }

    let mut mask = RgbImage::new(class_map.width(), class_map.height());
    for (pixel, &class) in mask.pixels_mut().zip(class_map.as_slice()) {
        let color = lut
            .get(class as usize)
            .ok_or(SegmentationError::ClassOutOfRange {
                class,
                num_classes: lut.len(),
            })?;
        *pixel = Rgb(*color);
    }

    Ok(mask)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_map_gives_uniform_mask() {
        let class_map = ClassMap::filled(256, 256, 0);

        let mask = colorize(&class_map, Dataset::Ade20k).unwrap();

        assert_eq!(mask.dimensions(), (256, 256));
        assert!(mask.pixels().all(|p| p.0 == tables::ADE20K[0]));
    }

    #[test]
    fn test_colorize_is_deterministic() {
        let class_map = ClassMap::new(3, 2, vec![0, 1, 2, 5, 12, 20]).unwrap();

        let first = colorize(&class_map, Dataset::PascalVoc).unwrap();
        let second = colorize(&class_map, Dataset::PascalVoc).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.get_pixel(1, 0).0, [128, 0, 0]);
        assert_eq!(first.get_pixel(2, 1).0, [0, 64, 128]);
    }

    #[test]
    fn test_out_of_range_class_fails() {
        let class_map = ClassMap::new(2, 1, vec![0, 19]).unwrap();

        let err = colorize(&class_map, Dataset::Cityscapes).unwrap_err();

        assert!(matches!(
            err,
            SegmentationError::ClassOutOfRange {
                class: 19,
                num_classes: 19
            }
        ));
    }
}
