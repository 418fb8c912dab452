use crate::device::Device;
use crate::predictor::interface::InputTensor;
use crate::preprocess::preset::PresetTransform;
use image::{imageops, RgbImage};
use tract_onnx::prelude::tract_ndarray::Array4;

pub fn resize_image(image: &RgbImage, width: u32, height: u32) -> RgbImage {
    if image.width() == width && image.height() == height {
        return image.clone();
    }
    imageops::resize(image, width, height, imageops::FilterType::Triangle)
}

fn image_to_tensor(image: &RgbImage, preset: &PresetTransform) -> Array4<f32> {
    let (width, height) = (image.width() as usize, image.height() as usize);

    Array4::from_shape_fn((1, 3, height, width), |(_, c, y, x)| {
        let pixel = image.get_pixel(x as u32, y as u32);
        preset.normalize(c, pixel[c])
    })
}

pub fn apply_preset(image: &RgbImage, preset: &PresetTransform, device: Device) -> InputTensor {
    let resized = resize_image(image, preset.input_width, preset.input_height);
    let data = image_to_tensor(&resized, preset);

    InputTensor { data, device }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn preset() -> &'static PresetTransform {
        PresetTransform::by_name("voc_480").unwrap()
    }

    #[test]
    fn test_apply_preset_square() {
        let image = RgbImage::from_pixel(100, 100, Rgb([255, 0, 0]));

        let tensor = apply_preset(&image, preset(), Device::Cpu);

        assert_eq!(tensor.data.shape(), &[1, 3, 480, 480]);
        assert_eq!(tensor.spatial_size(), (480, 480));
        assert_eq!(tensor.device, Device::Cpu);

        let red = tensor.data[[0, 0, 0, 0]];
        let green = tensor.data[[0, 1, 0, 0]];
        assert!((red - (1.0 - 0.485) / 0.229).abs() < 1e-4);
        assert!((green - (-0.456 / 0.224)).abs() < 1e-4);
    }

    #[test]
    fn test_apply_preset_stretches_rectangle() {
        let image = RgbImage::from_pixel(200, 100, Rgb([0, 0, 255]));

        let tensor = apply_preset(&image, preset(), Device::Accelerator(0));

        assert_eq!(tensor.data.shape(), &[1, 3, 480, 480]);
        let blue = tensor.data[[0, 2, 479, 479]];
        assert!((blue - (1.0 - 0.406) / 0.225).abs() < 1e-4);
    }

    #[test]
    fn test_layout_is_channel_first() {
        let mut image = RgbImage::from_pixel(480, 480, Rgb([0, 0, 0]));
        image.put_pixel(3, 1, Rgb([255, 255, 255]));

        let tensor = apply_preset(&image, preset(), Device::Cpu);

        for c in 0..3 {
            assert!(tensor.data[[0, c, 1, 3]] > 0.0);
            assert!(tensor.data[[0, c, 3, 1]] < 0.0);
        }
    }
}
