use crate::device::Device;
use crate::error::SegmentationError;
use crate::postprocess::argmax::argmax;
use crate::predictor::interface::{InputTensor, ModelLoader};
use crate::predictor::models::model_registry::lookup;
use crate::predictor::test::fixture::Fixture;
use crate::preprocess::image::apply_preset;
use crate::preprocess::preset::PresetTransform;
use image::{Rgb, RgbImage};
use tract_onnx::prelude::tract_ndarray::Array4;

const MODEL: &str = "fcn_resnet50_ade";

fn fixture() -> Fixture {
    // red -> 5, green -> 7, blue -> 9
    Fixture::with_pointwise_model(MODEL, 150, [5, 7, 9])
}

#[test]
fn test_predict_scores_every_class_at_input_resolution() {
    let f = fixture();
    let spec = lookup(MODEL).unwrap();
    let preset = PresetTransform::by_name(spec.preset).unwrap();
    let predictor = f.model_loader.load(spec, Device::Cpu).unwrap();

    let red = RgbImage::from_pixel(300, 200, Rgb([255, 0, 0]));
    let output = predictor
        .predict(&apply_preset(&red, preset, Device::Cpu))
        .unwrap();

    assert_eq!(output.data.shape(), &[1, 150, 480, 480]);

    let class_map = argmax(&output, spec.num_classes)
        .unwrap()
        .resize_nearest(300, 200)
        .unwrap();
    assert_eq!(class_map.top_classes(5), vec![(5, 300 * 200)]);
}

#[test]
fn test_predicted_class_follows_pixel_color() {
    let f = fixture();
    let spec = lookup(MODEL).unwrap();
    let preset = PresetTransform::by_name(spec.preset).unwrap();
    let predictor = f.model_loader.load(spec, Device::Cpu).unwrap();

    let split = RgbImage::from_fn(300, 200, |x, _| {
        if x < 150 {
            Rgb([255, 0, 0])
        } else {
            Rgb([0, 255, 0])
        }
    });
    let output = predictor
        .predict(&apply_preset(&split, preset, Device::Cpu))
        .unwrap();

    let class_map = argmax(&output, spec.num_classes)
        .unwrap()
        .resize_nearest(300, 200)
        .unwrap();
    assert_eq!(class_map.get(10, 100), Some(5));
    assert_eq!(class_map.get(290, 100), Some(7));
}

#[test]
fn test_input_of_wrong_size_is_rejected() {
    let f = fixture();
    let predictor = f.model_loader.load(lookup(MODEL).unwrap(), Device::Cpu).unwrap();

    let input = InputTensor {
        data: Array4::zeros((1, 3, 10, 10)),
        device: Device::Cpu,
    };
    let err = predictor.predict(&input).err().unwrap();

    assert!(matches!(err, SegmentationError::InvalidTensor { .. }));
}

#[test]
fn test_input_on_another_device_is_rejected() {
    let f = fixture();
    let predictor = f.model_loader.load(lookup(MODEL).unwrap(), Device::Cpu).unwrap();
    assert_eq!(predictor.device(), Device::Cpu);

    let input = InputTensor {
        data: Array4::zeros((1, 3, 480, 480)),
        device: Device::Accelerator(0),
    };
    let err = predictor.predict(&input).err().unwrap();

    assert!(matches!(err, SegmentationError::DevicePlacement { .. }));
}
