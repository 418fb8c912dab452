use crate::error::SegmentationError;
use crate::postprocess::class_map::ClassMap;
use crate::predictor::interface::OutputTensor;
use tract_onnx::prelude::tract_ndarray::Axis;

/// Reduce `[1, C, H, W]` scores to the index of the best channel per pixel.
/// Ties keep the lowest index and NaN never wins.
pub fn argmax(output: &OutputTensor, num_classes: usize) -> Result<ClassMap, SegmentationError> {
    let shape = output.data.shape();
    if shape[0] != 1 || shape[1] != num_classes || shape[2] == 0 || shape[3] == 0 {
        return Err(SegmentationError::InvalidTensor {
            expected: format!("[1, {}, H > 0, W > 0]", num_classes),
            actual: format!("{:?}", shape),
        });
    }
    let (height, width) = (shape[2], shape[3]);

    let mut best_score = vec![f32::NEG_INFINITY; height * width];
    let mut best_class = vec![0u32; height * width];

    let batch = output.data.index_axis(Axis(0), 0);
    for (class, plane) in batch.outer_iter().enumerate() {
        let pixels = plane.iter().zip(best_score.iter_mut()).zip(best_class.iter_mut());
        for ((score, best), label) in pixels {
            if *score > *best {
                *best = *score;
                *label = class as u32;
            }
        }
    }

    ClassMap::new(width as u32, height as u32, best_class)
}
