use crate::device::Device;
use crate::error::SegmentationError;
use crate::predictor::models::model_registry::ModelSpec;
use tract_onnx::prelude::tract_ndarray::Array4;

/// Normalized NCHW image batch bound to the device it was prepared for.
#[derive(Debug, Clone)]
pub struct InputTensor {
    pub data: Array4<f32>,
    pub device: Device,
}

impl InputTensor {
    /// (height, width) of the spatial dimensions.
    pub fn spatial_size(&self) -> (usize, usize) {
        let shape = self.data.shape();
        (shape[2], shape[3])
    }
}

/// Per-class scores shaped `[1, classes, height, width]`.
#[derive(Debug, Clone)]
pub struct OutputTensor {
    pub data: Array4<f32>,
}

pub trait Predictor: Send + Sync {
    fn device(&self) -> Device;
    fn predict(&self, input: &InputTensor) -> Result<OutputTensor, SegmentationError>;
}

pub trait ModelLoader: Send + Sync {
    fn accelerator_count(&self) -> usize;
    fn load(
        &self,
        spec: &ModelSpec,
        device: Device,
    ) -> Result<Box<dyn Predictor + Send + Sync>, SegmentationError>;
}

pub fn ensure_same_device(input: &InputTensor, model: Device) -> Result<(), SegmentationError> {
    if input.device != model {
        return Err(SegmentationError::DevicePlacement {
            input: input.device.to_string(),
            model: model.to_string(),
        });
    }
    Ok(())
}
