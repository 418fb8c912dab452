use crate::device::Device;
use crate::error::SegmentationError;
use crate::library::logger::interface::Logger;
use crate::predictor::interface::{
    ensure_same_device, InputTensor, ModelLoader, OutputTensor, Predictor,
};
use crate::predictor::models::model_registry::ModelSpec;
use crate::preprocess::preset::PresetTransform;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tract_onnx::prelude::*;

/// Runs ONNX exports of the registered models on the CPU.
pub struct ModelLoaderTractOnnx {
    model_dir: PathBuf,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ModelLoaderTractOnnx {
    pub fn new(model_dir: &Path, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            model_dir: model_dir.to_path_buf(),
            logger: logger.with_namespace("tract_onnx"),
        }
    }

    pub fn model_path(&self, spec: &ModelSpec) -> PathBuf {
        self.model_dir.join(format!("{}.onnx", spec.name))
    }
}

impl ModelLoader for ModelLoaderTractOnnx {
    fn accelerator_count(&self) -> usize {
        0
    }

    fn load(
        &self,
        spec: &ModelSpec,
        device: Device,
    ) -> Result<Box<dyn Predictor + Send + Sync>, SegmentationError> {
        if let Device::Accelerator(index) = device {
            return Err(SegmentationError::DeviceUnavailable {
                requested: index,
                available: self.accelerator_count(),
            });
        }

        let preset = PresetTransform::by_name(spec.preset)?;
        let path = self.model_path(spec);
        if !path.is_file() {
            return Err(SegmentationError::ModelLoad {
                path,
                message: "model file not found".to_string(),
            });
        }

        let _ = self
            .logger
            .info(&format!("Loading {} from {}", spec.name, path.display()));

        let load_error = |e: TractError| SegmentationError::ModelLoad {
            path: path.clone(),
            message: e.to_string(),
        };

        let input_shape = [
            1,
            3,
            preset.input_height as usize,
            preset.input_width as usize,
        ];

        let model = tract_onnx::onnx()
            .model_for_path(&path)
            .map_err(load_error)?
            .with_input_fact(0, f32::fact(input_shape).into())
            .map_err(load_error)?
            .into_optimized()
            .map_err(load_error)?
            .into_runnable()
            .map_err(load_error)?;

        Ok(Box::new(PredictorTractOnnx {
            model,
            device,
            input_size: (input_shape[2], input_shape[3]),
            logger: self.logger.with_namespace(spec.name),
        }))
    }
}

pub struct PredictorTractOnnx {
    model: SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>,
    device: Device,
    input_size: (usize, usize),
    logger: Arc<dyn Logger + Send + Sync>,
}

impl Predictor for PredictorTractOnnx {
    fn device(&self) -> Device {
        self.device
    }

    fn predict(&self, input: &InputTensor) -> Result<OutputTensor, SegmentationError> {
        ensure_same_device(input, self.device)?;

        if input.spatial_size() != self.input_size {
            return Err(SegmentationError::InvalidTensor {
                expected: format!("[1, 3, {}, {}]", self.input_size.0, self.input_size.1),
                actual: format!("{:?}", input.data.shape()),
            });
        }

        let tensor: Tensor = input.data.clone().into_tensor();
        let outputs = self
            .model
            .run(tvec!(tensor.into_tvalue()))
            .map_err(|e| SegmentationError::Inference(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| SegmentationError::Inference("model produced no output".to_string()))?;

        let view = output
            .to_array_view::<f32>()
            .map_err(|e| SegmentationError::Inference(e.to_string()))?;

        let data = view
            .into_dimensionality::<tract_ndarray::Ix4>()
            .map_err(|e| SegmentationError::InvalidTensor {
                expected: "rank 4 scores".to_string(),
                actual: e.to_string(),
            })?
            .to_owned();

        let _ = self
            .logger
            .debug(&format!("Output tensor shape {:?}", data.shape()));

        Ok(OutputTensor { data })
    }
}
