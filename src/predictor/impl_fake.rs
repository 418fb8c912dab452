use crate::device::Device;
use crate::error::SegmentationError;
use crate::library::logger::interface::Logger;
use crate::predictor::interface::{
    ensure_same_device, InputTensor, ModelLoader, OutputTensor, Predictor,
};
use crate::predictor::models::model_registry::ModelSpec;
use rand::distr::{Distribution, Uniform};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tract_onnx::prelude::tract_ndarray::Array4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FakeOutput {
    #[cfg(test)]
    Constant(u32),
    Random,
}

/// Stands in for the runtime: emits one-hot scores at the input resolution.
pub struct ModelLoaderFake {
    output: FakeOutput,
    accelerators: usize,
    loads: AtomicUsize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ModelLoaderFake {
    pub fn new(output: FakeOutput, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            output,
            accelerators: 0,
            loads: AtomicUsize::new(0),
            logger: logger.with_namespace("predictor").with_namespace("fake"),
        }
    }

    #[cfg(test)]
    pub fn with_accelerators(mut self, accelerators: usize) -> Self {
        self.accelerators = accelerators;
        self
    }

    #[cfg(test)]
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl ModelLoader for ModelLoaderFake {
    fn accelerator_count(&self) -> usize {
        self.accelerators
    }

    fn load(
        &self,
        spec: &ModelSpec,
        device: Device,
    ) -> Result<Box<dyn Predictor + Send + Sync>, SegmentationError> {
        if let Device::Accelerator(index) = device {
            if index >= self.accelerators {
                return Err(SegmentationError::DeviceUnavailable {
                    requested: index,
                    available: self.accelerators,
                });
            }
        }

        self.loads.fetch_add(1, Ordering::SeqCst);
        let _ = self
            .logger
            .info(&format!("Loading fake {} on {}", spec.name, device));

        Ok(Box::new(PredictorFake {
            output: self.output,
            num_classes: spec.num_classes,
            device,
        }))
    }
}

pub struct PredictorFake {
    output: FakeOutput,
    num_classes: usize,
    device: Device,
}

impl PredictorFake {
    fn labels(&self, pixels: usize) -> Result<Vec<usize>, SegmentationError> {
        match self.output {
            #[cfg(test)]
            FakeOutput::Constant(class) if (class as usize) < self.num_classes => {
                Ok(vec![class as usize; pixels])
            }
            #[cfg(test)]
            FakeOutput::Constant(class) => Err(SegmentationError::Inference(format!(
                "fake class {} outside {} classes",
                class, self.num_classes
            ))),
            FakeOutput::Random => {
                let mut rng = rand::rng();
                let dist = Uniform::new(0, self.num_classes)
                    .map_err(|e| SegmentationError::Inference(e.to_string()))?;
                Ok((0..pixels).map(|_| dist.sample(&mut rng)).collect())
            }
        }
    }
}

impl Predictor for PredictorFake {
    fn device(&self) -> Device {
        self.device
    }

    fn predict(&self, input: &InputTensor) -> Result<OutputTensor, SegmentationError> {
        ensure_same_device(input, self.device)?;

        let (height, width) = input.spatial_size();
        let labels = self.labels(height * width)?;

        let data = Array4::from_shape_fn((1, self.num_classes, height, width), |(_, c, y, x)| {
            if labels[y * width + x] == c {
                1.0
            } else {
                0.0
            }
        });

        Ok(OutputTensor { data })
    }
}
