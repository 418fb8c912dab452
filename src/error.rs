use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SegmentationError {
    #[error("failed to download {url}: {message}")]
    Download { url: String, message: String },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("unknown model name: {0}")]
    UnknownModel(String),

    #[error("unknown dataset name: {0}")]
    UnknownDataset(String),

    #[error("unknown preset transform: {0}")]
    UnknownPreset(String),

    #[error("model {model} was trained on {model_dataset} but dataset {dataset} was requested")]
    DatasetMismatch {
        model: String,
        model_dataset: String,
        dataset: String,
    },

    #[error("invalid device: {0}")]
    InvalidDevice(String),

    #[error("accelerator {requested} requested but only {available} available")]
    DeviceUnavailable { requested: usize, available: usize },

    #[error("input bound to {input} but model placed on {model}")]
    DevicePlacement { input: String, model: String },

    #[error("failed to load model {}: {message}", path.display())]
    ModelLoad { path: PathBuf, message: String },

    #[error("inference failed: {0}")]
    Inference(String),

    #[error("invalid tensor: expected {expected}, got {actual}")]
    InvalidTensor { expected: String, actual: String },

    #[error("class index {class} out of range for {num_classes} classes")]
    ClassOutOfRange { class: u32, num_classes: usize },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("display failed: {0}")]
    Display(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SegmentationError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
