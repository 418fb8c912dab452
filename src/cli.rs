use crate::config::{utc_offset, Config};
use crate::device::DeviceSelection;
use crate::error::SegmentationError;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "semantic-segmentation")]
#[command(about = "Segment an image with a pretrained model and save a colorized mask")]
#[command(version)]
pub struct Cli {
    /// URL of the image to segment
    #[arg(long)]
    pub url: Option<String>,

    /// Local file the image is stored in (defaults to the URL's file name)
    #[arg(long)]
    pub filename: Option<PathBuf>,

    /// Download again even if the local file exists
    #[arg(long)]
    pub overwrite: bool,

    /// Extra download attempts after a failure
    #[arg(long)]
    pub retries: Option<u32>,

    /// Registered model name
    #[arg(short, long)]
    pub model: Option<String>,

    /// Directory holding <model>.onnx files
    #[arg(long)]
    pub model_dir: Option<PathBuf>,

    /// Dataset whose palette colors the mask
    #[arg(short, long)]
    pub dataset: Option<String>,

    /// auto, cpu, gpu or gpu:<index>
    #[arg(long)]
    pub device: Option<DeviceSelection>,

    /// Where the colorized mask is written
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip the viewer window
    #[arg(long)]
    pub no_show: bool,

    /// Offset applied to log timestamps
    #[arg(long, allow_hyphen_values = true)]
    pub utc_offset_hours: Option<i32>,

    /// Print debug lines
    #[arg(short, long)]
    pub verbose: bool,

    /// Replace the network with random predictions
    #[arg(long)]
    pub fake_model: bool,

    /// Print the registered models and exit
    #[arg(long)]
    pub list_models: bool,
}

impl Cli {
    pub fn into_config(self) -> Result<Config, SegmentationError> {
        let mut config = Config::default();

        if let Some(url) = self.url {
            config.source_url = url;
            config.local_filename = None;
        }
        if let Some(filename) = self.filename {
            config.local_filename = Some(filename);
        }
        config.overwrite = self.overwrite;
        if let Some(retries) = self.retries {
            config.download_retries = retries;
        }
        if let Some(model) = self.model {
            config.model_name = model;
        }
        if let Some(model_dir) = self.model_dir {
            config.model_dir = model_dir;
        }
        if let Some(dataset) = self.dataset {
            config.dataset_name = dataset;
        }
        if let Some(device) = self.device {
            config.device = device;
        }
        if let Some(output) = self.output {
            config.output_path = output;
        }
        config.show = !self.no_show;
        if let Some(hours) = self.utc_offset_hours {
            config.logger_timezone = utc_offset(hours)?;
        }
        config.verbose = self.verbose;

        Ok(config)
    }
}
