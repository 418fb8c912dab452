use crate::asset_fetcher::filename_from_url;
use crate::device::DeviceSelection;
use crate::error::SegmentationError;
use chrono::Offset;
use std::path::PathBuf;

pub const SAMPLE_IMAGE_URL: &str = "https://github.com/zhanghang1989/image-data/blob/master/encoding/segmentation/ade20k/ADE_val_00001142.jpg?raw=true";

#[derive(Debug, Clone)]
pub struct Config {
    pub source_url: String,
    /// `None` derives the name from the last segment of `source_url`.
    pub local_filename: Option<PathBuf>,
    pub overwrite: bool,
    pub download_retries: u32,
    pub model_name: String,
    pub model_dir: PathBuf,
    pub dataset_name: String,
    pub device: DeviceSelection,
    pub output_path: PathBuf,
    pub show: bool,
    pub logger_timezone: chrono::FixedOffset,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_url: SAMPLE_IMAGE_URL.to_string(),
            local_filename: Some(PathBuf::from("ade20k_example.jpg")),
            overwrite: false,
            download_retries: 0,
            model_name: "deeplab_resnest101_ade".to_string(),
            model_dir: PathBuf::from("models"),
            dataset_name: "ade20k".to_string(),
            device: DeviceSelection::Auto,
            output_path: PathBuf::from("output.png"),
            show: true,
            logger_timezone: chrono::Utc.fix(),
            verbose: false,
        }
    }
}

impl Config {
    pub fn image_path(&self) -> Result<PathBuf, SegmentationError> {
        match &self.local_filename {
            Some(path) => Ok(path.clone()),
            None => filename_from_url(&self.source_url),
        }
    }
}

pub fn utc_offset(hours: i32) -> Result<chrono::FixedOffset, SegmentationError> {
    hours
        .checked_mul(3600)
        .and_then(chrono::FixedOffset::east_opt)
        .ok_or_else(|| SegmentationError::InvalidConfig(format!("utc offset {}h", hours)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_image_path() {
        let config = Config::default();
        assert_eq!(config.image_path().unwrap(), PathBuf::from("ade20k_example.jpg"));
    }

    #[test]
    fn test_image_path_derived_from_url() {
        let config = Config {
            local_filename: None,
            ..Default::default()
        };
        assert_eq!(
            config.image_path().unwrap(),
            PathBuf::from("ADE_val_00001142.jpg")
        );
    }

    #[test]
    fn test_utc_offset_bounds() {
        assert_eq!(utc_offset(-7).unwrap().local_minus_utc(), -7 * 3600);
        assert!(utc_offset(30).is_err());
    }
}
