use crate::asset_fetcher::interface::AssetFetcher;
use crate::asset_fetcher::{acquire, FetchOutcome};
use crate::config::Config;
use crate::device::Device;
use crate::error::SegmentationError;
use crate::library::logger::interface::Logger;
use crate::palette::colorize;
use crate::palette::dataset::Dataset;
use crate::postprocess::argmax::argmax;
use crate::postprocess::save_mask;
use crate::predictor::interface::ModelLoader;
use crate::predictor::models::model_registry::{self, ModelSpec};
use crate::preprocess::decode_image;
use crate::preprocess::image::apply_preset;
use crate::preprocess::preset::PresetTransform;
use crate::viewer::interface::Viewer;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};


/// Everything the run needs that can be checked before touching the network.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub model: &'static ModelSpec,
    pub dataset: Dataset,
    pub preset: &'static PresetTransform,
    pub device: Device,
    pub image_path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub image_path: PathBuf,
    pub output_path: PathBuf,
    pub fetch: FetchOutcome,
    pub image_size: (u32, u32),
    pub device: Device,
    pub inference_time: Duration,
    pub top_classes: Vec<(u32, usize)>,
}

pub struct Pipeline {
    config: Config,
    logger: Arc<dyn Logger + Send + Sync>,
    asset_fetcher: Arc<dyn AssetFetcher + Send + Sync>,
    model_loader: Arc<dyn ModelLoader + Send + Sync>,
    viewer: Arc<dyn Viewer + Send + Sync>,
}

impl Pipeline {
    pub fn new(
        config: Config,
        logger: Arc<dyn Logger + Send + Sync>,
        asset_fetcher: Arc<dyn AssetFetcher + Send + Sync>,
        model_loader: Arc<dyn ModelLoader + Send + Sync>,
        viewer: Arc<dyn Viewer + Send + Sync>,
    ) -> Self {
        Self {
            config,
            logger: logger.with_namespace("pipeline"),
            asset_fetcher,
            model_loader,
            viewer,
        }
    }

    pub fn plan(&self) -> Result<RunPlan, SegmentationError> {
        let model = model_registry::lookup(&self.config.model_name)?;
        let dataset: Dataset = self.config.dataset_name.parse()?;
        if dataset != model.dataset {
            return Err(SegmentationError::DatasetMismatch {
                model: model.name.to_string(),
                model_dataset: model.dataset.to_string(),
                dataset: dataset.to_string(),
            });
        }
        let preset = PresetTransform::by_name(model.preset)?;
        let device = self
            .config
            .device
            .resolve(self.model_loader.accelerator_count())?;
        let image_path = self.config.image_path()?;

        Ok(RunPlan {
            model,
            dataset,
            preset,
            device,
            image_path,
        })
    }

    pub fn run(&self) -> Result<PipelineReport, SegmentationError> {
        let plan = self.plan()?;
        let _ = self.logger.info(&format!(
            "Model {} ({}, {} classes) on {}",
            plan.model.name, plan.dataset, plan.model.num_classes, plan.device
        ));

        let fetch = acquire(
            self.asset_fetcher.as_ref(),
            &self.config.source_url,
            &plan.image_path,
            self.config.overwrite,
            self.logger.as_ref(),
        )?;

        let image = decode_image(&plan.image_path)?;
        let image_size = image.dimensions();
        let _ = self.logger.info(&format!(
            "Decoded {} ({}x{})",
            plan.image_path.display(),
            image_size.0,
            image_size.1
        ));

        let input = apply_preset(&image, plan.preset, plan.device);
        let _ = self.logger.debug(&format!(
            "Preset {} -> tensor {:?}",
            plan.preset.name,
            input.data.shape()
        ));

        let predictor = self.model_loader.load(plan.model, plan.device)?;
        let _ = self
            .logger
            .debug(&format!("Loaded {} on {}", plan.model.name, predictor.device()));

        let start = Instant::now();
        let output = predictor.predict(&input)?;
        let inference_time = start.elapsed();
        let _ = self
            .logger
            .info(&format!("Forward pass took {:.3}s", inference_time.as_secs_f64()));

        let class_map = argmax(&output, plan.model.num_classes)?
            .resize_nearest(image_size.0, image_size.1)?;

        let top_classes = class_map.top_classes(5);
        let total = (image_size.0 as usize * image_size.1 as usize).max(1);
        let summary: Vec<String> = top_classes
            .iter()
            .map(|(class, count)| {
                format!("{}={:.1}%", class, 100.0 * *count as f64 / total as f64)
            })
            .collect();
        let _ = self.logger.info(&format!(
            "Found {} classes, top: {}",
            class_map.distinct_classes(),
            summary.join(" ")
        ));

        let mask = colorize(&class_map, plan.dataset)?;
        save_mask(&mask, &self.config.output_path)?;
        let _ = self
            .logger
            .info(&format!("Saved mask to {}", self.config.output_path.display()));

        let saved = decode_image(&self.config.output_path)?;
        self.viewer.show(&image, &saved)?;

        Ok(PipelineReport {
            image_path: plan.image_path,
            output_path: self.config.output_path.clone(),
            fetch,
            image_size,
            device: plan.device,
            inference_time,
            top_classes,
        })
    }
}
