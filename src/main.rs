use asset_fetcher::impl_http::AssetFetcherHttp;
use clap::Parser;
use cli::Cli;
use error::SegmentationError;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use pipeline::Pipeline;
use predictor::impl_fake::{FakeOutput, ModelLoaderFake};
use predictor::impl_tract_onnx::ModelLoaderTractOnnx;
use predictor::interface::ModelLoader;
use predictor::models::model_registry::MODELS;
use std::sync::Arc;
use viewer::impl_fake::ViewerFake;
use viewer::impl_gui::ViewerGui;
use viewer::interface::Viewer;

mod asset_fetcher;
mod cli;
mod config;
mod device;
mod error;
mod library;
mod palette;
mod pipeline;
mod postprocess;
mod predictor;
mod preprocess;
mod viewer;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), SegmentationError> {
    if cli.list_models {
        print_models();
        return Ok(());
    }

    let fake_model = cli.fake_model;
    let config = cli.into_config()?;

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone, config.verbose));

    let asset_fetcher = Arc::new(AssetFetcherHttp::new(
        config.download_retries,
        logger.clone(),
    ));

    let model_loader: Arc<dyn ModelLoader + Send + Sync> = if fake_model {
        Arc::new(ModelLoaderFake::new(FakeOutput::Random, logger.clone()))
    } else {
        Arc::new(ModelLoaderTractOnnx::new(&config.model_dir, logger.clone()))
    };

    let viewer: Arc<dyn Viewer + Send + Sync> = if config.show {
        Arc::new(ViewerGui::new("Semantic segmentation"))
    } else {
        Arc::new(ViewerFake::new(logger.clone()))
    };

    let pipeline = Pipeline::new(config, logger.clone(), asset_fetcher, model_loader, viewer);

    let report = pipeline.run()?;

    let _ = logger.info(&format!(
        "Done: {} ({:?}) -> {} ({}x{}, dominant class {:?}, {:.3}s on {})",
        report.image_path.display(),
        report.fetch,
        report.output_path.display(),
        report.image_size.0,
        report.image_size.1,
        report.top_classes.first().map(|(class, _)| class),
        report.inference_time.as_secs_f64(),
        report.device
    ));

    Ok(())
}

fn print_models() {
    println!("{:<36} {:<12} {:<12} {:>7}", "MODEL", "DATASET", "PRESET", "CLASSES");
    for spec in MODELS {
        println!(
            "{:<36} {:<12} {:<12} {:>7}",
            spec.name, spec.dataset, spec.preset, spec.num_classes
        );
    }
}
