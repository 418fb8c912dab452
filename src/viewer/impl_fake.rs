use crate::error::SegmentationError;
use crate::library::logger::interface::Logger;
use crate::viewer::interface::Viewer;
use image::RgbImage;
use std::sync::{Arc, Mutex};

pub struct ViewerFake {
    logger: Arc<dyn Logger + Send + Sync>,
    shown: Mutex<Vec<(RgbImage, RgbImage)>>,
}

impl ViewerFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("viewer").with_namespace("fake"),
            shown: Mutex::new(Vec::new()),
        }
    }

    #[cfg(test)]
    pub fn shown(&self) -> Vec<(RgbImage, RgbImage)> {
        self.shown
            .lock()
            .map(|shown| shown.clone())
            .unwrap_or_default()
    }
}

impl Viewer for ViewerFake {
    fn show(&self, original: &RgbImage, mask: &RgbImage) -> Result<(), SegmentationError> {
        let _ = self.logger.info(&format!(
            "ViewerFake::show({}x{}, {}x{})",
            original.width(),
            original.height(),
            mask.width(),
            mask.height()
        ));
        self.shown
            .lock()
            .map_err(|e| SegmentationError::Display(e.to_string()))?
            .push((original.clone(), mask.clone()));
        Ok(())
    }
}
