use crate::asset_fetcher::interface::AssetFetcher;
use crate::error::SegmentationError;
use crate::library::logger::interface::Logger;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Serves a canned body (or a canned failure) without touching the network.
pub struct AssetFetcherFake {
    response: Result<Vec<u8>, String>,
    calls: AtomicUsize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl AssetFetcherFake {
    pub fn new(body: Vec<u8>, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            response: Ok(body),
            calls: AtomicUsize::new(0),
            logger: logger.with_namespace("asset_fetcher").with_namespace("fake"),
        }
    }

    pub fn failing(message: &str, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            response: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            logger: logger.with_namespace("asset_fetcher").with_namespace("fake"),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl AssetFetcher for AssetFetcherFake {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SegmentationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let _ = self.logger.info(&format!("AssetFetcherFake::fetch_bytes({})", url));

        self.response
            .clone()
            .map_err(|message| SegmentationError::Download {
                url: url.to_string(),
                message,
            })
    }
}
