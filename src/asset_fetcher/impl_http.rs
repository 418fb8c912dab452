use crate::asset_fetcher::interface::AssetFetcher;
use crate::error::SegmentationError;
use crate::library::logger::interface::Logger;
use std::io::Read;
use std::sync::Arc;

pub struct AssetFetcherHttp {
    agent: ureq::Agent,
    retries: u32,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl AssetFetcherHttp {
    pub fn new(retries: u32, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            agent: ureq::agent(),
            retries,
            logger: logger.with_namespace("asset_fetcher").with_namespace("http"),
        }
    }

    fn fetch_once(&self, url: &str) -> Result<Vec<u8>, SegmentationError> {
        let download_error = |message: String| SegmentationError::Download {
            url: url.to_string(),
            message,
        };

        let response = self.agent.get(url).call().map_err(|e| match e {
            ureq::Error::Status(code, _) => download_error(format!("HTTP status {}", code)),
            other => download_error(other.to_string()),
        })?;

        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| download_error(format!("failed to read body: {}", e)))?;

        Ok(body)
    }
}

impl AssetFetcher for AssetFetcherHttp {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SegmentationError> {
        let mut attempt = 0;
        loop {
            let _ = self.logger.debug(&format!("GET {} (attempt {})", url, attempt + 1));
            match self.fetch_once(url) {
                Ok(body) => return Ok(body),
                Err(e) if attempt < self.retries => {
                    attempt += 1;
                    let _ = self.logger.info(&format!(
                        "Download failed ({}), retrying {}/{}",
                        e, attempt, self.retries
                    ));
                }
                Err(e) => return Err(e),
            }
        }
    }
}
