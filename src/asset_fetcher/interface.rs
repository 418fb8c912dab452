use crate::error::SegmentationError;

pub trait AssetFetcher: Send + Sync {
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, SegmentationError>;
}
