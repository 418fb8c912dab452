#[cfg(test)]
pub mod impl_fake;
pub mod impl_http;
pub mod interface;

use crate::error::SegmentationError;
use crate::library::fs::ensure_parent_dir;
use crate::library::logger::interface::Logger;
use interface::AssetFetcher;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Cached,
    Downloaded { bytes: usize },
}

/// Make sure `destination` holds the resource at `url`.
///
/// An existing file is kept as-is unless `overwrite` is set. The body is
/// fetched completely before anything is written, then written to a
/// `.part` sibling and renamed into place, so a failed run never leaves a
/// truncated file at `destination`.
pub fn acquire(
    fetcher: &dyn AssetFetcher,
    url: &str,
    destination: &Path,
    overwrite: bool,
    logger: &dyn Logger,
) -> Result<FetchOutcome, SegmentationError> {
    if !overwrite && destination.is_file() {
        let _ = logger.info(&format!("Using cached {}", destination.display()));
        return Ok(FetchOutcome::Cached);
    }

    let _ = logger.info(&format!("Downloading {} from {}", destination.display(), url));
    let body = fetcher.fetch_bytes(url)?;

    ensure_parent_dir(destination)?;
    let partial = partial_path(destination);
    let written = fs::write(&partial, &body)
        .map_err(|e| SegmentationError::io(&partial, e))
        .and_then(|_| {
            fs::rename(&partial, destination).map_err(|e| SegmentationError::io(destination, e))
        });
    if let Err(e) = written {
        let _ = fs::remove_file(&partial);
        return Err(e);
    }

    Ok(FetchOutcome::Downloaded { bytes: body.len() })
}

fn partial_path(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    destination.with_file_name(name)
}

/// Last path segment of `url`, without query string or fragment. Segments
/// that would name a directory (`.`, `..`) are rejected.
pub fn filename_from_url(url: &str) -> Result<PathBuf, SegmentationError> {
    let path = url.split(['?', '#']).next().unwrap_or_default();
    let without_scheme = path.split_once("://").map_or(path, |(_, rest)| rest);

    match without_scheme.split_once('/') {
        Some((_, resource)) => resource
            .rsplit('/')
            .next()
            .filter(|name| !matches!(*name, "" | "." | ".."))
            .map(PathBuf::from)
            .ok_or_else(|| {
                SegmentationError::InvalidConfig(format!("no file name in url {}", url))
            }),
        None => Err(SegmentationError::InvalidConfig(format!(
            "no file name in url {}",
            url
        ))),
    }
}
