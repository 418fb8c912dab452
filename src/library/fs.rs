use crate::error::SegmentationError;
use std::fs;
use std::path::Path;

/// Create the directory that will hold `path`, if it has one.
pub fn ensure_parent_dir(path: &Path) -> Result<(), SegmentationError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| SegmentationError::io(parent, e))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("file.png");

        ensure_parent_dir(&path).unwrap();

        assert!(dir.path().join("a").join("b").is_dir());
        assert!(!path.exists());
    }

    #[test]
    fn test_bare_file_name_needs_no_dir() {
        ensure_parent_dir(Path::new("output.png")).unwrap();
    }
}
