use crate::error::SegmentationError;
use std::collections::HashMap;

/// Row-major map of one class label per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMap {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl ClassMap {
    pub fn new(width: u32, height: u32, data: Vec<u32>) -> Result<Self, SegmentationError> {
        ensure_not_empty(width, height)?;
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(SegmentationError::InvalidTensor {
                expected: format!("{} labels for {}x{}", expected, width, height),
                actual: format!("{} labels", data.len()),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[cfg(test)]
    pub fn filled(width: u32, height: u32, class: u32) -> Self {
        Self {
            width,
            height,
            data: vec![class; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }

    #[cfg(test)]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Nearest-neighbour resampling; labels are never blended.
    pub fn resize_nearest(&self, width: u32, height: u32) -> Result<ClassMap, SegmentationError> {
        ensure_not_empty(self.width, self.height)?;
        ensure_not_empty(width, height)?;
        if width == self.width && height == self.height {
            return Ok(self.clone());
        }

        let source_x: Vec<usize> = (0..width as u64)
            .map(|x| nearest_source(x, width as u64, self.width as u64))
            .collect();

        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height as u64 {
            let sy = nearest_source(y, height as u64, self.height as u64);
            let row = &self.data[sy * self.width as usize..(sy + 1) * self.width as usize];
            data.extend(source_x.iter().map(|&sx| row[sx]));
        }

        Ok(ClassMap {
            width,
            height,
            data,
        })
    }

    /// Classes ordered by pixel count, largest first; ties by class index.
    pub fn top_classes(&self, limit: usize) -> Vec<(u32, usize)> {
        let mut counts: HashMap<u32, usize> = HashMap::new();
        for &class in &self.data {
            *counts.entry(class).or_insert(0) += 1;
        }

        let mut counts: Vec<(u32, usize)> = counts.into_iter().collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        counts.truncate(limit);
        counts
    }

    pub fn distinct_classes(&self) -> usize {
        self.top_classes(usize::MAX).len()
    }
}

fn ensure_not_empty(width: u32, height: u32) -> Result<(), SegmentationError> {
    if width == 0 || height == 0 {
        return Err(SegmentationError::InvalidTensor {
            expected: "a non-empty class map".to_string(),
            actual: format!("{}x{}", width, height),
        });
    }
    Ok(())
}

fn nearest_source(dst: u64, dst_len: u64, src_len: u64) -> usize {
    let src = ((2 * dst + 1) * src_len) / (2 * dst_len);
    src.min(src_len.saturating_sub(1)) as usize
}
