use crate::error::SegmentationError;
use crate::palette::tables::{voc_color, ADE20K, CITYSCAPES, MHPV1};
use std::fmt;
use std::str::FromStr;

/// A labeled dataset: fixes the class vocabulary and its display colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    PascalVoc,
    Ade20k,
    Cityscapes,
    Mhpv1,
}

impl Dataset {
    #[cfg(test)]
    pub const ALL: [Dataset; 4] = [
        Dataset::PascalVoc,
        Dataset::Ade20k,
        Dataset::Cityscapes,
        Dataset::Mhpv1,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dataset::PascalVoc => "pascal_voc",
            Dataset::Ade20k => "ade20k",
            Dataset::Cityscapes => "citys",
            Dataset::Mhpv1 => "mhpv1",
        }
    }

    pub fn num_classes(&self) -> usize {
        match self {
            Dataset::PascalVoc => 21,
            Dataset::Ade20k => ADE20K.len(),
            Dataset::Cityscapes => CITYSCAPES.len(),
            Dataset::Mhpv1 => MHPV1.len(),
        }
    }

    pub fn color(&self, class: u32) -> Result<[u8; 3], SegmentationError> {
        let out_of_range = || SegmentationError::ClassOutOfRange {
            class,
            num_classes: self.num_classes(),
        };
        let index = class as usize;
        match self {
            Dataset::PascalVoc if index < self.num_classes() => Ok(voc_color(class)),
            Dataset::PascalVoc => Err(out_of_range()),
            Dataset::Ade20k => ADE20K.get(index).copied().ok_or_else(out_of_range),
            Dataset::Cityscapes => CITYSCAPES.get(index).copied().ok_or_else(out_of_range),
            Dataset::Mhpv1 => MHPV1.get(index).copied().ok_or_else(out_of_range),
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Dataset {
    type Err = SegmentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pascal_voc" | "pascal_aug" | "voc" => Ok(Dataset::PascalVoc),
            "ade20k" | "ade" => Ok(Dataset::Ade20k),
            "citys" | "cityscapes" => Ok(Dataset::Cityscapes),
            "mhpv1" | "mhp" => Ok(Dataset::Mhpv1),
            _ => Err(SegmentationError::UnknownDataset(s.to_string())),
        }
    }
}
