use crate::error::SegmentationError;

const IMAGENET_MEAN: [f32; 3] = [0.485, 0.456, 0.406];
const IMAGENET_STD: [f32; 3] = [0.229, 0.224, 0.225];

/// Fixed resize/normalize recipe matched to a family of pretrained models.
#[derive(Debug, Clone, PartialEq)]
pub struct PresetTransform {
    pub name: &'static str,
    pub input_height: u32,
    pub input_width: u32,
    pub mean: [f32; 3],
    pub std: [f32; 3],
}

pub const PRESETS: &[PresetTransform] = &[
    PresetTransform {
        name: "voc_480",
        input_height: 480,
        input_width: 480,
        mean: IMAGENET_MEAN,
        std: IMAGENET_STD,
    },
    PresetTransform {
        name: "ade20k_480",
        input_height: 480,
        input_width: 480,
        mean: IMAGENET_MEAN,
        std: IMAGENET_STD,
    },
    PresetTransform {
        name: "mhpv1_768",
        input_height: 768,
        input_width: 768,
        mean: IMAGENET_MEAN,
        std: IMAGENET_STD,
    },
    PresetTransform {
        name: "citys_768",
        input_height: 768,
        input_width: 768,
        mean: IMAGENET_MEAN,
        std: IMAGENET_STD,
    },
];

impl PresetTransform {
    pub fn by_name(name: &str) -> Result<&'static PresetTransform, SegmentationError> {
        PRESETS
            .iter()
            .find(|preset| preset.name == name)
            .ok_or_else(|| SegmentationError::UnknownPreset(name.to_string()))
    }

    pub fn normalize(&self, channel: usize, value: u8) -> f32 {
        (value as f32 / 255.0 - self.mean[channel]) / self.std[channel]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_preset() {
        assert!(matches!(
            PresetTransform::by_name("voc_9000"),
            Err(SegmentationError::UnknownPreset(_))
        ));
    }

    #[test]
    fn test_normalize_uses_channel_constants() {
        let preset = PresetTransform::by_name("ade20k_480").unwrap();

        assert!((preset.normalize(0, 0) - (-0.485 / 0.229)).abs() < 1e-6);
        assert!((preset.normalize(2, 255) - ((1.0 - 0.406) / 0.225)).abs() < 1e-6);
    }
}
