use crate::error::SegmentationError;
use crate::palette::dataset::Dataset;

/// A pretrained segmentation network: the name implies both the architecture
/// and the dataset its weights and class vocabulary come from.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSpec {
    pub name: &'static str,
    pub dataset: Dataset,
    pub preset: &'static str,
    pub num_classes: usize,
}

const fn voc(name: &'static str) -> ModelSpec {
    ModelSpec {
        name,
        dataset: Dataset::PascalVoc,
        preset: "voc_480",
        num_classes: 21,
    }
}

const fn ade(name: &'static str) -> ModelSpec {
    ModelSpec {
        name,
        dataset: Dataset::Ade20k,
        preset: "ade20k_480",
        num_classes: 150,
    }
}

const fn citys(name: &'static str) -> ModelSpec {
    ModelSpec {
        name,
        dataset: Dataset::Cityscapes,
        preset: "citys_768",
        num_classes: 19,
    }
}

const fn mhpv1(name: &'static str) -> ModelSpec {
    ModelSpec {
        name,
        dataset: Dataset::Mhpv1,
        preset: "mhpv1_768",
        num_classes: 18,
    }
}

pub const MODELS: &[ModelSpec] = &[
    voc("fcn_resnet101_voc"),
    voc("psp_resnet101_voc"),
    voc("deeplab_resnet101_voc"),
    voc("deeplab_resnet152_voc"),
    ade("fcn_resnet50_ade"),
    ade("fcn_resnet101_ade"),
    ade("psp_resnet50_ade"),
    ade("psp_resnet101_ade"),
    ade("deeplab_resnet50_ade"),
    ade("deeplab_resnet101_ade"),
    ade("fcn_resnest50_ade"),
    ade("deeplab_resnest50_ade"),
    ade("deeplab_resnest101_ade"),
    ade("deeplab_resnest200_ade"),
    ade("deeplab_resnest269_ade"),
    citys("psp_resnet101_citys"),
    citys("deeplab_v3b_plus_wideresnet_citys"),
    citys("icnet_resnet50_citys"),
    mhpv1("icnet_resnet50_mhpv1"),
];

pub fn lookup(name: &str) -> Result<&'static ModelSpec, SegmentationError> {
    let wanted = name.trim().to_lowercase();
    MODELS
        .iter()
        .find(|spec| spec.name == wanted)
        .ok_or_else(|| SegmentationError::UnknownModel(name.to_string()))
}
