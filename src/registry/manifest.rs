use crate::model::Category;

/// One manifest row: display name, TorchScript file and the input resolution
/// the network was exported with.
#[derive(Debug, Clone, Copy)]
pub struct ModelSpec {
    pub name: &'static str,
    pub file: &'static str,
    pub input_size: (u32, u32),
}

const COB_MANIFEST: &[ModelSpec] = &[
    ModelSpec {
        name: "ResNet50",
        file: "resnet50_cob.pt",
        input_size: (250, 250),
    },
    ModelSpec {
        name: "MobileNetV2",
        file: "mobilenetv2_cob.pt",
        input_size: (224, 224),
    },
    ModelSpec {
        name: "VGG16",
        file: "vgg16_cob.pt",
        input_size: (224, 224),
    },
    ModelSpec {
        name: "DenseNet201",
        file: "densenet201_cob.pt",
        input_size: (224, 224),
    },
    ModelSpec {
        name: "InceptionV3",
        file: "inceptionv3_cob.pt",
        input_size: (299, 299),
    },
];

const LEAF_MANIFEST: &[ModelSpec] = &[
    ModelSpec {
        name: "ResNet50",
        file: "resnet50_leaf.pt",
        input_size: (250, 250),
    },
    ModelSpec {
        name: "MobileNetV2",
        file: "mobilenetv2_leaf.pt",
        input_size: (224, 224),
    },
    ModelSpec {
        name: "VGG16",
        file: "vgg16_leaf.pt",
        input_size: (224, 224),
    },
    ModelSpec {
        name: "DenseNet201",
        file: "densenet201_leaf.pt",
        input_size: (224, 224),
    },
    ModelSpec {
        name: "InceptionV3",
        file: "inceptionv3_leaf.pt",
        input_size: (299, 299),
    },
];

pub fn manifest(category: Category) -> &'static [ModelSpec] {
    match category {
        Category::Cob => COB_MANIFEST,
        Category::Leaf => LEAF_MANIFEST,
    }
}
