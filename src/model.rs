use serde::{Deserialize, Serialize};

/// The two classification tasks the service exposes. Each category has its
/// own model ensemble and its own fixed, ordered label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Cob,
    Leaf,
}

impl Category {
    pub fn labels(&self) -> &'static [&'static str] {
        match self {
            Category::Cob => &["Damaged", "Maize", "NotVertical", "Vertical"],
            Category::Leaf => &["Blight", "Common_Rust", "Gray_Leaf_Spot", "Healthy"],
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Cob => "Cob",
            Category::Leaf => "Leaf",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Category::Cob => "cob",
            Category::Leaf => "leaf",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub model_name: String,
    pub predicted_label: String,
    pub confidence_percent: f32,
}

/// Record with the highest confidence. Exact ties resolve to the earliest
/// record, so manifest order decides between models that agree to the digit.
pub fn best_record(records: &[PredictionRecord]) -> Option<&PredictionRecord> {
    let mut best: Option<&PredictionRecord> = None;
    for record in records {
        let replace = match best {
            Some(current) => record.confidence_percent > current.confidence_percent,
            None => true,
        };
        if replace {
            best = Some(record);
        }
    }
    best
}
