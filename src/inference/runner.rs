use image::DynamicImage;

use crate::inference::classifier::InferenceError;
use crate::inference::preprocess;
use crate::model::PredictionRecord;
use crate::registry::Ensemble;

/// Run every loaded model of the ensemble over the image, strictly
/// sequentially and in manifest order. One record per model; a single
/// failing model aborts the whole request.
pub fn run_ensemble(
    ensemble: &Ensemble,
    image: &DynamicImage,
) -> Result<Vec<PredictionRecord>, InferenceError> {
    let labels = ensemble.category.labels();
    let mut records = Vec::with_capacity(ensemble.len());

    for entry in &ensemble.models {
        let input = preprocess::to_input_tensor(image, entry.input_size);
        let scores = entry.classifier.predict(&input)?;
        if scores.len() != labels.len() {
            return Err(InferenceError::LabelMismatch {
                expected: labels.len(),
                got: scores.len(),
            });
        }

        let (index, max_score) = argmax(&scores);
        records.push(PredictionRecord {
            model_name: entry.name.clone(),
            predicted_label: labels[index].to_string(),
            confidence_percent: max_score * 100.0,
        });
    }

    Ok(records)
}

fn argmax(scores: &[f32]) -> (usize, f32) {
    let mut index = 0;
    let mut max_score = f32::MIN;
    for (i, &score) in scores.iter().enumerate() {
        if score > max_score {
            index = i;
            max_score = score;
        }
    }
    (index, max_score)
}
