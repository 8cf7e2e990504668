use std::path::Path;
use std::sync::Mutex;

use ndarray::Array4;
use tch::{CModule, Device, Kind, Tensor};

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("model execution failed: {0}")]
    Model(String),
    #[error("model produced {got} scores for {expected} classes")]
    LabelMismatch { expected: usize, got: usize },
}

/// Forward pass over one preprocessed image. Implementations take the
/// `(1, H, W, 3)` input tensor and return the class probability vector.
pub trait ImageClassifier: Send + Sync {
    fn predict(&self, input: &Array4<f32>) -> Result<Vec<f32>, InferenceError>;
}

/// TorchScript-backed classifier. The module handle is serialized behind a
/// mutex; forward passes for the same model never overlap.
pub struct TorchClassifier {
    module: Mutex<CModule>,
}

impl TorchClassifier {
    pub fn load(path: &Path) -> Result<Self, tch::TchError> {
        let device = Device::cuda_if_available();
        let module = CModule::load_on_device(path, device)?;
        Ok(Self {
            module: Mutex::new(module),
        })
    }
}

impl ImageClassifier for TorchClassifier {
    fn predict(&self, input: &Array4<f32>) -> Result<Vec<f32>, InferenceError> {
        let (batch, height, width, channels) = input.dim();
        let flat: Vec<f32> = input.iter().copied().collect();
        let tensor = Tensor::from_slice(&flat).view([
            batch as i64,
            height as i64,
            width as i64,
            channels as i64,
        ]);

        let module = self
            .module
            .lock()
            .map_err(|_| InferenceError::Model("model handle poisoned".to_string()))?;
        let output = module
            .forward_ts(&[tensor])
            .map_err(|e| InferenceError::Model(e.to_string()))?;

        // Exported modules emit logits; softmax turns them into the
        // probability vector the aggregation layer expects.
        let probabilities = output.softmax(-1, Kind::Float).view([-1]);
        let count = probabilities.size()[0] as usize;
        let mut scores = vec![0.0f32; count];
        probabilities.copy_data(&mut scores, count);
        Ok(scores)
    }
}

#[cfg(test)]
pub(crate) struct StubClassifier {
    pub scores: Vec<f32>,
}

#[cfg(test)]
impl ImageClassifier for StubClassifier {
    fn predict(&self, _input: &Array4<f32>) -> Result<Vec<f32>, InferenceError> {
        Ok(self.scores.clone())
    }
}
