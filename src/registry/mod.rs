mod ensemble;
mod manifest;

pub use ensemble::{Ensemble, EnsembleRegistry, ModelEntry};
pub use manifest::{manifest, ModelSpec};
