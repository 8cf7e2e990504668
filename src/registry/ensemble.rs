use std::path::Path;
use std::sync::Arc;

use log::{info, warn};

use crate::inference::classifier::{ImageClassifier, TorchClassifier};
use crate::model::Category;
use crate::registry::manifest::manifest;

/// A successfully loaded model: display name, the resolution its input is
/// resized to, and the shared classifier handle.
pub struct ModelEntry {
    pub name: String,
    pub input_size: (u32, u32),
    pub classifier: Arc<dyn ImageClassifier>,
}

/// All loaded models for one category, in manifest order.
pub struct Ensemble {
    pub category: Category,
    pub models: Vec<ModelEntry>,
}

impl Ensemble {
    fn load(category: Category, model_dir: &Path) -> Self {
        let mut models = Vec::new();

        for spec in manifest(category) {
            let path = model_dir.join(spec.file);
            if !path.exists() {
                warn!("Model file not found: {}", path.display());
                continue;
            }
            match TorchClassifier::load(&path) {
                Ok(classifier) => {
                    info!("Loaded {} ({})", spec.name, category.display_name());
                    models.push(ModelEntry {
                        name: spec.name.to_string(),
                        input_size: spec.input_size,
                        classifier: Arc::new(classifier),
                    });
                }
                Err(e) => {
                    warn!(
                        "Error loading {} ({}): {}",
                        spec.name,
                        category.display_name(),
                        e
                    );
                }
            }
        }

        if models.is_empty() {
            warn!("No {} models loaded", category.key());
        }

        Self { category, models }
    }

    #[cfg(test)]
    pub fn from_entries(category: Category, models: Vec<ModelEntry>) -> Self {
        Self { category, models }
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Immutable process-wide registry, built once at startup and injected into
/// request handlers. Replaces the module-level globals of earlier designs.
pub struct EnsembleRegistry {
    cob: Ensemble,
    leaf: Ensemble,
}

impl EnsembleRegistry {
    pub fn load(model_dir: &Path) -> Self {
        Self {
            cob: Ensemble::load(Category::Cob, model_dir),
            leaf: Ensemble::load(Category::Leaf, model_dir),
        }
    }

    #[cfg(test)]
    pub fn from_ensembles(cob: Ensemble, leaf: Ensemble) -> Self {
        Self { cob, leaf }
    }

    pub fn ensemble(&self, category: Category) -> &Ensemble {
        match category {
            Category::Cob => &self.cob,
            Category::Leaf => &self.leaf,
        }
    }

    /// True when neither category has a single usable model.
    pub fn is_empty(&self) -> bool {
        self.cob.is_empty() && self.leaf.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_from_an_empty_directory_yields_empty_ensembles() {
        let dir = tempfile::tempdir().unwrap();
        let registry = EnsembleRegistry::load(dir.path());

        assert!(registry.is_empty());
        assert_eq!(registry.ensemble(Category::Cob).len(), 0);
        assert_eq!(registry.ensemble(Category::Leaf).len(), 0);
    }

    #[test]
    fn an_unreadable_model_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("resnet50_cob.pt"), b"not a torchscript file").unwrap();

        let registry = EnsembleRegistry::load(dir.path());
        assert_eq!(registry.ensemble(Category::Cob).len(), 0);
    }
}
