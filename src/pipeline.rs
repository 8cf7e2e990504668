use crate::inference::classifier::InferenceError;
use crate::inference::runner;
use crate::model::Category;
use crate::registry::Ensemble;
use crate::report::{self, ReportError};
use crate::storage::UploadStore;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("inference failed: {0}")]
    Inference(#[from] InferenceError),
    #[error("failed to build report: {0}")]
    Report(#[from] ReportError),
}

/// Decode, predict, aggregate, render. Each stage fails with its own typed
/// error; the web layer maps the result onto an HTTP response.
pub fn classify_upload(
    category: Category,
    ensemble: &Ensemble,
    store: &UploadStore,
    filename: &str,
    bytes: &[u8],
) -> Result<String, PipelineError> {
    let image = image::load_from_memory(bytes)?;
    let records = runner::run_ensemble(ensemble, &image)?;
    let report = report::build(category, records, filename, bytes, store)?;
    Ok(report.render_page())
}
