mod chart;
mod page;

use crate::model::{best_record, Category, PredictionRecord};
use crate::storage::{StorageError, UploadStore};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("no predictions to aggregate")]
    NoPredictions,
    #[error("{0}")]
    Storage(#[from] StorageError),
}

/// Everything the result page needs: the per-model table, the winning
/// record, the chart fragment and the URL of the persisted upload.
pub struct Report {
    pub category: Category,
    pub records: Vec<PredictionRecord>,
    pub best: PredictionRecord,
    pub chart_html: String,
    pub image_url: String,
}

/// Aggregate one request's prediction records: pick the best row, persist
/// the upload, and render the confidence comparison chart.
pub fn build(
    category: Category,
    records: Vec<PredictionRecord>,
    filename: &str,
    bytes: &[u8],
    store: &UploadStore,
) -> Result<Report, ReportError> {
    let best = best_record(&records)
        .ok_or(ReportError::NoPredictions)?
        .clone();
    let image_url = store.save(filename, bytes)?;
    let chart_html = chart::confidence_chart(category, &records);

    Ok(Report {
        category,
        records,
        best,
        chart_html,
        image_url,
    })
}

impl Report {
    pub fn render_page(&self) -> String {
        page::render(self)
    }
}
