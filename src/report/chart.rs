use plotly::common::{TextPosition, Title};
use plotly::layout::Axis;
use plotly::{Bar, Layout, Plot};

use crate::model::{Category, PredictionRecord};

/// Grouped bar chart of per-model confidence, one trace per predicted class
/// so bars are colored and legended by prediction, with the class name as a
/// data label outside the bar.
pub fn confidence_chart(category: Category, records: &[PredictionRecord]) -> String {
    let mut plot = Plot::new();

    for class in predicted_classes(records) {
        let group: Vec<&PredictionRecord> = records
            .iter()
            .filter(|r| r.predicted_label == class)
            .collect();

        let models: Vec<String> = group.iter().map(|r| r.model_name.clone()).collect();
        let confidences: Vec<f32> = group.iter().map(|r| r.confidence_percent).collect();
        let labels: Vec<String> = group.iter().map(|r| r.predicted_label.clone()).collect();

        plot.add_trace(
            Bar::new(models, confidences)
                .name(&class)
                .text_array(labels)
                .text_position(TextPosition::Outside),
        );
    }

    plot.set_layout(
        Layout::new()
            .title(Title::with_text(format!(
                "Corn {} Model Confidence Comparison",
                category.display_name()
            )))
            .x_axis(Axis::new().title(Title::with_text("Model")))
            .y_axis(Axis::new().title(Title::with_text("Confidence (%)"))),
    );

    plot.to_inline_html(Some("confidence-chart"))
}

/// Distinct predicted classes in first-appearance order, so trace colors
/// stay stable across renders of the same result set.
fn predicted_classes(records: &[PredictionRecord]) -> Vec<String> {
    let mut classes: Vec<String> = Vec::new();
    for record in records {
        if !classes.contains(&record.predicted_label) {
            classes.push(record.predicted_label.clone());
        }
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(model: &str, label: &str, confidence: f32) -> PredictionRecord {
        PredictionRecord {
            model_name: model.to_string(),
            predicted_label: label.to_string(),
            confidence_percent: confidence,
        }
    }

    #[test]
    fn chart_is_an_embeddable_fragment_not_a_document() {
        let records = vec![record("ResNet50", "Healthy", 70.0)];
        let html = confidence_chart(Category::Leaf, &records);

        assert!(html.contains("confidence-chart"));
        assert!(!html.contains("<html"));
    }

    #[test]
    fn chart_includes_every_model_and_the_category_title() {
        let records = vec![
            record("ResNet50", "Blight", 45.0),
            record("MobileNetV2", "Healthy", 78.0),
            record("VGG16", "Healthy", 66.0),
        ];
        let html = confidence_chart(Category::Leaf, &records);

        assert!(html.contains("ResNet50"));
        assert!(html.contains("MobileNetV2"));
        assert!(html.contains("VGG16"));
        assert!(html.contains("Corn Leaf Model Confidence Comparison"));
    }

    #[test]
    fn classes_are_deduplicated_in_first_appearance_order() {
        let records = vec![
            record("ResNet50", "Healthy", 70.0),
            record("VGG16", "Blight", 60.0),
            record("InceptionV3", "Healthy", 80.0),
        ];

        assert_eq!(predicted_classes(&records), vec!["Healthy", "Blight"]);
    }
}
