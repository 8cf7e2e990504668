use crate::report::Report;

/// Server-rendered result page. The chart fragment is inserted as-is; it
/// needs the plotly.js runtime, pulled from the CDN in the page head.
pub fn render(report: &Report) -> String {
    let category = report.category.display_name();

    let mut rows = String::new();
    for record in &report.records {
        rows.push_str(&format!(
            "      <tr><td>{}</td><td>{}</td><td>{:.2}</td></tr>\n",
            escape_html(&record.model_name),
            escape_html(&record.predicted_label),
            record.confidence_percent
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Corn {category} Results</title>
  <script src="https://cdn.plot.ly/plotly-2.27.0.min.js"></script>
  <style>
    body {{ font-family: sans-serif; margin: 2rem auto; max-width: 960px; color: #222; }}
    table {{ border-collapse: collapse; width: 100%; margin-bottom: 1.5rem; }}
    th, td {{ border: 1px solid #ccc; padding: 0.5rem 0.75rem; text-align: left; }}
    th {{ background: #f0f0e8; }}
    .best {{ background: #eef7ee; border: 1px solid #9c9; padding: 0.75rem 1rem; margin-bottom: 1.5rem; }}
    .uploaded {{ max-width: 320px; border: 1px solid #ccc; }}
  </style>
</head>
<body>
  <h1>Corn {category} Classification Results</h1>
  <div class="best">
    <strong>Best model:</strong> {best_model} &mdash; {best_label} ({best_confidence:.2}%)
  </div>
  <table>
    <thead>
      <tr><th>Model</th><th>Prediction</th><th>Confidence (%)</th></tr>
    </thead>
    <tbody>
{rows}    </tbody>
  </table>
  {chart}
  <h2>Uploaded Image</h2>
  <img class="uploaded" src="{image_url}" alt="uploaded corn {category_lower} image">
  <p><a href="/">Classify another image</a></p>
</body>
</html>
"#,
        category = category,
        category_lower = report.category.key(),
        best_model = escape_html(&report.best.model_name),
        best_label = escape_html(&report.best.predicted_label),
        best_confidence = report.best.confidence_percent,
        rows = rows,
        chart = report.chart_html,
        image_url = escape_html(&report.image_url),
    )
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, PredictionRecord};

    #[test]
    fn escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html(r#"<img src="x">&co"#),
            "&lt;img src=&quot;x&quot;&gt;&amp;co"
        );
    }

    #[test]
    fn page_lists_every_record_and_the_best_summary() {
        let records = vec![
            PredictionRecord {
                model_name: "ResNet50".to_string(),
                predicted_label: "Common_Rust".to_string(),
                confidence_percent: 58.31,
            },
            PredictionRecord {
                model_name: "DenseNet201".to_string(),
                predicted_label: "Healthy".to_string(),
                confidence_percent: 97.05,
            },
        ];
        let report = Report {
            category: Category::Leaf,
            best: records[1].clone(),
            records,
            chart_html: "<div id=\"confidence-chart\"></div>".to_string(),
            image_url: "/static/uploads/ab12cd34_leaf.png".to_string(),
        };

        let html = render(&report);
        assert!(html.contains("<td>ResNet50</td>"));
        assert!(html.contains("<td>58.31</td>"));
        assert!(html.contains("DenseNet201"));
        assert!(html.contains("97.05"));
        assert!(html.contains("/static/uploads/ab12cd34_leaf.png"));
        assert!(html.contains("confidence-chart"));
    }
}
