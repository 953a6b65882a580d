// Console rendering of an analysis
use crate::analyzer::Z_SCORE_THRESHOLD;
use crate::model::{AnalysisResult, Route};
use chrono::NaiveDate;

const RULE_WIDTH: usize = 50;

pub fn render(route: &Route, departure_date: NaiveDate, result: &AnalysisResult) -> String {
    let heavy = "=".repeat(RULE_WIDTH);
    let light = "-".repeat(RULE_WIDTH);

    let mut lines = vec![
        heavy.clone(),
        format!(
            "📊 Flight Price Analysis for {} -> {} ({})",
            route.origin, route.destination, departure_date
        ),
        heavy,
        format!("Total Prices Analyzed: {}", result.count),
        format!("Min Price:             {:.2}", result.min),
        format!("Max Price:             {:.2}", result.max),
        format!("Average (Mean) Price:  {:.2}", result.mean),
        format!("Standard Deviation:    {:.2}", result.std_dev),
        light,
    ];

    if let Some(note) = result.note() {
        lines.push(format!("ℹ️ {note} Anomaly check skipped."));
    } else {
        lines.push(format!(
            "Anomalies Found (Z-score > {}): {}",
            Z_SCORE_THRESHOLD,
            result.anomalies.len()
        ));
        if result.anomalies.is_empty() {
            lines.push("✅ No price anomalies detected.".to_string());
        } else {
            lines.push("🚨 ANOMALOUS PRICES:".to_string());
            lines.extend(
                result
                    .anomalies_descending()
                    .iter()
                    .map(|price| format!("   > {price:.2}")),
            );
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
