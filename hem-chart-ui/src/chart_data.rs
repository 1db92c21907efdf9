//! Series-to-JSON shaping for the D3 chart functions.
//!
//! Charts receive an ordered array of `{label, value}` points rather than an
//! object keyed by label: localized labels are not unique (every Monday of a
//! window formats to "Mo"), and object keys would silently collapse them.

use hem_core::series::MetricSeries;
use serde_json::{json, Value};

/// Serialize a series as an ordered `[{label, value}, ...]` array, with
/// axis labels already localized. Absent readings become `null` values and
/// keep their slot.
pub fn series_points_json(series: &MetricSeries, labels: &[String]) -> String {
    let points: Vec<Value> = labels
        .iter()
        .zip(series.values())
        .map(|(label, value)| {
            json!({
                "label": label,
                "value": value,
            })
        })
        .collect();
    serde_json::to_string(&points).unwrap_or_default()
}

/// Serialize an overlay series as a bare value array, aligned positionally
/// with the column series it is drawn over.
pub fn overlay_values_json(overlay: &MetricSeries) -> String {
    let values: Vec<Value> = overlay.values().map(|value| json!(value)).collect();
    serde_json::to_string(&values).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_keep_order_and_absent_values() {
        let series = MetricSeries::from_pairs(vec![
            ("2024-05-06".to_string(), Some(3.0)),
            ("2024-05-07".to_string(), None),
        ]);
        let labels = vec!["Mo".to_string(), "Tu".to_string()];
        assert_eq!(
            series_points_json(&series, &labels),
            r#"[{"label":"Mo","value":3.0},{"label":"Tu","value":null}]"#
        );
    }

    #[test]
    fn test_duplicate_labels_are_not_collapsed() {
        // Weekly buckets keyed by their Monday dates all format to "Mo"
        let series = MetricSeries::from_pairs(vec![
            ("2024-05-06".to_string(), Some(3.0)),
            ("2024-05-13".to_string(), Some(5.0)),
        ]);
        let labels = vec!["Mo".to_string(), "Mo".to_string()];
        let rendered = series_points_json(&series, &labels);
        assert_eq!(rendered.matches("\"Mo\"").count(), 2);
        assert!(rendered.contains("3.0") && rendered.contains("5.0"));
    }

    #[test]
    fn test_overlay_values_align_positionally() {
        let overlay = MetricSeries::from_pairs(vec![
            ("2024-05-06".to_string(), Some(21.5)),
            ("2024-05-07".to_string(), None),
            ("2024-05-08".to_string(), Some(19.0)),
        ]);
        assert_eq!(overlay_values_json(&overlay), "[21.5,null,19.0]");
    }
}
