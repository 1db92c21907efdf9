//! Ordered metric series as received from the backend.

use serde::{Deserialize, Serialize};

/// An ordered mapping from a date/time label to an optional reading.
///
/// Order is insertion order as received from the backend, assumed
/// chronological for time series. An absent value means the backend has no
/// reading for that bucket; absent entries are excluded from the summary
/// statistics.
///
/// The latest-temperatures snapshot reuses the same shape with sensor names
/// as labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricSeries {
    points: Vec<(String, Option<f64>)>,
}

impl MetricSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs(points: Vec<(String, Option<f64>)>) -> Self {
        MetricSeries { points }
    }

    pub fn push(&mut self, label: impl Into<String>, value: Option<f64>) {
        self.points.push((label.into(), value));
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<f64>)> {
        self.points.iter().map(|(label, value)| (label.as_str(), *value))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.points.iter().map(|(label, _)| label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = Option<f64>> + '_ {
        self.points.iter().map(|(_, value)| *value)
    }

    /// Sum over present values; 0.0 when no value is present.
    pub fn sum(&self) -> f64 {
        self.values().flatten().sum()
    }

    /// Arithmetic mean over present values only, `None` when no value is
    /// present. Absent entries count toward neither numerator nor
    /// denominator.
    pub fn mean(&self) -> Option<f64> {
        let present: Vec<f64> = self.values().flatten().collect();
        if present.is_empty() {
            None
        } else {
            Some(present.iter().sum::<f64>() / present.len() as f64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_and_mean_skip_absent_readings() {
        let series = MetricSeries::from_pairs(vec![
            ("2024-05-06".to_string(), Some(3.0)),
            ("2024-05-07".to_string(), None),
            ("2024-05-08".to_string(), Some(5.0)),
        ]);
        assert_eq!(series.sum(), 8.0);
        assert_eq!(series.mean(), Some(4.0));
    }

    #[test]
    fn test_empty_series_statistics() {
        let series = MetricSeries::new();
        assert_eq!(series.sum(), 0.0);
        assert_eq!(series.mean(), None);
    }

    #[test]
    fn test_all_absent_series_has_no_mean() {
        let series = MetricSeries::from_pairs(vec![
            ("2024-05-06".to_string(), None),
            ("2024-05-07".to_string(), None),
        ]);
        assert_eq!(series.sum(), 0.0);
        assert_eq!(series.mean(), None);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut series = MetricSeries::new();
        series.push("19", Some(0.4));
        series.push("3", Some(0.1));
        series.push("11", None);
        let labels: Vec<&str> = series.labels().collect();
        assert_eq!(labels, vec!["19", "3", "11"]);
    }
}
