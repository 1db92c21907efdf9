//! HTTP client for the energy backend.
//!
//! Four logical operations: consumption series, production series (per
//! source), per-bucket temperature series and the latest-temperatures
//! snapshot. Series endpoints return
//! `{"data": {label: reading | null, ...}}` with labels in chronological
//! order; the temperatures endpoint returns the backend's
//! `{"data": [meta, [{"sensor": name, "C": value}, ...]]}` shape.
//!
//! The client compiles for both native and wasm32 targets; it carries no
//! runtime dependency of its own.

use crate::error::{ApiError, Result};
use crate::fetch::FetchRequest;
use crate::interval::{ProductionSource, TimeInterval};
use crate::series::MetricSeries;
use chrono::NaiveDate;
use log::debug;
use serde_json::Value;

/// Date format used for backend query parameters: "YYYY-MM-DD"
pub const DATE_PARAM_FORMAT: &str = "%Y-%m-%d";

/// Client for the energy backend REST API.
#[derive(Debug, Clone)]
pub struct EnergyApi {
    client: reqwest::Client,
    base_url: String,
}

impl EnergyApi {
    pub fn new(base_url: impl Into<String>) -> EnergyApi {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        EnergyApi {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Fetch the consumption series for one calendar window.
    pub async fn consumption(&self, interval: TimeInterval, date: NaiveDate) -> Result<MetricSeries> {
        let url = format!(
            "{}/measurement/consumption/{}?date={}",
            self.base_url,
            interval.as_path_segment(),
            date.format(DATE_PARAM_FORMAT)
        );
        let body = self.get_json(&url).await?;
        parse_series(&body)
    }

    /// Fetch the production series for one source and calendar window.
    pub async fn production(
        &self,
        source: ProductionSource,
        interval: TimeInterval,
        date: NaiveDate,
    ) -> Result<MetricSeries> {
        let url = format!(
            "{}/measurement/production/{}/{}?date={}",
            self.base_url,
            source.as_path_segment(),
            interval.as_path_segment(),
            date.format(DATE_PARAM_FORMAT)
        );
        let body = self.get_json(&url).await?;
        parse_series(&body)
    }

    /// Fetch the per-bucket temperature series for one calendar window.
    ///
    /// Same wire shape and bucket labels as the consumption series, so the
    /// two can be layered in one chart.
    pub async fn temperature_series(
        &self,
        interval: TimeInterval,
        date: NaiveDate,
    ) -> Result<MetricSeries> {
        let url = format!(
            "{}/measurement/temperature/{}?date={}",
            self.base_url,
            interval.as_path_segment(),
            date.format(DATE_PARAM_FORMAT)
        );
        let body = self.get_json(&url).await?;
        parse_series(&body)
    }

    /// Fetch the most recent reading of every temperature sensor.
    ///
    /// Returned as a series keyed by sensor name (first word only, matching
    /// how the backend labels its sensors).
    pub async fn temperatures(&self) -> Result<MetricSeries> {
        let url = format!("{}/temperatures/latest", self.base_url);
        let body = self.get_json(&url).await?;
        parse_temperatures(&body)
    }

    /// Execute a fetch description chosen by
    /// [`select_fetch_op`](crate::fetch::select_fetch_op).
    pub async fn execute(&self, request: FetchRequest) -> Result<MetricSeries> {
        match request {
            FetchRequest::Consumption { interval, date } => self.consumption(interval, date).await,
            FetchRequest::Production {
                source,
                interval,
                date,
            } => self.production(source, interval, date).await,
            FetchRequest::Temperatures => self.temperatures().await,
        }
    }

    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!("GET {url}");
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::BadStatus(status.as_u16()));
        }
        response
            .json::<Value>()
            .await
            .map_err(|_| ApiError::MalformedPayload("response body is not valid JSON"))
    }
}

/// Parse a series payload into an ordered label -> optional-reading mapping.
fn parse_series(body: &Value) -> Result<MetricSeries> {
    let data = body
        .get("data")
        .and_then(Value::as_object)
        .ok_or(ApiError::MalformedPayload("missing \"data\" object"))?;
    let mut series = MetricSeries::new();
    for (label, value) in data {
        let reading = match value {
            Value::Null => None,
            other => Some(
                other
                    .as_f64()
                    .ok_or(ApiError::MalformedPayload("non-numeric reading"))?,
            ),
        };
        series.push(label.clone(), reading);
    }
    Ok(series)
}

/// Parse the latest-temperatures payload.
///
/// The sensor list is the second element of the `data` array; each entry
/// carries a `sensor` name and a `C` reading. Sensor names are trimmed to
/// their first word.
fn parse_temperatures(body: &Value) -> Result<MetricSeries> {
    let entries = body
        .get("data")
        .and_then(Value::as_array)
        .and_then(|data| data.get(1))
        .and_then(Value::as_array)
        .ok_or(ApiError::MalformedPayload("missing sensor list"))?;
    let mut snapshot = MetricSeries::new();
    for entry in entries {
        let sensor = entry
            .get("sensor")
            .and_then(Value::as_str)
            .ok_or(ApiError::MalformedPayload("sensor entry without a name"))?;
        let celsius = entry
            .get("C")
            .and_then(Value::as_f64)
            .ok_or(ApiError::MalformedPayload("sensor entry without a reading"))?;
        let name = sensor.split_whitespace().next().unwrap_or(sensor);
        snapshot.push(name, Some(celsius));
    }
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;
    use serde_json::json;

    const SERIES_BODY: &str = r#"{
        "data": {
            "2024-05-06": 3.0,
            "2024-05-07": null,
            "2024-05-08": 5.0
        }
    }"#;

    #[test]
    fn test_parse_series_keeps_order_and_absent_readings() {
        let body: Value = serde_json::from_str(SERIES_BODY).unwrap();
        let series = parse_series(&body).unwrap();
        let labels: Vec<&str> = series.labels().collect();
        assert_eq!(labels, vec!["2024-05-06", "2024-05-07", "2024-05-08"]);
        let values: Vec<Option<f64>> = series.values().collect();
        assert_eq!(values, vec![Some(3.0), None, Some(5.0)]);
    }

    #[test]
    fn test_parse_series_rejects_non_numeric_reading() {
        let body = json!({"data": {"2024-05-06": "high"}});
        assert!(matches!(
            parse_series(&body),
            Err(ApiError::MalformedPayload(_))
        ));
    }

    #[test]
    fn test_parse_temperatures_trims_sensor_names() {
        let body = json!({
            "data": [
                {"count": 4},
                [
                    {"sensor": "Kitchen sensor A3", "C": 21.5},
                    {"sensor": "Garage", "C": 12.0}
                ]
            ]
        });
        let snapshot = parse_temperatures(&body).unwrap();
        let labels: Vec<&str> = snapshot.labels().collect();
        assert_eq!(labels, vec!["Kitchen", "Garage"]);
        assert_eq!(snapshot.mean(), Some(16.75));
    }

    #[test]
    fn test_parse_temperatures_rejects_flat_payload() {
        let body = json!({"data": {"Kitchen": 21.5}});
        assert!(matches!(
            parse_temperatures(&body),
            Err(ApiError::MalformedPayload(_))
        ));
    }

    #[tokio::test]
    async fn test_consumption_fetch() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock(
                "GET",
                "/measurement/consumption/daily?date=2024-05-06",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(SERIES_BODY)
            .create_async()
            .await;

        let api = EnergyApi::new(server.url());
        let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        let series = api.consumption(TimeInterval::Days, date).await.unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.sum(), 8.0);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_temperature_series_targets_measurement_path() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock(
                "GET",
                "/measurement/temperature/daily?date=2024-05-06",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({"data": {"2024-05-06": 21.5, "2024-05-07": null}}).to_string(),
            )
            .create_async()
            .await;

        let api = EnergyApi::new(server.url());
        let date = NaiveDate::from_ymd_opt(2024, 5, 6).unwrap();
        let series = api
            .temperature_series(TimeInterval::Days, date)
            .await
            .unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series.values().collect::<Vec<_>>(), vec![Some(21.5), None]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_production_fetch_targets_source_path() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock(
                "GET",
                "/measurement/production/wind/monthly?date=2024-01-01",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({"data": {"January": 40.5}}).to_string())
            .create_async()
            .await;

        let api = EnergyApi::new(server.url());
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let series = api
            .production(ProductionSource::Wind, TimeInterval::Months, date)
            .await
            .unwrap();

        assert_eq!(series.len(), 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_server_error_maps_to_bad_status() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/temperatures/latest")
            .with_status(500)
            .create_async()
            .await;

        let api = EnergyApi::new(server.url());
        let result = api.temperatures().await;

        assert!(matches!(result, Err(ApiError::BadStatus(500))));
    }

    #[tokio::test]
    async fn test_execute_dispatches_temperatures() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/temperatures/latest")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({"data": [{}, [{"sensor": "Attic", "C": 7.25}]]}).to_string(),
            )
            .create_async()
            .await;

        let api = EnergyApi::new(server.url());
        let snapshot = api.execute(FetchRequest::Temperatures).await.unwrap();

        assert_eq!(snapshot.labels().collect::<Vec<_>>(), vec!["Attic"]);
        mock.assert_async().await;
    }
}
