//! Report implementations: fetch one series from the backend and print it.

use chrono::{Local, NaiveDate};
use hem_core::client::EnergyApi;
use hem_core::interval::{ProductionSource, TimeInterval};
use hem_core::labels::{format_labels, ChartLocale};
use hem_core::series::MetricSeries;
use hem_core::window;
use log::info;

fn parse_interval(value: &str) -> anyhow::Result<TimeInterval> {
    value
        .parse::<TimeInterval>()
        .map_err(|e| anyhow::anyhow!("{e}"))
}

fn parse_source(value: &str) -> anyhow::Result<ProductionSource> {
    value
        .parse::<ProductionSource>()
        .map_err(|e| anyhow::anyhow!("{e}"))
}

/// Resolve the window anchor: an explicit date is normalized to its window
/// start, otherwise the window containing today is used.
fn resolve_anchor(date: Option<&str>, interval: TimeInterval) -> anyhow::Result<NaiveDate> {
    let date = match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| anyhow::anyhow!("invalid date {raw:?}, expected YYYY-MM-DD"))?,
        None => Local::now().date_naive(),
    };
    Ok(window::normalize(date, interval))
}

/// Display locale from the LANG environment variable.
fn env_locale() -> ChartLocale {
    let tag = std::env::var("LANG").unwrap_or_default();
    ChartLocale::detect(&tag)
}

fn print_series(series: &MetricSeries, unit: &str, locale: ChartLocale) {
    let labels = format_labels(series, locale);
    for (label, (_, value)) in labels.iter().zip(series.iter()) {
        match value {
            Some(v) => println!("{label:>12}  {v:>8.2} {unit}"),
            None => println!("{label:>12}  {:>8} {unit}", "-"),
        }
    }
    println!("{:>12}  {:>8.2} {unit}", "total", series.sum());
    if let Some(mean) = series.mean() {
        println!("{:>12}  {:>8.2} {unit}", "average", mean);
    }
}

pub async fn run_consumption(
    base_url: &str,
    interval: &str,
    date: Option<&str>,
) -> anyhow::Result<()> {
    let interval = parse_interval(interval)?;
    let anchor = resolve_anchor(date, interval)?;
    info!("consumption {interval} window starting {anchor}");

    let api = EnergyApi::new(base_url);
    let series = api.consumption(interval, anchor).await?;
    print_series(&series, "kWh", env_locale());
    Ok(())
}

pub async fn run_production(
    base_url: &str,
    source: &str,
    interval: &str,
    date: Option<&str>,
) -> anyhow::Result<()> {
    let source = parse_source(source)?;
    let interval = parse_interval(interval)?;
    let anchor = resolve_anchor(date, interval)?;
    info!("production {source} {interval} window starting {anchor}");

    let api = EnergyApi::new(base_url);
    let series = api.production(source, interval, anchor).await?;
    print_series(&series, "kWh", env_locale());
    Ok(())
}

pub async fn run_temperatures(base_url: &str) -> anyhow::Result<()> {
    let api = EnergyApi::new(base_url);
    let snapshot = api.temperatures().await?;
    for (sensor, reading) in snapshot.iter() {
        match reading {
            Some(celsius) => println!("{sensor:>12}  {celsius:>6.1} °C"),
            None => println!("{sensor:>12}  {:>6} °C", "-"),
        }
    }
    if let Some(mean) = snapshot.mean() {
        println!("{:>12}  {mean:>6.1} °C", "average");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_anchor_normalizes_explicit_date() {
        // 2024-05-09 is a Thursday; the weekly window starts on Monday
        let anchor = resolve_anchor(Some("2024-05-09"), TimeInterval::Days).unwrap();
        assert_eq!(anchor, NaiveDate::from_ymd_opt(2024, 5, 6).unwrap());

        let anchor = resolve_anchor(Some("2024-05-09"), TimeInterval::Months).unwrap();
        assert_eq!(anchor, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    }

    #[test]
    fn test_resolve_anchor_rejects_malformed_date() {
        assert!(resolve_anchor(Some("09.05.2024"), TimeInterval::Days).is_err());
    }

    #[test]
    fn test_parse_interval_rejects_unknown_bucket() {
        assert!(parse_interval("fortnights").is_err());
    }
}
