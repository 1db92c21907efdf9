//! Command implementations for the energy monitor CLI.
//!
//! Mirrors the screens of the web apps: consumption and production series
//! for one calendar window, and the latest temperature snapshot.

use clap::Subcommand;

pub mod report;

const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Subcommand)]
pub enum Command {
    /// Print the consumption series for one calendar window
    Consumption {
        /// Time bucket: hours, days, weeks or months
        #[arg(short, long, default_value = "days")]
        interval: String,

        /// Window anchor date (YYYY-MM-DD); defaults to the current window
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Print the production series for one source and calendar window
    Production {
        /// Production source: solar, wind or total
        #[arg(short, long, default_value = "total")]
        source: String,

        /// Time bucket: hours, days, weeks or months
        #[arg(short, long, default_value = "days")]
        interval: String,

        /// Window anchor date (YYYY-MM-DD); defaults to the current window
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Print the latest reading of every temperature sensor
    Temperatures,
}

/// Resolve the backend base URL: explicit flag, then HEM_API_URL, then the
/// default development address.
pub fn resolve_base_url(flag: Option<String>) -> String {
    resolve_base_url_from(flag, std::env::var("HEM_API_URL").ok())
}

// The env lookup is passed in so this stays testable without mutating the
// process environment.
fn resolve_base_url_from(flag: Option<String>, env: Option<String>) -> String {
    flag.or(env).unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

pub async fn run(base_url: String, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Consumption { interval, date } => {
            report::run_consumption(&base_url, &interval, date.as_deref()).await
        }
        Command::Production {
            source,
            interval,
            date,
        } => report::run_production(&base_url, &source, &interval, date.as_deref()).await,
        Command::Temperatures => report::run_temperatures(&base_url).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_base_url_prefers_flag() {
        let url = resolve_base_url_from(
            Some("http://example:9000".to_string()),
            Some("http://env:1234".to_string()),
        );
        assert_eq!(url, "http://example:9000");
    }

    #[test]
    fn test_resolve_base_url_uses_env_when_no_flag() {
        let url = resolve_base_url_from(None, Some("http://env:1234".to_string()));
        assert_eq!(url, "http://env:1234");
    }

    #[test]
    fn test_resolve_base_url_falls_back_to_default() {
        assert_eq!(resolve_base_url_from(None, None), DEFAULT_API_URL);
    }
}
