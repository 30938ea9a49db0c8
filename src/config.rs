use std::str::FromStr;

use anyhow::Context;
use chrono_tz::Tz;
use tracing::info;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// IANA zone used for "today" bucketing, fasting math and all displayed
    /// timestamps.
    pub display_timezone: Tz,
    /// When true the chart endpoint buckets dates in `display_timezone`
    /// instead of the stored UTC date. Defaults to the historical UTC
    /// behavior.
    pub chart_dates_in_local: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("DATABASE_URL environment variable is not set")?;

        let tz_name = std::env::var("TIMEZONE").unwrap_or_else(|_| {
            info!("TIMEZONE not set, using UTC");
            "UTC".to_string()
        });
        let display_timezone = Tz::from_str(&tz_name)
            .map_err(|e| anyhow::anyhow!("invalid TIMEZONE {tz_name:?}: {e}"))?;

        let chart_dates_in_local = std::env::var("CHART_DATES_IN_LOCAL")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        Ok(Self {
            database_url,
            display_timezone,
            chart_dates_in_local,
        })
    }
}
