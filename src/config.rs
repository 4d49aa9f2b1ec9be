//! Runtime settings, fully resolved before the poll loop starts.

use crate::error::DashboardError;
use std::time::Duration;
use url::Url;

/// Status endpoint of the co-located recorder service.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:18080/api/infos";

/// Nominal cadence of the render cycle.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: Url,
    pub interval: Duration,
    /// Render a single frame and exit instead of looping.
    pub once: bool,
}

impl Config {
    pub fn new(endpoint: &str, interval: Duration, once: bool) -> Result<Self, DashboardError> {
        let endpoint = Url::parse(endpoint)?;
        if interval.is_zero() {
            return Err(DashboardError::Config(
                "refresh interval must be non-zero".to_string(),
            ));
        }
        Ok(Self {
            endpoint,
            interval,
            once,
        })
    }
}
