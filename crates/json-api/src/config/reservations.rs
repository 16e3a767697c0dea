//! Reservations Config

use std::time::Duration;

use clap::Args;
use railmeal_app::domain::reservations::ReservationConfig;

/// Reservation lookup settings.
#[derive(Debug, Args)]
pub struct ReservationsConfig {
    /// Reservation lookup base URL; the PNR is appended as a path segment
    #[arg(long, env = "TRAIN_API_URL")]
    pub train_api_url: String,

    /// Station codes food can be delivered to
    #[arg(long, env = "SERVING_STATIONS", value_delimiter = ',')]
    pub serving_stations: Vec<String>,

    /// Reservation lookup timeout in seconds
    #[arg(long, env = "TRAIN_API_TIMEOUT_SECONDS", default_value_t = 10_u64)]
    pub train_api_timeout_seconds: u64,
}

impl ReservationsConfig {
    pub(crate) fn to_client_config(&self) -> ReservationConfig {
        ReservationConfig {
            base_url: self.train_api_url.clone(),
            serving_stations: self
                .serving_stations
                .iter()
                .map(|code| code.trim().to_string())
                .filter(|code| !code.is_empty())
                .collect(),
            timeout: Duration::from_secs(self.train_api_timeout_seconds),
        }
    }
}
