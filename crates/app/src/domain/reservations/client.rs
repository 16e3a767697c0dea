//! Reservation system client.

use std::time::Duration;

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use tracing::{debug, warn};

use crate::{
    domain::reservations::{
        errors::ReservationError,
        models::{Journey, JourneyDetails},
    },
    pnr::Pnr,
};

/// Configuration for the reservation lookup.
#[derive(Debug, Clone)]
pub struct ReservationConfig {
    /// Lookup base URL; the PNR is appended as the last path segment.
    pub base_url: String,

    /// Station codes food can be delivered to.
    pub serving_stations: Vec<String>,

    /// Per-request timeout.
    pub timeout: Duration,
}

/// HTTP client for the reservation system.
#[derive(Debug, Clone)]
pub struct HttpReservationsService {
    config: ReservationConfig,
    http: Client,
}

impl HttpReservationsService {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(config: ReservationConfig) -> Result<Self, reqwest::Error> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self { config, http })
    }

    fn url(&self, pnr: &Pnr) -> String {
        format!("{}/{pnr}", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ReservationsService for HttpReservationsService {
    async fn lookup(&self, pnr: Pnr) -> Result<JourneyDetails, ReservationError> {
        let response = self.http.get(self.url(&pnr)).send().await?;

        if !response.status().is_success() {
            let status = response.status();

            warn!(pnr = %pnr, status = status.as_u16(), "reservation lookup failed");

            return Err(ReservationError::UpstreamStatus(status.as_u16()));
        }

        let journey: Journey = response.json().await?;
        let details = JourneyDetails::new(journey, &self.config.serving_stations);

        debug!(
            pnr = %pnr,
            stops = details.journey.train_schedule.len(),
            serving = details.serving_stations.len(),
            "looked up reservation"
        );

        Ok(details)
    }
}

#[automock]
#[async_trait]
pub trait ReservationsService: Send + Sync {
    /// Fetches journey details for `pnr`, with its serving stations.
    async fn lookup(&self, pnr: Pnr) -> Result<JourneyDetails, ReservationError>;
}
