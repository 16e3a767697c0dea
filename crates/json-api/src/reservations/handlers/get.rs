//! Get Reservation Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use railmeal_app::domain::reservations::{JourneyDetails, Station};

use crate::{extensions::*, reservations::errors::into_status_error, state::State};

/// Station Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StationResponse {
    pub station_name: String,
    pub station_code: String,
    pub arrives: String,
    pub departs: String,
    pub halt: Option<String>,
    pub date: Option<String>,
}

impl From<Station> for StationResponse {
    fn from(station: Station) -> Self {
        Self {
            station_name: station.station_name,
            station_code: station.station_code,
            arrives: station.arrives,
            departs: station.departs,
            halt: station.halt,
            date: station.date,
        }
    }
}

/// Reservation Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReservationResponse {
    pub train_name: Option<String>,
    pub train_number: Option<String>,
    pub date: Option<String>,
    pub seat: Option<String>,
    pub chart_status: Option<String>,

    /// Full schedule, in travel order
    pub train_schedule: Vec<StationResponse>,

    /// Stops on the schedule where food can be delivered
    pub serving_stations: Vec<StationResponse>,
}

impl From<JourneyDetails> for ReservationResponse {
    fn from(details: JourneyDetails) -> Self {
        let journey = details.journey;

        Self {
            train_name: journey.train_name,
            train_number: journey.train_number,
            date: journey.date,
            seat: journey.seat,
            chart_status: journey.chart_status,
            train_schedule: journey
                .train_schedule
                .into_iter()
                .map(StationResponse::from)
                .collect(),
            serving_stations: details
                .serving_stations
                .into_iter()
                .map(StationResponse::from)
                .collect(),
        }
    }
}

/// Get Reservation Handler
///
/// Looks up a PNR with the reservation system.
#[endpoint(
    tags("reservations"),
    summary = "Look Up Reservation",
    responses(
        (status_code = StatusCode::OK, description = "Journey details"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid PNR"),
        (status_code = StatusCode::BAD_GATEWAY, description = "Unreadable upstream response"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Reservation service unavailable"),
    ),
)]
pub(crate) async fn handler(
    pnr: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ReservationResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let pnr = pnr.into_pnr()?;

    let details = state
        .app
        .reservations
        .lookup(pnr)
        .await
        .map_err(into_status_error)?;

    Ok(Json(details.into()))
}
