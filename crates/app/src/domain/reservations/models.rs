//! Reservation Models

use serde::{Deserialize, Serialize};

/// A stop on a journey's schedule, as returned by the reservation system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    pub station_name: String,
    pub station_code: String,
    pub arrives: String,
    pub departs: String,

    #[serde(default)]
    pub halt: Option<String>,

    #[serde(default)]
    pub date: Option<String>,
}

/// Journey details for a PNR. Every field is optional upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Journey {
    #[serde(default)]
    pub train_name: Option<String>,

    #[serde(default)]
    pub train_number: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    #[serde(default)]
    pub seat: Option<String>,

    #[serde(default)]
    pub chart_status: Option<String>,

    #[serde(default)]
    pub train_schedule: Vec<Station>,
}

/// A journey together with the stops food can be delivered to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JourneyDetails {
    pub journey: Journey,
    pub serving_stations: Vec<Station>,
}

impl JourneyDetails {
    /// Pairs `journey` with its stops that appear on the allow-list.
    pub fn new<S: AsRef<str>>(journey: Journey, allowed: &[S]) -> Self {
        let serving_stations = serving_stations(&journey, allowed);

        Self {
            journey,
            serving_stations,
        }
    }
}

/// Stops whose station code is allow-listed, in schedule order.
///
/// Codes are compared case-insensitively.
pub fn serving_stations<S: AsRef<str>>(journey: &Journey, allowed: &[S]) -> Vec<Station> {
    journey
        .train_schedule
        .iter()
        .filter(|station| {
            allowed
                .iter()
                .any(|code| code.as_ref().eq_ignore_ascii_case(&station.station_code))
        })
        .cloned()
        .collect()
}
