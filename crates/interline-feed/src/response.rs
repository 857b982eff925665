//! Downstream connecting-flight response.

use interline_core::{ConnectingFlight, FlightLeg, TransferTerm};
use serde::{Deserialize, Serialize};

use crate::error::{FeedError, Result};

/// The `flight_legs` / `transfer_terms` part of the downstream response.
///
/// `transfer_terms` holds one list per segment. Only the first segment of
/// the first offer is processed, so it always has exactly one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DeltaResponse {
    pub flight_legs: Vec<FlightLeg>,
    pub transfer_terms: Vec<Vec<TransferTerm>>,
}

impl DeltaResponse {
    pub fn from_connecting_flight(flight: ConnectingFlight) -> Self {
        Self {
            flight_legs: flight.flight_legs,
            transfer_terms: vec![flight.transfer_terms],
        }
    }

    /// Transfer terms of the processed segment.
    pub fn segment_terms(&self) -> &[TransferTerm] {
        self.transfer_terms.first().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| FeedError::Json(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| FeedError::Json(e.to_string()))
    }
}

impl From<ConnectingFlight> for DeltaResponse {
    fn from(flight: ConnectingFlight) -> Self {
        Self::from_connecting_flight(flight)
    }
}
