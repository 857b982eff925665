//! Core flight types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// IATA location code (airport or city).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct LocationCode(String);

impl LocationCode {
    /// Create a code, trimming whitespace and upper-casing ASCII letters.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// One flight as reported by the partner, before and during normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub origin: LocationCode,
    pub destination: LocationCode,
    pub recheck_baggage: bool,
    /// `None` when the partner never sent the tag. Not the same as `Some(false)`.
    pub virtual_interline: Option<bool>,
}

impl FlightRecord {
    /// Create a record without a virtual-interline tag.
    pub fn new(
        origin: impl Into<LocationCode>,
        destination: impl Into<LocationCode>,
        recheck_baggage: bool,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            recheck_baggage,
            virtual_interline: None,
        }
    }

    /// Attach an explicit virtual-interline tag.
    pub fn with_virtual_interline(mut self, value: bool) -> Self {
        self.virtual_interline = Some(value);
        self
    }
}

/// Downstream flight leg.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightLeg {
    pub origin: LocationCode,
    pub destination: LocationCode,
    pub recheck_baggage: bool,
}

/// Downstream conditions for one transfer point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TransferTerm {
    pub is_virtual_interline: bool,
}

/// Legs and transfer terms of one group, index-consistent with each other.
///
/// `transfer_terms[i]` describes the connection between `flight_legs[i]`
/// and `flight_legs[i + 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConnectingFlight {
    pub flight_legs: Vec<FlightLeg>,
    pub transfer_terms: Vec<TransferTerm>,
}
