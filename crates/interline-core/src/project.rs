//! Projection of normalized records into downstream flight legs.

use crate::{FlightLeg, FlightRecord};

/// One leg per record, in order. Reads the post-normalization recheck flag.
pub fn to_legs(records: &[FlightRecord]) -> Vec<FlightLeg> {
    records
        .iter()
        .map(|record| FlightLeg {
            origin: record.origin.clone(),
            destination: record.destination.clone(),
            recheck_baggage: record.recheck_baggage,
        })
        .collect()
}
