//! Normalize → project legs → derive transfer terms.

use tracing::debug;

use crate::error::Result;
use crate::{normalize, to_legs, to_transfer_terms, ConnectingFlight, FlightRecord, ShiftConfig};

/// Run all three phases over one group of records.
///
/// Never fails: an empty group yields empty legs and terms, and the
/// unsupported switch combination is applied literally after a warning.
pub fn process(mut records: Vec<FlightRecord>, config: ShiftConfig) -> ConnectingFlight {
    normalize(&mut records, config);

    let flight_legs = to_legs(&records);
    let transfer_terms = to_transfer_terms(&records);
    debug!(
        legs = flight_legs.len(),
        terms = transfer_terms.len(),
        mode = ?config.mode(),
        "built connecting flight"
    );

    ConnectingFlight {
        flight_legs,
        transfer_terms,
    }
}

/// Like [`process`], but refuses a switch combination with no defined result.
pub fn process_strict(records: Vec<FlightRecord>, config: ShiftConfig) -> Result<ConnectingFlight> {
    config.validate()?;
    Ok(process(records, config))
}
