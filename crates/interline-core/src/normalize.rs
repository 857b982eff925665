//! Flag normalization.
//!
//! Moves "after"-style flags one leg earlier so the leg preceding a
//! transfer carries the flag that describes it.

use tracing::{debug, trace, warn};

use crate::{FlightRecord, ShiftConfig, ShiftMode};

/// Shift recheck and interline flags one leg earlier, in place.
///
/// Single forward pass. For every index `i > 0` whose flag is `true` (and
/// whose switch is on), the flag is set on `i - 1` and cleared on `i`.
/// Writes only ever land below the scan position, so each index is read
/// before anything can overwrite it and a run of adjacent `true` flags moves
/// left by exactly one position.
///
/// - Index 0 never triggers a shift; a `true` already there stays.
/// - An unset interline tag is never touched as a source. A shift landing on
///   an unset predecessor sets it to `Some(true)`.
/// - With both switches off the records are left unchanged.
pub fn normalize(records: &mut [FlightRecord], config: ShiftConfig) {
    if config.mode() == ShiftMode::InterlineOnly {
        warn!(
            "virtual_interline_after without recheck_baggage_after is not a supported \
             partner configuration; shifting interline flags only"
        );
    }

    let mut recheck_shifts = 0usize;
    let mut interline_shifts = 0usize;

    for i in 1..records.len() {
        if config.recheck_baggage_after && records[i].recheck_baggage {
            records[i - 1].recheck_baggage = true;
            records[i].recheck_baggage = false;
            recheck_shifts += 1;
            trace!("moved recheck_baggage from leg {} to leg {}", i, i - 1);
        }

        if config.virtual_interline_after && records[i].virtual_interline == Some(true) {
            records[i - 1].virtual_interline = Some(true);
            records[i].virtual_interline = Some(false);
            interline_shifts += 1;
            trace!("moved virtual_interline from leg {} to leg {}", i, i - 1);
        }
    }

    debug!(
        legs = records.len(),
        recheck_shifts, interline_shifts, "normalized flight flags"
    );
}
