//! Transfer-term derivation.

use crate::{FlightRecord, TransferTerm};

/// Interline flag of a single leg.
///
/// An explicit tag wins. Without one the recheck flag stands in for it.
pub fn resolve_interline(record: &FlightRecord) -> bool {
    record.virtual_interline.unwrap_or(record.recheck_baggage)
}

/// One term per adjacent pair of records.
///
/// The transfer between leg `i` and leg `i + 1` is described by leg `i`;
/// normalization has already moved "after"-style flags onto it.
pub fn to_transfer_terms(records: &[FlightRecord]) -> Vec<TransferTerm> {
    records
        .windows(2)
        .map(|pair| TransferTerm {
            is_virtual_interline: resolve_interline(&pair[0]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_tag_wins_over_recheck() {
        let record = FlightRecord::new("AAA", "BBB", true).with_virtual_interline(false);
        assert!(!resolve_interline(&record));

        let record = FlightRecord::new("AAA", "BBB", false).with_virtual_interline(true);
        assert!(resolve_interline(&record));
    }

    #[test]
    fn falls_back_to_recheck() {
        assert!(resolve_interline(&FlightRecord::new("AAA", "BBB", true)));
        assert!(!resolve_interline(&FlightRecord::new("AAA", "BBB", false)));
    }

    #[test]
    fn term_count_is_legs_minus_one() {
        let records: Vec<_> = (0..4)
            .map(|_| FlightRecord::new("AAA", "BBB", false))
            .collect();
        assert_eq!(to_transfer_terms(&records).len(), 3);
        assert!(to_transfer_terms(&records[..1]).is_empty());
        assert!(to_transfer_terms(&[]).is_empty());
    }

    #[test]
    fn last_leg_never_describes_a_transfer() {
        let records = vec![
            FlightRecord::new("AAA", "BBB", false),
            FlightRecord::new("BBB", "CCC", true),
        ];
        let terms = to_transfer_terms(&records);
        assert_eq!(terms, vec![TransferTerm { is_virtual_interline: false }]);
    }
}
