//! End-to-end scenarios over in-memory flight records
//!
//! Each case lists the partner's recheck flags, the switches, and the
//! expected downstream legs and transfer terms.

use interline_core::{process, FlightRecord, ShiftConfig};
use rstest::rstest;

const AIRPORTS: [&str; 5] = ["LED", "MOW", "IST", "BCN", "LIS"];

/// Records whose interline tag is absent.
fn recheck_only(flags: &[bool]) -> Vec<FlightRecord> {
    flags
        .iter()
        .enumerate()
        .map(|(i, &rb)| FlightRecord::new(AIRPORTS[i], AIRPORTS[i + 1], rb))
        .collect()
}

/// Records whose interline tag mirrors the recheck flag.
fn mirrored(flags: &[bool]) -> Vec<FlightRecord> {
    recheck_only(flags)
        .into_iter()
        .map(|r| {
            let rb = r.recheck_baggage;
            r.with_virtual_interline(rb)
        })
        .collect()
}

fn run(records: Vec<FlightRecord>, config: ShiftConfig) -> (Vec<bool>, Vec<bool>) {
    let flight = process(records, config);
    let legs = flight.flight_legs.iter().map(|l| l.recheck_baggage).collect();
    let terms = flight
        .transfer_terms
        .iter()
        .map(|t| t.is_virtual_interline)
        .collect();
    (legs, terms)
}

// === Pass-through (false, false) ===

#[rstest]
#[case(&[false, false], &[false, false], &[false])]
#[case(&[true, false], &[true, false], &[true])]
#[case(&[false, true, false], &[false, true, false], &[false, true])]
#[case(&[true, false, true, false], &[true, false, true, false], &[true, false, true])]
fn test_pass_through(
    #[case] partner: &[bool],
    #[case] legs: &[bool],
    #[case] terms: &[bool],
) {
    let config = ShiftConfig::new(false, false);
    assert_eq!(run(recheck_only(partner), config), (legs.to_vec(), terms.to_vec()));
    assert_eq!(run(mirrored(partner), config), (legs.to_vec(), terms.to_vec()));
}

// === Shift recheck only (true, false), interline tag absent ===

#[rstest]
#[case(&[false, false], &[false, false], &[false])]
#[case(&[false, true], &[true, false], &[true])]
#[case(&[false, true, false], &[true, false, false], &[true, false])]
#[case(&[false, true, false, true], &[true, false, true, false], &[true, false, true])]
fn test_shift_recheck_without_interline_tags(
    #[case] partner: &[bool],
    #[case] legs: &[bool],
    #[case] terms: &[bool],
) {
    let got = run(recheck_only(partner), ShiftConfig::new(true, false));
    assert_eq!(got, (legs.to_vec(), terms.to_vec()));
}

// === Shift both (true, true) ===

#[rstest]
#[case(&[false, false], &[false, false], &[false])]
#[case(&[false, true], &[true, false], &[true])]
#[case(&[false, true, false], &[true, false, false], &[true, false])]
#[case(&[false, true, false, true], &[true, false, true, false], &[true, false, true])]
fn test_shift_both(
    #[case] partner: &[bool],
    #[case] legs: &[bool],
    #[case] terms: &[bool],
) {
    let config = ShiftConfig::new(true, true);
    assert_eq!(run(mirrored(partner), config), (legs.to_vec(), terms.to_vec()));
    assert_eq!(run(recheck_only(partner), config), (legs.to_vec(), terms.to_vec()));
}

#[test]
fn test_explicit_interline_overrides_recheck_in_terms() {
    let records = vec![
        FlightRecord::new("LED", "MOW", false).with_virtual_interline(false),
        FlightRecord::new("MOW", "IST", true).with_virtual_interline(false),
        FlightRecord::new("IST", "BCN", false).with_virtual_interline(false),
    ];
    let (legs, terms) = run(records, ShiftConfig::new(true, true));
    assert_eq!(legs, vec![true, false, false]);
    assert_eq!(terms, vec![false, false]);
}

#[test]
fn test_legs_keep_route() {
    let flight = process(recheck_only(&[false, true, false]), ShiftConfig::new(true, true));
    let route: Vec<(&str, &str)> = flight
        .flight_legs
        .iter()
        .map(|l| (l.origin.as_str(), l.destination.as_str()))
        .collect();
    assert_eq!(route, vec![("LED", "MOW"), ("MOW", "IST"), ("IST", "BCN")]);
}
