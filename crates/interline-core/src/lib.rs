//! interline-core: recheck-baggage and virtual-interline flag normalization.
//!
//! Some partners report the recheck-baggage and virtual-interline flags one
//! leg late relative to where the downstream connecting-flight format
//! expects them. This crate relocates those flags and derives the
//! per-transfer `is_virtual_interline` values.
//!
//! # Phases
//!
//! Processing one group of legs runs three phases, in order:
//!
//! 1. [`normalize()`]: shift flags one leg earlier, in place
//! 2. [`to_legs`]: project records into downstream flight legs
//! 3. [`to_transfer_terms`]: one interline flag per transfer point
//!
//! [`process`] runs all three.
//!
//! # Example
//!
//! ```
//! use interline_core::{process, FlightRecord, ShiftConfig};
//!
//! let records = vec![
//!     FlightRecord::new("LED", "MOW", false),
//!     FlightRecord::new("MOW", "BCN", true),
//! ];
//! let flight = process(records, ShiftConfig::new(true, false));
//!
//! assert!(flight.flight_legs[0].recheck_baggage);
//! assert!(!flight.flight_legs[1].recheck_baggage);
//! assert!(flight.transfer_terms[0].is_virtual_interline);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod project;
pub mod transfer;

pub use config::*;
pub use error::InterlineError;
pub use model::*;
pub use normalize::*;
pub use pipeline::*;
pub use project::*;
pub use transfer::*;
