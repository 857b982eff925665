//! interline-feed: partner XML feed in, downstream connecting-flight response out.
//!
//! Reads the partner document, keeps the first segment of the first offer,
//! runs it through [`interline_core::process`] and wraps the result as a
//! [`DeltaResponse`].

use std::path::Path;

use interline_core::{process, process_strict, ShiftConfig};
use tracing::debug;

pub mod error;
pub mod feed;
pub mod response;

pub use error::FeedError;
pub use feed::*;
pub use response::*;

use error::Result;

/// Convert a partner document. The unsupported switch combination is
/// applied as-is after a warning.
pub fn convert_feed(xml: &str, config: ShiftConfig) -> Result<DeltaResponse> {
    let segment = parse_partner_response(xml)?.into_first_segment()?;
    debug!(flights = segment.flights.len(), "parsed first segment");
    Ok(process(segment.flights, config).into())
}

/// Convert a partner document, refusing the unsupported switch combination.
pub fn convert_feed_strict(xml: &str, config: ShiftConfig) -> Result<DeltaResponse> {
    let segment = parse_partner_response(xml)?.into_first_segment()?;
    Ok(process_strict(segment.flights, config)?.into())
}

/// Read and convert a partner feed file.
pub fn parse_file(path: impl AsRef<Path>, config: ShiftConfig) -> Result<DeltaResponse> {
    let xml = read_feed(path)?;
    convert_feed(&xml, config)
}
