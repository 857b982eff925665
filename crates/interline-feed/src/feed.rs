//! Partner feed reader.
//!
//! The partner sends one fixed document shape:
//!
//! ```xml
//! <response>
//!   <variant>
//!     <segment>
//!       <flight>
//!         <departure>LED</departure>
//!         <arrival>MOW</arrival>
//!         <baggageRecheck>true</baggageRecheck>
//!         <virtualInterline>true</virtualInterline>
//!       </flight>
//!     </segment>
//!   </variant>
//! </response>
//! ```
//!
//! `baggageRecheck` defaults to false when missing; a missing
//! `virtualInterline` stays unset. Everything else is skipped.

use std::path::Path;

use interline_core::{FlightRecord, LocationCode};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{FeedError, Result};

/// A parsed partner document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PartnerResponse {
    pub offers: Vec<Offer>,
}

/// One `<variant>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Offer {
    pub segments: Vec<Segment>,
}

/// One `<segment>`: an ordered group of flights.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Segment {
    pub flights: Vec<FlightRecord>,
}

impl PartnerResponse {
    /// First segment of the first offer, the only group that gets processed.
    pub fn first_segment(&self) -> Result<&Segment> {
        self.offers
            .first()
            .ok_or(FeedError::NoOffers)?
            .segments
            .first()
            .ok_or(FeedError::NoSegments)
    }

    /// Owned variant of [`first_segment`](Self::first_segment).
    pub fn into_first_segment(self) -> Result<Segment> {
        self.offers
            .into_iter()
            .next()
            .ok_or(FeedError::NoOffers)?
            .segments
            .into_iter()
            .next()
            .ok_or(FeedError::NoSegments)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Departure,
    Arrival,
    BaggageRecheck,
    VirtualInterline,
}

impl Field {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"departure" => Some(Self::Departure),
            b"arrival" => Some(Self::Arrival),
            b"baggageRecheck" => Some(Self::BaggageRecheck),
            b"virtualInterline" => Some(Self::VirtualInterline),
            _ => None,
        }
    }

    fn tag(&self) -> &'static str {
        match self {
            Self::Departure => "departure",
            Self::Arrival => "arrival",
            Self::BaggageRecheck => "baggageRecheck",
            Self::VirtualInterline => "virtualInterline",
        }
    }
}

/// Where an open element sits in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Root,
    Offer,
    Segment,
    Flight,
    Field(Field),
    Skipped,
}

#[derive(Debug, Default)]
struct FlightDraft {
    origin: String,
    destination: String,
    recheck_baggage: bool,
    virtual_interline: Option<bool>,
}

impl FlightDraft {
    fn set(&mut self, field: Field, text: &str) -> Result<()> {
        match field {
            Field::Departure => self.origin = text.to_string(),
            Field::Arrival => self.destination = text.to_string(),
            Field::BaggageRecheck => self.recheck_baggage = parse_bool(field.tag(), text)?,
            Field::VirtualInterline => {
                self.virtual_interline = Some(parse_bool(field.tag(), text)?)
            }
        }
        Ok(())
    }

    fn finish(self) -> FlightRecord {
        FlightRecord {
            origin: LocationCode::new(self.origin),
            destination: LocationCode::new(self.destination),
            recheck_baggage: self.recheck_baggage,
            virtual_interline: self.virtual_interline,
        }
    }
}

/// Accepts the spellings `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(tag: &'static str, value: &str) -> Result<bool> {
    match value.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(FeedError::InvalidBool {
            tag,
            value: other.to_string(),
        }),
    }
}

struct FeedParser {
    response: PartnerResponse,
    stack: Vec<Frame>,
    flight: Option<FlightDraft>,
    text: String,
}

impl FeedParser {
    fn new() -> Self {
        Self {
            response: PartnerResponse::default(),
            stack: Vec::new(),
            flight: None,
            text: String::new(),
        }
    }

    fn in_field(&self) -> bool {
        matches!(self.stack.last(), Some(Frame::Field(_)))
    }

    fn open(&mut self, element: &BytesStart<'_>) {
        let name = element.local_name();
        let frame = match (self.stack.last(), name.as_ref()) {
            (None, _) => Frame::Root,
            (Some(Frame::Root), b"variant") => {
                self.response.offers.push(Offer::default());
                Frame::Offer
            }
            (Some(Frame::Offer), b"segment") => {
                if let Some(offer) = self.response.offers.last_mut() {
                    offer.segments.push(Segment::default());
                }
                Frame::Segment
            }
            (Some(Frame::Segment), b"flight") => {
                self.flight = Some(FlightDraft::default());
                Frame::Flight
            }
            (Some(Frame::Flight), tag) => match Field::from_tag(tag) {
                Some(field) => {
                    self.text.clear();
                    Frame::Field(field)
                }
                None => Frame::Skipped,
            },
            _ => Frame::Skipped,
        };

        if frame == Frame::Skipped {
            trace!(
                "skipping <{}> at depth {}",
                String::from_utf8_lossy(name.as_ref()),
                self.stack.len()
            );
        }
        self.stack.push(frame);
    }

    fn close(&mut self) -> Result<()> {
        match self.stack.pop() {
            Some(Frame::Field(field)) => {
                if let Some(flight) = self.flight.as_mut() {
                    flight.set(field, &self.text)?;
                }
                self.text.clear();
            }
            Some(Frame::Flight) => {
                if let Some(draft) = self.flight.take() {
                    let segment = self
                        .response
                        .offers
                        .last_mut()
                        .and_then(|offer| offer.segments.last_mut());
                    if let Some(segment) = segment {
                        segment.flights.push(draft.finish());
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }
}

/// Parse a partner XML document.
pub fn parse_partner_response(xml: &str) -> Result<PartnerResponse> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut parser = FeedParser::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => parser.open(e),
            Ok(Event::Empty(ref e)) => {
                parser.open(e);
                parser.close()?;
            }
            Ok(Event::End(_)) => parser.close()?,
            Ok(Event::Text(e)) if parser.in_field() => {
                let text = e.unescape().map_err(|err| FeedError::Xml {
                    position: reader.buffer_position(),
                    message: err.to_string(),
                })?;
                parser.text.push_str(&text);
            }
            Ok(Event::CData(e)) if parser.in_field() => {
                parser.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(FeedError::Xml {
                    position: reader.buffer_position(),
                    message: e.to_string(),
                })
            }
            _ => {}
        }
        buf.clear();
    }

    if !parser.stack.is_empty() {
        return Err(FeedError::Xml {
            position: reader.buffer_position(),
            message: format!("document ended with {} unclosed element(s)", parser.stack.len()),
        });
    }

    Ok(parser.response)
}

/// Read a partner feed file into a string.
pub fn read_feed(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    std::fs::read_to_string(path).map_err(|e| FeedError::Io(format!("{}: {}", path.display(), e)))
}
