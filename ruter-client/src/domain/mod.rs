//! Domain value types: lines, departures and stop places.
//!
//! These are plain immutable values, independent of the HTTP layer.
//! Construction from raw API responses lives in [`crate::entur::convert`].

mod departure;
mod route;
mod station;

pub use departure::Departure;
pub use route::{Route, TransportMode};
pub use station::{InvalidStopPlaceId, STOP_PLACE_PREFIX, Station, StopPlaceId};
