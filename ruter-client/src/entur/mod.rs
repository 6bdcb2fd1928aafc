//! Entur API access: the HTTP client, the two query types and the raw
//! response decoding.

mod client;
pub mod convert;
mod departures;
mod geocode;
#[cfg(test)]
mod mock;
pub mod types;

pub use client::EnturClient;
pub use convert::ParseError;
pub use departures::DepartureQuery;
pub use geocode::GeocodeQuery;
