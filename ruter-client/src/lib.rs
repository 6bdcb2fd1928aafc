//! Thin blocking client for the Entur public transit APIs.
//!
//! Resolves a human-readable place name to a stop-place id through the
//! geocoder, fetches upcoming departures for the stop from the
//! journey-planner GraphQL endpoint, caches raw responses on disk, and
//! renders human-friendly countdowns.
//!
//! # Example
//!
//! ```no_run
//! use ruter_client::{Config, EnturClient};
//!
//! # fn main() -> Result<(), ruter_client::Error> {
//! let client = EnturClient::new(Config::new("my-app"))?;
//! let mut query = client.departures("Kringsjå")?;
//! for departure in query.departures()? {
//!     println!("{departure}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cache;
pub mod config;
pub mod domain;
pub mod entur;
pub mod error;

pub use cache::{CacheError, ResponseCache};
pub use config::Config;
pub use domain::{Departure, Route, Station, StopPlaceId, TransportMode};
pub use entur::{DepartureQuery, EnturClient, GeocodeQuery, ParseError};
pub use error::Error;
