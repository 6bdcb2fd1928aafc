//! Departure queries against the journey planner.

use tracing::warn;

use crate::domain::{Departure, Station, StopPlaceId};
use crate::error::Error;

use super::client::EnturClient;
use super::convert::{self, ParseError};
use super::types::GraphqlResponse;

/// Default number of departures to request.
const DEFAULT_NUMBER_OF_DEPARTURES: u32 = 5;

/// Default look-ahead window in seconds (two hours).
const DEFAULT_TIME_RANGE_SECS: u32 = 7200;

/// A lazy departures query for one stop place.
///
/// Fetches at most once, cache-first, on the first call to
/// [`fetch`](Self::fetch) or [`departures`](Self::departures); the decoded
/// result is memoized so iteration is restartable without re-fetching.
/// Construct through [`EnturClient::departures`], which also resolves free
/// text to a stop-place id.
#[derive(Debug)]
pub struct DepartureQuery<'a> {
    client: &'a EnturClient,
    station_id: StopPlaceId,
    number_of_departures: u32,
    time_range_secs: u32,
    fetched: Option<Station>,
}

impl<'a> DepartureQuery<'a> {
    pub(crate) fn new(client: &'a EnturClient, station_id: StopPlaceId) -> Self {
        Self {
            client,
            station_id,
            number_of_departures: DEFAULT_NUMBER_OF_DEPARTURES,
            time_range_secs: DEFAULT_TIME_RANGE_SECS,
            fetched: None,
        }
    }

    /// The stop place this query targets.
    pub fn station_id(&self) -> &StopPlaceId {
        &self.station_id
    }

    /// Request a different number of departures.
    pub fn with_number_of_departures(mut self, n: u32) -> Self {
        self.number_of_departures = n;
        self
    }

    /// Use a different look-ahead window, in seconds.
    pub fn with_time_range(mut self, secs: u32) -> Self {
        self.time_range_secs = secs;
        self
    }

    /// The GraphQL query text, with the stop id and parameters embedded
    /// directly (the journey planner needs no separate variables channel
    /// for this fixed shape).
    pub fn graphql_query(&self) -> String {
        format!(
            r#"{{
  stopPlace(id: "{id}") {{
    id
    name
    estimatedCalls(timeRange: {time_range}, numberOfDepartures: {count}) {{
      expectedArrivalTime
      expectedDepartureTime
      destinationDisplay {{
        frontText
      }}
      serviceJourney {{
        journeyPattern {{
          line {{
            id
            name
            transportMode
          }}
        }}
      }}
    }}
  }}
}}"#,
            id = self.station_id,
            time_range = self.time_range_secs,
            count = self.number_of_departures,
        )
    }

    /// Fetch (once) and return the stop with its departures.
    ///
    /// Cache-first: a fresh cache entry supplies the raw body without any
    /// network call; on a miss the GraphQL query is POSTed and the raw
    /// body persisted before use. A failed cache write degrades to a
    /// warning, never an error.
    pub fn fetch(&mut self) -> Result<&Station, Error> {
        let station = match self.fetched.take() {
            Some(station) => station,
            None => {
                let cache = self.client.cache();
                let raw = match cache.load(self.station_id.as_str()) {
                    Some(raw) => raw,
                    None => {
                        let raw = self.client.post_graphql(&self.graphql_query())?;
                        if let Err(e) = cache.store(self.station_id.as_str(), &raw) {
                            warn!(station_id = %self.station_id, error = %e, "failed to cache response");
                        }
                        raw
                    }
                };
                parse_response(&raw)?
            }
        };
        Ok(self.fetched.insert(station))
    }

    /// The departures for this stop, in server order (effectively by
    /// increasing departure time). Fetches lazily on first access.
    pub fn departures(&mut self) -> Result<&[Departure], Error> {
        Ok(self.fetch()?.departures().unwrap_or(&[]))
    }
}

/// Decode a raw journey-planner response body.
///
/// A missing `data.stopPlace` (unknown id) is a parse error; missing
/// `estimatedCalls` is an empty list, not an error.
fn parse_response(raw: &str) -> Result<Station, Error> {
    let response: GraphqlResponse = serde_json::from_str(raw).map_err(ParseError::json)?;
    let stop = response
        .data
        .ok_or(ParseError::MissingField("data"))?
        .stop_place
        .ok_or(ParseError::MissingField("stopPlace"))?;
    Ok(convert::station(&stop)?)
}
