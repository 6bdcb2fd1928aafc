//! Conversion from raw API DTOs to domain values.

use chrono::{DateTime, FixedOffset};

use crate::domain::{Departure, Route, Station, StopPlaceId, TransportMode};

use super::types::{EstimatedCallDto, LineDto, StopPlaceDto};

/// Error decoding an API payload into domain values.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    /// The body was not the expected JSON shape (including missing keys)
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// A timestamp field did not parse as RFC 3339
    #[error("invalid timestamp in {field}: {value:?}")]
    Timestamp { field: &'static str, value: String },

    /// A required object was absent from the response
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The response carried an id outside the stop-place namespace
    #[error("invalid stop place id in response: {0:?}")]
    StopPlaceId(String),
}

impl ParseError {
    pub(crate) fn json(err: serde_json::Error) -> Self {
        ParseError::Json {
            message: err.to_string(),
        }
    }
}

/// Parse an RFC 3339 timestamp. The journey planner marks UTC with a
/// literal `Z`, which normalizes to a zero offset.
fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    DateTime::parse_from_rfc3339(value).map_err(|_| ParseError::Timestamp {
        field,
        value: value.to_string(),
    })
}

/// Convert a line object to a [`Route`].
pub fn route(line: &LineDto) -> Route {
    Route::new(
        line.id.clone(),
        line.name.clone(),
        TransportMode::parse(&line.transport_mode),
    )
}

/// Convert one estimated call to a [`Departure`].
pub fn departure(call: &EstimatedCallDto) -> Result<Departure, ParseError> {
    let arrival = parse_timestamp("expectedArrivalTime", &call.expected_arrival_time)?;
    let departure = parse_timestamp("expectedDepartureTime", &call.expected_departure_time)?;
    Ok(Departure::new(
        arrival,
        departure,
        call.destination_display.front_text.clone(),
        route(&call.service_journey.journey_pattern.line),
    ))
}

/// Convert a stop place with its calls to a [`Station`].
///
/// A decode failure in any single call aborts the whole conversion; the
/// journey planner's answer for one stop is taken as all-or-nothing,
/// unlike the geocoder's per-feature filtering.
pub fn station(stop: &StopPlaceDto) -> Result<Station, ParseError> {
    let id = StopPlaceId::parse(&stop.id).map_err(|_| ParseError::StopPlaceId(stop.id.clone()))?;
    let departures = stop
        .estimated_calls
        .iter()
        .map(departure)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Station::new(id, stop.name.clone(), Some(departures)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn call_json(arrival: &str, departure: &str) -> String {
        format!(
            r#"{{
                "expectedArrivalTime": "{arrival}",
                "expectedDepartureTime": "{departure}",
                "destinationDisplay": {{ "frontText": "Sognsvann" }},
                "serviceJourney": {{
                    "journeyPattern": {{
                        "line": {{ "id": "RUT:Line:5", "name": "Sognsvann", "transportMode": "metro" }}
                    }}
                }}
            }}"#
        )
    }

    #[test]
    fn converts_a_call_with_utc_marker() {
        let json = call_json("2024-03-15T12:00:00Z", "2024-03-15T12:01:30Z");
        let dto: EstimatedCallDto = serde_json::from_str(&json).unwrap();
        let dep = departure(&dto).unwrap();

        assert_eq!(dep.destination(), "Sognsvann");
        assert_eq!(dep.departure_time().minute(), 1);
        assert_eq!(dep.departure_time().offset().local_minus_utc(), 0);
        assert_eq!(dep.route().line_number(), "5");
    }

    #[test]
    fn converts_a_call_with_explicit_offset() {
        let json = call_json("2024-06-15T12:00:00+02:00", "2024-06-15T12:01:00+02:00");
        let dto: EstimatedCallDto = serde_json::from_str(&json).unwrap();
        let dep = departure(&dto).unwrap();
        assert_eq!(dep.departure_time().offset().local_minus_utc(), 7200);
    }

    #[test]
    fn malformed_timestamp_is_a_parse_error() {
        let json = call_json("2024-03-15T12:00:00Z", "not-a-time");
        let dto: EstimatedCallDto = serde_json::from_str(&json).unwrap();
        let err = departure(&dto).unwrap_err();
        assert!(matches!(
            err,
            ParseError::Timestamp {
                field: "expectedDepartureTime",
                ..
            }
        ));
    }

    #[test]
    fn station_conversion_is_all_or_nothing() {
        let json = format!(
            r#"{{
                "id": "NSR:StopPlace:59706",
                "name": "Kringsjå",
                "estimatedCalls": [{}, {}]
            }}"#,
            call_json("2024-03-15T12:00:00Z", "2024-03-15T12:01:00Z"),
            call_json("2024-03-15T12:05:00Z", "garbage")
        );
        let dto: StopPlaceDto = serde_json::from_str(&json).unwrap();
        assert!(station(&dto).is_err());
    }

    #[test]
    fn station_without_calls_has_empty_departures() {
        let json = r#"{ "id": "NSR:StopPlace:59706", "name": "Kringsjå" }"#;
        let dto: StopPlaceDto = serde_json::from_str(json).unwrap();
        let station = station(&dto).unwrap();
        assert!(station.departures().is_some_and(|d| d.is_empty()));
    }

    #[test]
    fn station_with_foreign_id_is_rejected() {
        let json = r#"{ "id": "OSM:Venue:1", "name": "Somewhere" }"#;
        let dto: StopPlaceDto = serde_json::from_str(json).unwrap();
        assert!(matches!(
            station(&dto).unwrap_err(),
            ParseError::StopPlaceId(_)
        ));
    }
}
